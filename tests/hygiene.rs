//! Source rules for `src/` that the compiler cannot enforce.
//!
//! Browser APIs stay behind the `util/` glue (plus pointer capture in the
//! panel frame), shared state is reached through the `use_*` accessors,
//! production code never panics on purpose, and every side-car test file is
//! wired into its module.

use std::fs;
use std::path::{Path, PathBuf};

struct Source {
    /// Path relative to `src/`, with `/` separators.
    rel: String,
    text: String,
}

impl Source {
    fn is_test(&self) -> bool {
        self.rel.ends_with("_test.rs")
    }

    /// Lines that are not `//` comments.
    fn code_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim_start().starts_with("//"))
            .map(|(i, line)| (i + 1, line))
    }
}

fn src_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src")
}

fn walk(dir: &Path, root: &Path, out: &mut Vec<Source>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            walk(&path, root, out);
            continue;
        }
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }
        let Ok(text) = fs::read_to_string(&path) else {
            continue;
        };
        let rel = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .to_string_lossy()
            .replace('\\', "/");
        out.push(Source { rel, text });
    }
}

fn sources() -> Vec<Source> {
    let root = src_root();
    let mut out = Vec::new();
    walk(&root, &root, &mut out);
    out.sort_by(|a, b| a.rel.cmp(&b.rel));
    out
}

fn production() -> Vec<Source> {
    sources().into_iter().filter(|s| !s.is_test()).collect()
}

/// Every production line containing `needle` in a file `allowed` rejects.
fn offenders(needle: &str, allowed: impl Fn(&str) -> bool) -> Vec<String> {
    production()
        .iter()
        .filter(|s| !allowed(&s.rel))
        .flat_map(|s| {
            s.code_lines()
                .filter(|(_, line)| line.contains(needle))
                .map(|(n, line)| format!("  {}:{n}: {}", s.rel, line.trim()))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn assert_none(rule: &str, hits: &[String]) {
    assert!(hits.is_empty(), "{rule}:\n{}", hits.join("\n"));
}

#[test]
fn scan_sees_the_crate() {
    let files = sources();
    assert!(files.iter().any(|s| s.rel == "lib.rs"), "src/ not found at {}", src_root().display());
    assert!(files.iter().any(|s| s.rel == "state/auth.rs"));
}

#[test]
fn production_code_does_not_panic_on_purpose() {
    for needle in [".unwrap()", ".expect(", "panic!(", "unreachable!(", "todo!(", "unimplemented!(", "dbg!("] {
        assert_none(needle, &offenders(needle, |_| false));
    }
}

#[test]
fn local_storage_is_only_touched_by_the_persistence_port() {
    assert_none(
        "localStorage access outside util/ui_persistence.rs",
        &offenders("local_storage", |rel| rel == "util/ui_persistence.rs"),
    );
}

#[test]
fn browser_apis_stay_in_glue_modules() {
    assert_none(
        "web_sys outside util/ and the panel frame",
        &offenders("web_sys::", |rel| rel.starts_with("util/") || rel == "components/panel_frame.rs"),
    );
}

#[test]
fn shared_signals_are_reached_through_accessors() {
    assert_none(
        "expect_context::<RwSignal<..>> outside use_auth/use_panels",
        &offenders("expect_context::<RwSignal", |rel| rel == "util/auth.rs" || rel == "util/panels.rs"),
    );
}

#[test]
fn ui_code_logs_through_leptos_or_tracing() {
    assert_none("println!/eprintln! in src", &offenders("println!(", |_| false));
}

#[test]
fn side_car_tests_are_wired_into_their_modules() {
    let files = sources();
    let unwired: Vec<&str> = files
        .iter()
        .filter(|s| s.is_test())
        .filter(|test| {
            let file = test.rel.rsplit('/').next().unwrap_or(&test.rel);
            let parent = test.rel.replace("_test.rs", ".rs");
            let attr = format!("#[path = \"{file}\"]");
            !files.iter().any(|s| s.rel == parent && s.text.contains(&attr))
        })
        .map(|s| s.rel.as_str())
        .collect();
    assert!(unwired.is_empty(), "side-car tests without #[path] wiring: {unwired:?}");
}
