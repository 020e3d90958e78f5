use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "crimescroll-ui.ftl";
const I18N_DIR: &str = "i18n";

/// Message IDs defined in a Fluent file. Terms (`-name`) and comments are
/// skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn rust_sources(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
        } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
            files.push(path);
        }
    }
    files
}

/// Literal first arguments of `t!("...")` calls, with or without arguments.
/// Macros that merely end in `t` (`format!`, `concat!`) are not calls.
fn referenced_keys(source: &str) -> BTreeSet<String> {
    const CALL: &str = "t!(\"";
    source
        .match_indices(CALL)
        .filter(|(at, _)| {
            source[..*at]
                .chars()
                .next_back()
                .map_or(true, |c| !(c.is_alphanumeric() || c == '_'))
        })
        .filter_map(|(at, _)| source[at + CALL.len()..].split_once('"').map(|(key, _)| key))
        .filter(|key| !key.is_empty() && key.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

#[test]
fn every_referenced_key_exists_in_every_locale() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let referenced: BTreeSet<String> = rust_sources(&crate_root.join("src"))
        .iter()
        .filter_map(|path| fs::read_to_string(path).ok())
        .flat_map(|source| referenced_keys(&source))
        .collect();
    assert!(referenced.contains("nav-story"), "source scan found no t! keys");

    let mut locales: Vec<String> = fs::read_dir(&i18n_root)
        .expect("i18n directory")
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    locales.sort();
    assert!(locales.iter().any(|l| l == "en-US"), "missing fallback locale");

    let mut report = Vec::new();
    for locale in &locales {
        let path = i18n_root.join(locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("cannot read {}: {err}", path.display()));
        let defined = parse_ftl_keys(&content);
        let missing: Vec<_> = referenced.difference(&defined).cloned().collect();
        if !missing.is_empty() {
            report.push(format!("  {locale}: {}", missing.join(", ")));
        }
    }

    assert!(
        report.is_empty(),
        "Referenced translation keys missing:\n{}",
        report.join("\n")
    );
}

#[test]
fn key_scanner_handles_argument_forms() {
    // Built at runtime so the scan of this file does not pick the samples up.
    let call = ["t", "!("].concat();
    let source = format!(
        r#"{call}"a-b"); crate::{call}"chart-title", state = s); {call}"Not A Key"); format!("plain")"#
    );
    let keys: Vec<_> = referenced_keys(&source).into_iter().collect();
    assert_eq!(keys, vec!["a-b", "chart-title"]);
}
