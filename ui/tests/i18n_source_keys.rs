//! Every `t!("...")` literal in `src/` must resolve in the fallback bundle.
//! `fl!` already checks this at compile time for the default build; this
//! guard also covers files behind platform `cfg`s that a host build skips.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "admetrics-ui.ftl";

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

/// Literal first arguments of `t!` calls. Dynamic ids are not seen.
fn keys_in_source(content: &str) -> Vec<String> {
    const NEEDLE: &str = "t!(\"";
    let mut keys = Vec::new();
    let mut rest = content;
    while let Some(pos) = rest.find(NEEDLE) {
        rest = &rest[pos + NEEDLE.len()..];
        let Some(end) = rest.find('"') else { break };
        let key = &rest[..end];
        if !key.is_empty() && key.chars().all(valid_key_char) {
            keys.push(key.to_string());
        }
        rest = &rest[end..];
    }
    keys
}

fn collect_rs_files(root: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(root) else { return };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
            out.push(path);
        }
    }
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback = fs::read_to_string(crate_root.join("i18n/en-US").join(FTL_FILENAME))
        .expect("fallback FTL file is readable");
    let fallback_keys = parse_ftl_keys(&fallback);
    assert!(!fallback_keys.is_empty(), "no message keys parsed from fallback");

    let mut files = Vec::new();
    collect_rs_files(&crate_root.join("src"), &mut files);
    assert!(!files.is_empty(), "no sources found under src/");

    let mut referenced = BTreeSet::new();
    for file in files {
        let content = fs::read_to_string(&file).unwrap_or_default();
        referenced.extend(keys_in_source(&content));
    }

    let missing: Vec<&String> = referenced.iter().filter(|k| !fallback_keys.contains(*k)).collect();
    assert!(
        missing.is_empty(),
        "translation keys used in src/ but missing from en-US: {missing:?}"
    );

    let unused: Vec<&String> = fallback_keys.iter().filter(|k| !referenced.contains(*k)).collect();
    if !unused.is_empty() {
        eprintln!("[i18n] {} fallback keys unused in sources: {unused:?}", unused.len());
    }
}

#[test]
fn source_scanner_reads_literal_ids_only() {
    let src = r#"t!("nav-dashboard") t!("not-found-body", path = p) t!(dynamic)"#;
    assert_eq!(keys_in_source(src), vec!["nav-dashboard", "not-found-body"]);
}
