//! Resource references backed by a directory.

use std::fs;

use pretty_assertions::assert_eq;
use xla_diagnostic::ErrorCode;
use xla_eval::{DirectoryResources, Interpreter};

use crate::common::run_with;

fn resource_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("profiles")).unwrap();
    fs::write(dir.path().join("profiles/general.yaml"), "role: general\n").unwrap();
    fs::write(dir.path().join("profiles/.hidden.yaml"), "").unwrap();
    fs::create_dir(dir.path().join("prompts")).unwrap();
    fs::write(dir.path().join("prompts/intro.md"), "# Intro\n").unwrap();
    dir
}

#[test]
fn references_resolve_to_locations() {
    let dir = resource_dir();
    let table = DirectoryResources::load(dir.path()).unwrap();
    assert_eq!(table.types(), vec!["profiles", "prompts"]);
    assert_eq!(table.len(), 2);

    let builder = Interpreter::builder().resources(table);
    let outcome = run_with(builder, "(def p @prompts/intro) (put p) (ref @profiles/general)");

    let intro = dir.path().join("prompts/intro.md");
    let general = dir.path().join("profiles/general.yaml");
    assert_eq!(outcome.output, format!("{}\n", intro.display()));
    assert_eq!(outcome.value_text(), general.display().to_string());
}

#[test]
fn resolved_reference_carries_kind_tags() {
    let dir = resource_dir();
    let builder = Interpreter::builder().resources(DirectoryResources::load(dir.path()).unwrap());
    let outcome = run_with(builder, "(yield @prompts/intro)");
    let value = outcome.result.as_ref().unwrap();
    assert_eq!(value.tags.as_slice(), ["resource", "md"]);
}

#[test]
fn failed_references_map_to_resource_codes() {
    let dir = resource_dir();
    let cases = [
        ("(put @profiles)", ErrorCode::E4001),
        ("(put @agents/helper)", ErrorCode::E4002),
        ("(put @profiles/hidden)", ErrorCode::E4003),
        ("(put @profiles/.hidden)", ErrorCode::E4003),
    ];
    for (source, code) in cases {
        let builder =
            Interpreter::builder().resources(DirectoryResources::load(dir.path()).unwrap());
        let outcome = run_with(builder, source);
        let diag = outcome.diagnostic();
        assert_eq!(diag.code, code, "{source}");
        assert_eq!(diag.primary_position(), Some(5), "{source}");
    }
}
