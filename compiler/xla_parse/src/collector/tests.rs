use pretty_assertions::assert_eq;
use xla_ir::{dump_tree, AtomPattern, ErrorKind, Expr, ListKind};

use crate::parse;

fn items(root: &Expr) -> &[Expr] {
    match root.as_list() {
        Some((ListKind::Collection, items)) => items,
        _ => panic!("expected root collection, got {root:?}"),
    }
}

fn error_of(root: &Expr) -> (ErrorKind, &str, u32) {
    match root.as_error() {
        Some((kind, message)) => (kind, message, root.position),
        None => panic!("expected error node, got:\n{}", dump_tree(root)),
    }
}

// === Well-formed Programs ===

#[test]
fn header_program() {
    let root = parse("#! (def x 5) (put x) !");
    let expected = "\
collection @0
  collection @0
  action @3
    atom \"def\" @4
    atom \"x\" @8
    atom \"5\" integer @10
  action @13
    atom \"put\" @14
    atom \"x\" @18
";
    assert_eq!(dump_tree(&root), expected);
}

#[test]
fn top_level_may_end_at_eof() {
    let root = parse("(a)\n(b)\n");
    assert_eq!(items(&root).len(), 2);
    assert_eq!(root.position, 0);
}

#[test]
fn empty_input_is_empty_collection() {
    let root = parse("");
    assert!(items(&root).is_empty());
    let root = parse("   \n\t");
    assert!(items(&root).is_empty());
}

#[test]
fn every_bracket_kind() {
    let root = parse("(a {b} [c] <d>)");
    let (kind, action) = items(&root)[0].as_list().unwrap();
    assert_eq!(kind, ListKind::Action);
    let kinds: Vec<_> = action.iter().skip(1).map(Expr::list_kind).collect();
    assert_eq!(
        kinds,
        vec![
            Some(ListKind::Runtime),
            Some(ListKind::Raw),
            Some(ListKind::Prompt)
        ]
    );
}

#[test]
fn nested_collection_at_statement_level() {
    let root = parse("#(a) (b)! (c)");
    let top = items(&root);
    assert_eq!(top.len(), 2);
    assert!(top[0].is_list_of(ListKind::Collection));
    assert_eq!(top[0].as_list().unwrap().1.len(), 2);
}

#[test]
fn hash_and_bang_are_atom_chars_inside_lists() {
    let root = parse("(put hello! #1)");
    let (_, action) = items(&root)[0].as_list().unwrap();
    let texts: Vec<_> = action.iter().filter_map(Expr::as_atom).collect();
    assert_eq!(texts, vec!["put", "hello!", "#1"]);
}

#[test]
fn atoms_are_classified() {
    let root = parse("(x 0xff 1_000 2.5 https://a.io /tmp :t)");
    let (_, action) = items(&root)[0].as_list().unwrap();
    let patterns: Vec<_> = action.iter().filter_map(Expr::pattern).collect();
    assert_eq!(
        patterns,
        vec![
            AtomPattern::None,
            AtomPattern::Hex,
            AtomPattern::Integer,
            AtomPattern::Real,
            AtomPattern::Url,
            AtomPattern::FilePath,
            AtomPattern::Tag,
        ]
    );
}

#[test]
fn atom_flushed_by_bracket() {
    let root = parse("(f(g)h)");
    let (_, action) = items(&root)[0].as_list().unwrap();
    assert_eq!(action.len(), 3);
    assert_eq!(action[0].as_atom(), Some("f"));
    assert_eq!(action[1].position, 2);
    assert_eq!(action[2].as_atom(), Some("h"));
    assert_eq!(action[2].position, 5);
}

#[test]
fn positions_count_chars() {
    let root = parse("(λ é)");
    let (_, action) = items(&root)[0].as_list().unwrap();
    assert_eq!(action[1].position, 3);
}

// === Comments ===

#[test]
fn comments_are_kept() {
    let root = parse("; header\n(a ; trailing\n b)");
    let top = items(&root);
    assert_eq!(top[0], Expr::comment(0, " header"));
    let (_, action) = top[1].as_list().unwrap();
    assert_eq!(action[1], Expr::comment(12, " trailing"));
    assert_eq!(action[2].as_atom(), Some("b"));
}

#[test]
fn comment_flushes_atom() {
    let root = parse("(a;c\n)");
    let (_, action) = items(&root)[0].as_list().unwrap();
    assert_eq!(action[0].as_atom(), Some("a"));
    assert_eq!(action[1], Expr::comment(2, "c"));
}

// === Errors ===

#[test]
fn unclosed_reports_end_of_input() {
    let source = "#! (fn (:a :b) :error !";
    let root = parse(source);
    let (kind, message, position) = error_of(&root);
    assert_eq!(kind, ErrorKind::UnclosedDelimiter);
    assert_eq!(position, 23);
    assert!(message.contains("opened at position 3"), "{message}");
}

#[test]
fn bare_atom_at_top_level() {
    let parsed = parse("(ok) stray (x)");
    let (kind, message, position) = error_of(&parsed);
    assert_eq!(kind, ErrorKind::BareCollectionItem);
    assert_eq!(position, 5);
    assert_eq!(
        message,
        "all items inside a collection must start as a list type"
    );
}

#[test]
fn bare_atom_in_nested_collection() {
    let parsed = parse("#(a) b!");
    let (kind, _, position) = error_of(&parsed);
    assert_eq!(kind, ErrorKind::BareCollectionItem);
    assert_eq!(position, 5);
}

#[test]
fn trailing_content_after_bang() {
    let parsed = parse("(a) ! (b)");
    let (kind, message, position) = error_of(&parsed);
    assert_eq!(kind, ErrorKind::TrailingContent);
    assert_eq!(position, 6);
    assert!(message.contains("position 6"));
}

#[test]
fn trailing_whitespace_is_fine() {
    assert!(!parse("#! (a) !\n\n").is_error());
}

#[test]
fn mismatched_closer() {
    let parsed = parse("(a ]");
    let (kind, message, position) = error_of(&parsed);
    assert_eq!(kind, ErrorKind::MismatchedDelimiter);
    assert_eq!(position, 3);
    assert!(message.contains("expected `)`"), "{message}");
}

#[test]
fn stray_closer_at_top_level() {
    let parsed = parse(")");
    let (kind, message, _) = error_of(&parsed);
    assert_eq!(kind, ErrorKind::MismatchedDelimiter);
    assert!(message.contains("no matching opener"));
}

#[test]
fn nested_error_replaces_whole_tree() {
    let root = parse("(a) (b [c)");
    let (kind, _, position) = error_of(&root);
    assert_eq!(kind, ErrorKind::MismatchedDelimiter);
    assert_eq!(position, 9);
}

#[test]
fn deep_nesting_parses() {
    let depth = 1_000;
    let source = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
    assert!(!parse(&source).is_error());
}
