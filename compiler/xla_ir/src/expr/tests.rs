use pretty_assertions::assert_eq;

use crate::{AtomPattern, ErrorKind, Expr, ListKind, NodeKind};

fn collection(items: Vec<Expr>) -> Expr {
    Expr::list(0, ListKind::Collection, items)
}

// === Construction ===

#[test]
fn source_atoms_are_classified() {
    assert_eq!(Expr::atom(0, "42").pattern(), Some(AtomPattern::Integer));
    assert_eq!(Expr::atom(0, ":urgent").pattern(), Some(AtomPattern::Tag));
    assert_eq!(Expr::atom(0, "name").pattern(), Some(AtomPattern::None));
}

#[test]
fn runtime_atoms_are_never_tags() {
    assert_eq!(Expr::value_atom(0, ":x").pattern(), Some(AtomPattern::None));
    assert_eq!(Expr::value_atom(0, "0x1f").pattern(), Some(AtomPattern::Hex));
}

#[test]
fn yields_do_not_nest() {
    let once = Expr::yielded(Expr::atom(3, "v"));
    let twice = Expr::yielded(once.clone());
    assert_eq!(once, twice);
    assert_eq!(twice.position, 3);
    assert_eq!(once.unwrap_yield().as_atom(), Some("v"));
}

#[test]
fn node_kinds() {
    assert_eq!(Expr::empty(0).node_kind(), NodeKind::List(ListKind::Collection));
    assert_eq!(Expr::comment(0, "c").node_kind(), NodeKind::Comment);
    let err = Expr::error(4, ErrorKind::Undefined, "nope");
    assert!(err.is_error() && err.is_signal());
    assert_eq!(err.as_error(), Some((ErrorKind::Undefined, "nope")));
}

// === Integer truthiness ===

#[test]
fn zero_integers() {
    for text in ["0", "-0", "+000", "0_000"] {
        assert!(Expr::atom(0, text).is_zero_integer(), "{text}");
    }
    for text in ["1", "-7", "1_000", "99999999999999999999999"] {
        assert!(!Expr::atom(0, text).is_zero_integer(), "{text}");
    }
    assert!(!Expr::atom(0, "0.0").is_zero_integer());
}

// === Program values ===

#[test]
fn last_value_looks_through_collections() {
    let root = collection(vec![
        Expr::empty(0),
        Expr::atom(5, "first"),
        collection(vec![Expr::atom(9, "inner")]),
    ]);
    assert_eq!(root.last_value().as_atom(), Some("inner"));
}

#[test]
fn last_value_of_empty_collection_is_itself() {
    let root = collection(vec![]);
    assert_eq!(root.last_value(), &root);
}

#[test]
fn last_value_unwraps_yield() {
    let root = collection(vec![Expr::yielded(Expr::atom(0, "done"))]);
    assert_eq!(root.last_value().as_atom(), Some("done"));
}

#[test]
fn output_lines_flatten_collections() {
    let value = collection(vec![
        Expr::atom(0, "a"),
        collection(vec![Expr::atom(0, "b"), Expr::atom(0, "c")]),
        Expr::comment(0, "skipped"),
        Expr::list(0, ListKind::Raw, vec![Expr::atom(0, "x")]),
    ]);
    assert_eq!(value.output_lines(), vec!["a", "b", "c", "[x]"]);
    assert_eq!(value.text_form(), "a\nb\nc\n[x]");
}

// === Shape comparison ===

#[test]
fn same_shape_ignores_positions() {
    let a = collection(vec![Expr::atom(3, "x")]);
    let b = Expr::list(7, ListKind::Collection, vec![Expr::atom(12, "x")]);
    assert!(a.same_shape(&b));
    assert_ne!(a, b);
}

#[test]
fn same_shape_checks_tags_and_kinds() {
    let plain = Expr::atom(0, "x");
    let tagged = Expr::atom(0, "x").with_tags(["t".to_owned()]);
    assert!(!plain.same_shape(&tagged));
    let raw = Expr::list(0, ListKind::Raw, vec![]);
    let action = Expr::list(0, ListKind::Action, vec![]);
    assert!(!raw.same_shape(&action));
}

#[test]
fn walk_visits_preorder() {
    let root = collection(vec![Expr::list(
        1,
        ListKind::Action,
        vec![Expr::atom(2, "a"), Expr::atom(4, "b")],
    )]);
    let mut positions = Vec::new();
    root.walk(&mut |e| positions.push(e.position));
    assert_eq!(positions, vec![0, 1, 2, 4]);
}
