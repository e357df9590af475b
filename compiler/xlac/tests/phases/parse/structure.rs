//! Trees produced by collect + collapse.

use pretty_assertions::assert_eq;
use xla_ir::{dump_tree, render_program, AtomPattern, ListKind};

use crate::common::{parse_ok, statements};

#[test]
fn header_program_tree() {
    let tree = parse_ok("#! (def x 5) (put x) !");
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
    assert_eq!(dump_tree(&tree), expected);
}

#[test]
fn multiline_program_with_comments() {
    let source = "\
; greet the user
(def name world) ; bind
(put hello name)
";
    let tree = parse_ok(source);
    let top = statements(&tree);
    assert_eq!(top.len(), 3);
    assert_eq!(top[0].as_atom(), None);
    assert!(top[1].is_list_of(ListKind::Action));
    assert!(top[2].is_list_of(ListKind::Action));
}

#[test]
fn tags_become_metadata() {
    let tree = parse_ok("(task :urgent :review deploy [:owner ops])");
    let (_, action) = statements(&tree)[0].as_list().unwrap();
    assert_eq!(action.len(), 3);
    assert_eq!(action[1].as_atom(), Some("deploy"));
    assert_eq!(action[1].tags.as_slice(), ["urgent", "review"]);

    let (_, raw) = action[2].as_list().unwrap();
    assert_eq!(raw[0].tags.as_slice(), ["owner"]);
    assert!(dump_tree(&tree).lines().all(|l| !l.contains(" tag")));
}

#[test]
fn atom_patterns_survive_the_pipeline() {
    let tree = parse_ok("(put 1_000 0b101 -3.5 https://example.com/a ./notes.txt plain)");
    let (_, action) = statements(&tree)[0].as_list().unwrap();
    let patterns: Vec<_> = action[1..].iter().filter_map(|e| e.pattern()).collect();
    assert_eq!(
        patterns,
        vec![
            AtomPattern::Integer,
            AtomPattern::Binary,
            AtomPattern::Real,
            AtomPattern::Url,
            AtomPattern::FilePath,
            AtomPattern::None,
        ]
    );
}

#[test]
fn rendered_tree_parses_back_to_itself() {
    let source = "#! (:a f [:b x y] {rt} <ask me>) (put :loud z) ; end\n!";
    let tree = parse_ok(source);
    let again = parse_ok(&render_program(&tree));
    assert!(again.same_shape(&tree), "{}", render_program(&tree));
}
