//! Diagnostics for malformed programs.

use pretty_assertions::assert_eq;
use xla_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use xla_diagnostic::{Diagnostic, ErrorCode};

use crate::common::parse_err;

fn render(diag: &Diagnostic, source: &str) -> String {
    let mut out = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut out, ColorMode::Never, false)
            .with_source(source)
            .with_file_path("main.xla");
        emitter.emit(diag);
        emitter.flush();
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn error_codes_by_failure() {
    let cases = [
        ("(a", ErrorCode::E1001, 2),
        ("(a ]", ErrorCode::E1002, 3),
        ("(ok) stray", ErrorCode::E1003, 5),
        ("(a) ! (b)", ErrorCode::E1004, 6),
    ];
    for (source, code, position) in cases {
        let diag = parse_err(source);
        assert_eq!(diag.code, code, "{source}");
        assert_eq!(diag.primary_position(), Some(position), "{source}");
    }
}

#[test]
fn unclosed_program_renders_both_ends() {
    let source = "#! (fn (:a :b) :error !";
    let diag = parse_err(source);
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.primary_position(), Some(23));

    let expected = "\
error[E1001]: unclosed `(` opened at position 3: expected `)` before end of input
 --> main.xla:1:24
  |
1 | #! (fn (:a :b) :error !
  |                        ^ input ends here
 ::: main.xla:1:4
  |
1 | #! (fn (:a :b) :error !
  |    - unclosed delimiter
  = help: add the missing closing delimiter

";
    assert_eq!(render(&diag, source), expected);
}

#[test]
fn positions_map_to_later_lines() {
    let source = "(put a)\n(put b\n";
    let diag = parse_err(source);
    let text = render(&diag, source);
    assert!(text.contains(" --> main.xla:3:1"), "{text}");
    assert!(text.contains(" ::: main.xla:2:1"), "{text}");
}
