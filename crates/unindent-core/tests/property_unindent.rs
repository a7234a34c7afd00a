use proptest::prelude::*;

use unindent_core::lines::{indent_level, newline_style};
use unindent_core::strip::{min_indent, unindent};

fn lines_of(s: &str) -> Vec<&str> {
    s.split('\n').collect()
}

proptest! {
    #[test]
    fn unindent_is_idempotent(text in "[ \t\na-c\r]{0,60}") {
        let once = unindent(&text);
        prop_assert_eq!(unindent(&once), once.clone());
    }

    #[test]
    fn single_line_prefix_is_removed(ws in "[ \t]{0,8}", s in "[a-z][a-z \t]{0,20}") {
        let input = format!("{ws}{s}");
        prop_assert_eq!(unindent(&input), s);
    }

    #[test]
    fn line_count_and_newline_style_are_preserved(text in "[ \ta\n]{0,40}", crlf in any::<bool>()) {
        let input = if crlf { text.replace('\n', "\r\n") } else { text };
        let out = unindent(&input);
        prop_assert_eq!(lines_of(&out).len(), lines_of(&input).len());
        prop_assert_eq!(newline_style(&out), newline_style(&input));
    }

    #[test]
    fn relative_indentation_is_preserved(
        base in "[ \t]{0,4}",
        extra in proptest::collection::vec(("[ \t]{0,4}", "[a-z]{1,6}"), 1..6),
    ) {
        let input = extra
            .iter()
            .map(|(ws, s)| format!("{base}{ws}{s}"))
            .collect::<Vec<_>>()
            .join("\n");
        let width = min_indent(&input);
        prop_assert!(width >= base.len());

        let out = unindent(&input);
        for (before, after) in lines_of(&input).iter().zip(lines_of(&out)) {
            let b = indent_level(before).unwrap();
            let a = indent_level(after).unwrap();
            prop_assert_eq!(a, b - width);
            prop_assert_eq!(&before[b..], &after[a..]);
        }
    }

    #[test]
    fn output_has_no_common_indent(text in "[ \ta-b\n]{0,40}") {
        prop_assert_eq!(min_indent(&unindent(&text)), 0);
    }
}
