// Sanitization utilities
// Text that ends up in a mail header or a chat topic must stay on one line.

/// Escape line breaks so `subject` can travel over a single-line transport.
///
/// Every LF becomes the two characters `\n` and every CR becomes `\r`. The output
/// never contains a raw CR or LF, and a string without raw line breaks is
/// returned unchanged.
pub fn sanitize_subject(subject: &str) -> String {
    subject.replace('\n', "\\n").replace('\r', "\\r")
}

/// True when `text` is safe to put in a single-line header as-is.
pub fn is_single_line(text: &str) -> bool {
    !text.contains(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escapes_line_breaks() {
        assert_eq!(sanitize_subject("a\nb"), "a\\nb");
        assert_eq!(sanitize_subject("a\rb"), "a\\rb");
        assert_eq!(sanitize_subject("a\r\nb"), "a\\r\\nb");
        assert_eq!(sanitize_subject("\n\n"), "\\n\\n");
    }

    #[test]
    fn test_plain_subject_unchanged() {
        assert_eq!(sanitize_subject("n1: NPE"), "n1: NPE");
        assert_eq!(sanitize_subject(""), "");
    }

    #[test]
    fn test_escaped_text_is_not_double_escaped() {
        let once = sanitize_subject("line one\nline two");
        assert_eq!(sanitize_subject(&once), once);
    }

    proptest! {
        #[test]
        fn test_output_is_single_line(input in ".*", breaks in prop::collection::vec(prop::sample::select(vec!["\n", "\r", "\r\n"]), 0..4)) {
            let text = breaks.iter().fold(input, |acc, b| format!("{acc}{b}x"));
            let sanitized = sanitize_subject(&text);
            prop_assert!(is_single_line(&sanitized));
        }

        #[test]
        fn test_idempotent(input in "(?s).*") {
            let once = sanitize_subject(&input);
            prop_assert_eq!(sanitize_subject(&once), once);
        }

        #[test]
        fn test_identity_without_line_breaks(input in "[^\r\n]*") {
            prop_assert_eq!(sanitize_subject(&input), input);
        }
    }
}
