use serde_json::Value;

/// A single JSON string literal (quotes included). Non-ASCII is emitted as-is.
pub fn string_literal(text: &str) -> String {
    Value::String(text.to_owned()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quote_backslash_and_controls() {
        assert_eq!(
            string_literal("Line\nBreak\tTab\"Quote\" \\ \u{1}"),
            r#""Line\nBreak\tTab\"Quote\" \\ \u0001""#
        );
    }

    #[test]
    fn keeps_unicode() {
        assert_eq!(string_literal("caf\u{E9} \u{2705}"), "\"caf\u{E9} \u{2705}\"");
    }
}
