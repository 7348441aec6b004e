// crates/bytegen-core/src/text/bold.rs
//
// Header bolding: "Title: body" -> "✅【 𝐓𝐢𝐭𝐥𝐞】: body".
// Bold glyphs are the Mathematical Alphanumeric Symbols block, reached by
// constant offsets from ASCII. No inverse is provided.

use crate::config::options::BoldOptions;

pub const MARK_OPEN: &str = "\u{2705}\u{3010} ";
pub const MARK_CLOSE: &str = "\u{3011}";

/// U+1D400 MATHEMATICAL BOLD CAPITAL A
const BOLD_UPPER_A: u32 = 0x1D400;
/// U+1D41A MATHEMATICAL BOLD SMALL A
const BOLD_LOWER_A: u32 = 0x1D41A;
/// U+1D7CE MATHEMATICAL BOLD DIGIT ZERO
const BOLD_DIGIT_0: u32 = 0x1D7CE;

#[inline]
pub fn bold_char(c: char, include_digits: bool) -> char {
    let mapped = match c {
        'A'..='Z' => char::from_u32(BOLD_UPPER_A + (c as u32 - 'A' as u32)),
        'a'..='z' => char::from_u32(BOLD_LOWER_A + (c as u32 - 'a' as u32)),
        '0'..='9' if include_digits => char::from_u32(BOLD_DIGIT_0 + (c as u32 - '0' as u32)),
        _ => None,
    };
    mapped.unwrap_or(c)
}

pub fn to_math_bold(text: &str, opts: &BoldOptions) -> String {
    text.chars()
        .map(|c| bold_char(c, opts.include_digits))
        .collect()
}

/// Split at the first colon, bold the trimmed header and wrap it.
/// The body only loses leading whitespace. Empty input stays empty.
pub fn bold_wrap(text: &str, opts: &BoldOptions) -> String {
    if text.is_empty() {
        return String::new();
    }

    match text.split_once(':') {
        None => format!(
            "{MARK_OPEN}{}{MARK_CLOSE}",
            to_math_bold(text.trim(), opts)
        ),
        Some((head, body)) => format!(
            "{MARK_OPEN}{}{MARK_CLOSE}: {}",
            to_math_bold(head.trim(), opts),
            body.trim_start()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LETTERS: BoldOptions = BoldOptions {
        include_digits: false,
    };
    const DIGITS: BoldOptions = BoldOptions {
        include_digits: true,
    };

    #[test]
    fn block_edges() {
        assert_eq!(bold_char('A', false), '\u{1D400}');
        assert_eq!(bold_char('Z', false), '\u{1D419}');
        assert_eq!(bold_char('a', false), '\u{1D41A}');
        assert_eq!(bold_char('z', false), '\u{1D433}');
        assert_eq!(bold_char('0', true), '\u{1D7CE}');
        assert_eq!(bold_char('9', true), '\u{1D7D7}');
        assert_eq!(bold_char('9', false), '9');
    }

    #[test]
    fn only_first_colon_splits() {
        assert_eq!(
            bold_wrap("  Key : a: b  ", &LETTERS),
            "\u{2705}\u{3010} \u{1D40A}\u{1D41E}\u{1D432}\u{3011}: a: b  "
        );
    }

    #[test]
    fn digits_follow_option() {
        assert_eq!(bold_wrap("v2", &LETTERS), "\u{2705}\u{3010} \u{1D42F}2\u{3011}");
        assert_eq!(
            bold_wrap("v2", &DIGITS),
            "\u{2705}\u{3010} \u{1D42F}\u{1D7D0}\u{3011}"
        );
    }

    #[test]
    fn empty_header_and_empty_body() {
        assert_eq!(bold_wrap(":", &LETTERS), "\u{2705}\u{3010} \u{3011}: ");
        assert_eq!(bold_wrap("", &LETTERS), "");
    }
}
