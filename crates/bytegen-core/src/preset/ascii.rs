// crates/bytegen-core/src/preset/ascii.rs
//
// Lossy ASCII folding. NFKD, drop combining marks, keep < 0x80, map a few
// symbols, and apply the unmappable policy to the rest. Dropped or replaced
// codepoints are intended data loss, not errors.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config::options::{AsciiOptions, Unmappable};

/// Non-ASCII codepoints with an ASCII spelling that NFKD does not provide.
pub const SYMBOLS: [(char, &str); 17] = [
    ('\u{00B0}', " degrees"),
    ('\u{20AC}', "EUR"),
    ('\u{00A3}', "GBP"),
    ('\u{00A9}', "(c)"),
    ('\u{00AE}', "(R)"),
    ('\u{00D7}', "x"),
    ('\u{00DF}', "ss"),
    ('\u{00C6}', "AE"),
    ('\u{00E6}', "ae"),
    ('\u{0152}', "OE"),
    ('\u{0153}', "oe"),
    ('\u{00D8}', "O"),
    ('\u{00F8}', "o"),
    ('\u{0141}', "L"),
    ('\u{0142}', "l"),
    ('\u{0110}', "D"),
    ('\u{0111}', "d"),
];

fn symbol(c: char) -> Option<&'static str> {
    SYMBOLS.iter().find(|(from, _)| *from == c).map(|(_, to)| *to)
}

pub fn fold(text: &str, opts: &AsciiOptions) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.nfkd() {
        if is_combining_mark(c) {
            continue;
        }
        if c.is_ascii() {
            out.push(c);
        } else if let Some(s) = symbol(c) {
            out.push_str(s);
        } else if let Unmappable::Replace(r) = opts.unmappable {
            out.push(r);
        }
    }
    out
}
