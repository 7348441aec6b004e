// crates/bytegen-core/src/preset/csv.rs
//
// One CSV row: formula neutralization per cell, then RFC4180 quoting,
// then join on the delimiter. No line terminator is appended.

use std::borrow::Cow;

use crate::config::options::{CsvOptions, NeutralizeStrategy};

/// Leading characters a spreadsheet may treat as a formula trigger.
pub const RISKY_PREFIX: [char; 6] = ['=', '+', '-', '@', '\t', '\r'];

pub fn is_risky(cell: &str) -> bool {
    cell.chars().next().is_some_and(|c| RISKY_PREFIX.contains(&c))
}

pub fn neutralize_cell(cell: &str, strategy: NeutralizeStrategy) -> Cow<'_, str> {
    if is_risky(cell) {
        let mut out = String::with_capacity(cell.len() + 1);
        out.push(strategy.prefix());
        out.push_str(cell);
        Cow::Owned(out)
    } else {
        Cow::Borrowed(cell)
    }
}

pub fn needs_quoting(cell: &str, delimiter: char, quote: char) -> bool {
    cell.starts_with(' ')
        || cell.ends_with(' ')
        || cell
            .chars()
            .any(|c| c == delimiter || c == quote || c == '\n' || c == '\r')
}

pub fn quote_cell(cell: &str, delimiter: char, quote: char) -> Cow<'_, str> {
    if !needs_quoting(cell, delimiter, quote) {
        return Cow::Borrowed(cell);
    }
    let mut out = String::with_capacity(cell.len() + 2);
    out.push(quote);
    for c in cell.chars() {
        if c == quote {
            out.push(quote);
        }
        out.push(c);
    }
    out.push(quote);
    Cow::Owned(out)
}

pub fn render_cell(cell: &str, opts: &CsvOptions) -> String {
    let defused = if opts.neutralize {
        neutralize_cell(cell, opts.strategy)
    } else {
        Cow::Borrowed(cell)
    };
    quote_cell(&defused, opts.delimiter, opts.quote).into_owned()
}

pub fn render_row<S: AsRef<str>>(cells: &[S], opts: &CsvOptions) -> String {
    let mut out = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(opts.delimiter);
        }
        out.push_str(&render_cell(cell.as_ref(), opts));
    }
    out
}
