// crates/bytegen-core/src/text/clean.rs
//
// Cleaner. Runs in a fixed order:
// 1. smart punctuation / odd spaces -> ASCII (single pass)
// 2. drop zero-width and bidi controls
// 3. drop C0/C1 controls except \t \n \r (newlines belong to the finalizer)

use crate::config::options::CleanOptions;

/// Replacement table for step 1.
pub const SMART_PUNCT: [(char, &str); 14] = [
    ('\u{2018}', "'"),   // left single quote
    ('\u{2019}', "'"),   // right single quote
    ('\u{201C}', "\""),  // left double quote
    ('\u{201D}', "\""),  // right double quote
    ('\u{2032}', "'"),   // prime
    ('\u{2033}', "\""),  // double prime
    ('\u{2012}', "-"),   // figure dash
    ('\u{2013}', "-"),   // en dash
    ('\u{2014}', "-"),   // em dash
    ('\u{2212}', "-"),   // minus sign
    ('\u{2026}', "..."), // ellipsis
    ('\u{00A0}', " "),   // no-break space
    ('\u{2007}', " "),   // figure space
    ('\u{202F}', " "),   // narrow no-break space
];

/// Codepoints removed by step 2.
pub const INVISIBLES: [char; 16] = [
    '\u{200B}', // zero-width space
    '\u{200C}', // zero-width non-joiner
    '\u{200D}', // zero-width joiner
    '\u{2060}', // word joiner
    '\u{FEFF}', // BOM as a character
    '\u{200E}', // LRM
    '\u{200F}', // RLM
    '\u{202A}', // LRE
    '\u{202B}', // RLE
    '\u{202C}', // PDF
    '\u{202D}', // LRO
    '\u{202E}', // RLO
    '\u{2066}', // LRI
    '\u{2067}', // RLI
    '\u{2068}', // FSI
    '\u{2069}', // PDI
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CleaningReport {
    pub text: String,
    /// Zero-width / bidi codepoints removed.
    pub zw_removed: usize,
    /// Control codepoints removed.
    pub ctrl_removed: usize,
}

pub fn smart_replacement(c: char) -> Option<&'static str> {
    SMART_PUNCT
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

pub fn is_invisible(c: char) -> bool {
    INVISIBLES.contains(&c)
}

/// C0/C1 control, excluding tab, LF and CR.
pub fn is_stripped_control(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}' | '\u{7F}'..='\u{9F}')
}

pub fn replace_smart_punct(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match smart_replacement(c) {
            Some(r) => out.push_str(r),
            None => out.push(c),
        }
    }
    out
}

/// Every step enabled.
pub fn clean(text: &str) -> CleaningReport {
    clean_with(text, &CleanOptions::default())
}

pub fn clean_with(text: &str, opts: &CleanOptions) -> CleaningReport {
    let substituted;
    let text = if opts.replace_smart_punct {
        substituted = replace_smart_punct(text);
        substituted.as_str()
    } else {
        text
    };

    let mut report = CleaningReport {
        text: String::with_capacity(text.len()),
        ..CleaningReport::default()
    };

    for c in text.chars() {
        if opts.strip_invisibles && is_invisible(c) {
            report.zw_removed += 1;
        } else if opts.strip_controls && is_stripped_control(c) {
            report.ctrl_removed += 1;
        } else {
            report.text.push(c);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_between_joiners_becomes_hyphen() {
        let r = clean("a\u{200D}\u{2013}\u{200D}b");
        assert_eq!(r.text, "a-b");
        assert_eq!(r.zw_removed, 2);
        assert_eq!(r.ctrl_removed, 0);
    }

    #[test]
    fn keeps_tab_lf_cr() {
        let r = clean("a\tb\nc\rd\u{0}\u{7F}\u{85}");
        assert_eq!(r.text, "a\tb\nc\rd");
        assert_eq!(r.ctrl_removed, 3);
    }

    #[test]
    fn disabled_steps_leave_text_and_counters_alone() {
        let opts = CleanOptions {
            replace_smart_punct: false,
            strip_invisibles: false,
            strip_controls: true,
        };
        let r = clean_with("\u{201C}x\u{200B}\u{1}\u{201D}", &opts);
        assert_eq!(r.text, "\u{201C}x\u{200B}\u{201D}");
        assert_eq!(r.zw_removed, 0);
        assert_eq!(r.ctrl_removed, 1);
    }

    #[test]
    fn ellipsis_and_spaces() {
        assert_eq!(replace_smart_punct("wait\u{2026}\u{00A0}ok"), "wait... ok");
    }
}
