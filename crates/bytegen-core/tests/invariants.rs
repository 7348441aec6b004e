use bytegen_core::config::options::{BoldOptions, Charset, CsvOptions, FinalizeConfig, Newline, NormalizationForm};
use bytegen_core::finalize::finalize;
use bytegen_core::preset::csv::render_cell;
use bytegen_core::text::bold::{bold_wrap, MARK_CLOSE, MARK_OPEN};
use bytegen_core::text::normalize::normalize;

const SAMPLES: &[&str] = &[
    "",
    "plain",
    "Title: hello world",
    "  spaced header  :   body with trailing   ",
    "no colon but 123 digits",
    "emoji \u{1F600}: and \u{4E2D}\u{6587}",
    "a:b:c",
    ":leading colon",
    "trailing colon:",
    "tab\there: line\nbreak",
    "\u{FB01}ligature and \u{1D413} bold",
];

fn expected_header(head: &str, digits: bool) -> String {
    head.trim()
        .chars()
        .map(|c| match c {
            'A'..='Z' => char::from_u32(0x1D400 + (c as u32 - 'A' as u32)).unwrap(),
            'a'..='z' => char::from_u32(0x1D41A + (c as u32 - 'a' as u32)).unwrap(),
            '0'..='9' if digits => char::from_u32(0x1D7CE + (c as u32 - '0' as u32)).unwrap(),
            other => other,
        })
        .collect()
}

#[test]
fn normalize_none_is_identity() {
    for s in SAMPLES {
        assert_eq!(normalize(s, NormalizationForm::None), *s);
    }
}

#[test]
fn bold_output_is_exact_codepoint_sequence() {
    for digits in [false, true] {
        let opts = BoldOptions {
            include_digits: digits,
        };
        for s in SAMPLES {
            let want = if s.is_empty() {
                String::new()
            } else {
                match s.split_once(':') {
                    None => format!("{MARK_OPEN}{}{MARK_CLOSE}", expected_header(s, digits)),
                    Some((head, body)) => format!(
                        "{MARK_OPEN}{}{MARK_CLOSE}: {}",
                        expected_header(head, digits),
                        body.trim_start()
                    ),
                }
            };
            assert_eq!(bold_wrap(s, &opts), want, "{s:?} digits={digits}");
        }
    }
}

#[test]
fn body_after_marker_is_left_trimmed_original() {
    let opts = BoldOptions::default();
    for s in SAMPLES.iter().filter(|s| s.contains(':')) {
        let out = bold_wrap(s, &opts);
        let needle = format!("{MARK_CLOSE}: ");
        let at = out.find(&needle).expect("closing marker followed by colon-space");
        let body = &s[s.find(':').unwrap() + 1..];
        assert_eq!(&out[at + needle.len()..], body.trim_start());
        assert!(out.starts_with(MARK_OPEN));
    }
}

#[test]
fn cell_with_delimiter_is_wrapped_in_quotes() {
    let cells = ["a,b", ",", "x, y", "=1,2", "\"q\",r"];
    for delimiter in [',', ';', '\t'] {
        let opts = CsvOptions {
            delimiter,
            ..CsvOptions::default()
        };
        for cell in cells {
            let cell = cell.replace(',', &delimiter.to_string());
            let field = render_cell(&cell, &opts);
            assert!(field.starts_with('"') && field.ends_with('"'), "{cell:?} -> {field:?}");
        }
    }
}

#[test]
fn lf_utf8_roundtrip_without_cr() {
    let cfg = FinalizeConfig {
        newline: Newline::Lf,
        charset: Charset::Utf8,
        bom: false,
    };
    for s in SAMPLES {
        let bytes = finalize(s, &cfg).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), *s);
    }
}
