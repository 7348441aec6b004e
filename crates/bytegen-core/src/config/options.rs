// crates/bytegen-core/src/config/options.rs

use std::fmt;
use std::str::FromStr;

use encoding_rs::Encoding;

use crate::error::{BytegenError, Result};

/// Unicode normalization applied before every other stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NormalizationForm {
    None,
    /// NFC
    CanonicalComposed,
    /// NFD
    CanonicalDecomposed,
    /// NFKC
    CompatibilityComposed,
    /// NFKD
    CompatibilityDecomposed,
}

impl NormalizationForm {
    pub fn as_str(self) -> &'static str {
        match self {
            NormalizationForm::None => "none",
            NormalizationForm::CanonicalComposed => "nfc",
            NormalizationForm::CanonicalDecomposed => "nfd",
            NormalizationForm::CompatibilityComposed => "nfkc",
            NormalizationForm::CompatibilityDecomposed => "nfkd",
        }
    }
}

impl FromStr for NormalizationForm {
    type Err = BytegenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(NormalizationForm::None),
            "nfc" | "canonical-composed" => Ok(NormalizationForm::CanonicalComposed),
            "nfd" | "canonical-decomposed" => Ok(NormalizationForm::CanonicalDecomposed),
            "nfkc" | "compat-composed" => Ok(NormalizationForm::CompatibilityComposed),
            "nfkd" | "compat-decomposed" => Ok(NormalizationForm::CompatibilityDecomposed),
            other => Err(BytegenError::config(format!(
                "unknown normalization form {other:?} (expected none, nfc, nfd, nfkc, nfkd)"
            ))),
        }
    }
}

/// How a cell starting with a formula trigger is defused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NeutralizeStrategy {
    Apostrophe,
    Space,
}

impl NeutralizeStrategy {
    pub fn prefix(self) -> char {
        match self {
            NeutralizeStrategy::Apostrophe => '\'',
            NeutralizeStrategy::Space => ' ',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NeutralizeStrategy::Apostrophe => "apostrophe",
            NeutralizeStrategy::Space => "space",
        }
    }
}

impl FromStr for NeutralizeStrategy {
    type Err = BytegenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apostrophe" => Ok(NeutralizeStrategy::Apostrophe),
            "space" => Ok(NeutralizeStrategy::Space),
            other => Err(BytegenError::config(format!(
                "unknown csv neutralize strategy {other:?} (expected apostrophe or space)"
            ))),
        }
    }
}

/// What ASCII folding does with a codepoint it cannot map.
/// Both variants lose information; neither is an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unmappable {
    Drop,
    Replace(char),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AsciiOptions {
    pub unmappable: Unmappable,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HtmlOptions {
    /// Replace each `\n` with `<br>\n`.
    pub linebreaks: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CsvOptions {
    pub delimiter: char,
    pub quote: char,
    pub neutralize: bool,
    pub strategy: NeutralizeStrategy,
}

/// Output preset. Each variant carries only the options it reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresetMode {
    Plain,
    Ascii(AsciiOptions),
    Html(HtmlOptions),
    Csv(CsvOptions),
    Json,
}

impl PresetMode {
    pub fn name(&self) -> &'static str {
        match self {
            PresetMode::Plain => "plain",
            PresetMode::Ascii(_) => "ascii",
            PresetMode::Html(_) => "html",
            PresetMode::Csv(_) => "csv",
            PresetMode::Json => "json",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoldOptions {
    pub include_digits: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CleanOptions {
    pub replace_smart_punct: bool,
    pub strip_invisibles: bool,
    pub strip_controls: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Newline {
    Lf,
    CrLf,
}

impl Newline {
    pub fn as_str(self) -> &'static str {
        match self {
            Newline::Lf => "lf",
            Newline::CrLf => "crlf",
        }
    }
}

impl FromStr for Newline {
    type Err = BytegenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lf" => Ok(Newline::Lf),
            "crlf" => Ok(Newline::CrLf),
            other => Err(BytegenError::config(format!(
                "unknown newline style {other:?} (expected lf or crlf)"
            ))),
        }
    }
}

/// Target character encoding for the finalized bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Charset {
    Utf8,
    Utf16Le,
    Utf16Be,
    /// Strict 7-bit.
    Ascii,
    /// Strict ISO-8859-1: one byte per codepoint up to U+00FF.
    Latin1,
    /// Any WHATWG encoding whose encoder emits itself.
    Legacy(&'static Encoding),
}

impl Charset {
    pub fn is_utf8(self) -> bool {
        matches!(self, Charset::Utf8)
    }

    pub fn name(self) -> &'static str {
        match self {
            Charset::Utf8 => "utf-8",
            Charset::Utf16Le => "utf-16le",
            Charset::Utf16Be => "utf-16be",
            Charset::Ascii => "us-ascii",
            Charset::Latin1 => "iso-8859-1",
            Charset::Legacy(enc) => enc.name(),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = BytegenError;

    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim().to_ascii_lowercase();
        match label.as_str() {
            "utf-8" | "utf8" | "unicode-1-1-utf-8" => return Ok(Charset::Utf8),
            "utf-8-sig" | "utf8-sig" => {
                return Err(BytegenError::config(
                    "charset utf-8-sig is not accepted; use utf-8 with bom = true",
                ))
            }
            "utf-16le" | "utf-16" => return Ok(Charset::Utf16Le),
            "utf-16be" => return Ok(Charset::Utf16Be),
            _ => {}
        }
        if ASCII_LABELS.contains(&label.as_str()) {
            return Ok(Charset::Ascii);
        }
        if LATIN1_LABELS.contains(&label.as_str()) {
            return Ok(Charset::Latin1);
        }

        let enc = Encoding::for_label(label.as_bytes())
            .ok_or_else(|| BytegenError::config(format!("unknown charset {s:?}")))?;
        if enc == encoding_rs::UTF_8 {
            return Ok(Charset::Utf8);
        }
        if enc == encoding_rs::UTF_16LE {
            return Ok(Charset::Utf16Le);
        }
        if enc == encoding_rs::UTF_16BE {
            return Ok(Charset::Utf16Be);
        }
        // e.g. "replacement", whose encoder writes UTF-8.
        if enc.output_encoding() != enc {
            return Err(BytegenError::config(format!(
                "charset {s:?} ({}) cannot be used for output",
                enc.name()
            )));
        }
        // WHATWG folds several ISO labels into a windows-* superset
        // (iso-8859-9 -> windows-1254, tis-620 -> windows-874). Only a label
        // that names the code page itself may select one.
        if enc.name().starts_with("windows-") && !names_code_page(&label) {
            return Err(BytegenError::config(format!(
                "charset {s:?} would be encoded as {}; ask for {} explicitly",
                enc.name(),
                enc.name()
            )));
        }
        Ok(Charset::Legacy(enc))
    }
}

/// Labels WHATWG maps to windows-1252 that mean 7-bit ASCII.
const ASCII_LABELS: [&str; 10] = [
    "ascii",
    "us-ascii",
    "ansi_x3.4-1968",
    "csascii",
    "cp367",
    "ibm367",
    "iso-ir-6",
    "iso646-us",
    "iso_646.irv:1991",
    "us",
];

/// Labels WHATWG maps to windows-1252 that mean ISO-8859-1.
const LATIN1_LABELS: [&str; 11] = [
    "iso-8859-1",
    "iso8859-1",
    "iso88591",
    "iso_8859-1",
    "iso_8859-1:1987",
    "iso-ir-100",
    "latin1",
    "l1",
    "csisolatin1",
    "cp819",
    "ibm819",
];

fn names_code_page(label: &str) -> bool {
    ["windows-", "cp", "x-cp", "dos-"]
        .iter()
        .any(|p| label.starts_with(p))
}

/// Byte-level rendering. Never changes codepoint content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinalizeConfig {
    pub newline: Newline,
    pub charset: Charset,
    pub bom: bool,
}

/// Fully resolved, typed pipeline configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    pub normalization: NormalizationForm,
    pub clean: CleanOptions,
    /// `None` disables header bolding.
    pub bold: Option<BoldOptions>,
    pub preset: PresetMode,
    pub finalize: FinalizeConfig,
}
