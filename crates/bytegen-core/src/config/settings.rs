// crates/bytegen-core/src/config/settings.rs
//
// Flat option table as collaborators see it (files, env, flags).
// Enumerated values stay strings here so an unknown value surfaces as a
// configuration error from `resolve`, not as a deserializer failure.

use serde::{Deserialize, Serialize};

use crate::config::defaults::default_config;
use crate::config::options::{
    AsciiOptions, BoldOptions, Charset, CleanOptions, CsvOptions, FinalizeConfig, HtmlOptions,
    NeutralizeStrategy, Newline, NormalizationForm, PipelineConfig, PresetMode, Unmappable,
};
use crate::error::{BytegenError, Result};
use crate::validate::validate_config;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub normalization: String,
    pub replace_smart_punct: bool,
    pub strip_invisibles: bool,
    pub strip_controls: bool,
    pub apply_header_bold: bool,
    pub bold_includes_digits: bool,
    pub preset_mode: String,
    pub html_linebreaks: bool,
    pub csv_delimiter: String,
    pub csv_quote_char: String,
    pub csv_neutralize_formulas: bool,
    pub csv_neutralize_strategy: String,
    /// `drop` or `replace`
    pub ascii_unmappable: String,
    pub ascii_replacement: String,
    pub newline: String,
    pub bom: bool,
    pub encoding: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from_config(&default_config())
    }
}

impl Settings {
    /// Flatten a resolved config. Options of inactive presets take their defaults.
    pub fn from_config(cfg: &PipelineConfig) -> Self {
        let ascii = match cfg.preset {
            PresetMode::Ascii(a) => a,
            _ => AsciiOptions::default(),
        };
        let html = match cfg.preset {
            PresetMode::Html(h) => h,
            _ => HtmlOptions::default(),
        };
        let csv = match cfg.preset {
            PresetMode::Csv(c) => c,
            _ => CsvOptions::default(),
        };
        let (ascii_unmappable, ascii_replacement) = match ascii.unmappable {
            Unmappable::Drop => ("drop", '?'),
            Unmappable::Replace(c) => ("replace", c),
        };

        Settings {
            normalization: cfg.normalization.as_str().to_string(),
            replace_smart_punct: cfg.clean.replace_smart_punct,
            strip_invisibles: cfg.clean.strip_invisibles,
            strip_controls: cfg.clean.strip_controls,
            apply_header_bold: cfg.bold.is_some(),
            bold_includes_digits: cfg.bold.map(|b| b.include_digits).unwrap_or(false),
            preset_mode: cfg.preset.name().to_string(),
            html_linebreaks: html.linebreaks,
            csv_delimiter: csv.delimiter.to_string(),
            csv_quote_char: csv.quote.to_string(),
            csv_neutralize_formulas: csv.neutralize,
            csv_neutralize_strategy: csv.strategy.as_str().to_string(),
            ascii_unmappable: ascii_unmappable.to_string(),
            ascii_replacement: ascii_replacement.to_string(),
            newline: cfg.finalize.newline.as_str().to_string(),
            bom: cfg.finalize.bom,
            encoding: cfg.finalize.charset.name().to_string(),
        }
    }

    /// Parse and validate every option. Nothing is defaulted silently.
    pub fn resolve(&self) -> Result<PipelineConfig> {
        let normalization: NormalizationForm = self.normalization.parse()?;

        let preset = match self.preset_mode.trim().to_ascii_lowercase().as_str() {
            "plain" => PresetMode::Plain,
            "ascii" => PresetMode::Ascii(AsciiOptions {
                unmappable: self.resolve_unmappable()?,
            }),
            "html" => PresetMode::Html(HtmlOptions {
                linebreaks: self.html_linebreaks,
            }),
            "csv" => PresetMode::Csv(CsvOptions {
                delimiter: single_char("csv_delimiter", &self.csv_delimiter)?,
                quote: single_char("csv_quote_char", &self.csv_quote_char)?,
                neutralize: self.csv_neutralize_formulas,
                strategy: self.csv_neutralize_strategy.parse::<NeutralizeStrategy>()?,
            }),
            "json" => PresetMode::Json,
            other => {
                return Err(BytegenError::config(format!(
                    "unknown preset mode {other:?} (expected plain, ascii, html, csv, json)"
                )))
            }
        };

        let cfg = PipelineConfig {
            normalization,
            clean: CleanOptions {
                replace_smart_punct: self.replace_smart_punct,
                strip_invisibles: self.strip_invisibles,
                strip_controls: self.strip_controls,
            },
            bold: self.apply_header_bold.then_some(BoldOptions {
                include_digits: self.bold_includes_digits,
            }),
            preset,
            finalize: FinalizeConfig {
                newline: self.newline.parse::<Newline>()?,
                charset: self.encoding.parse::<Charset>()?,
                bom: self.bom,
            },
        };

        validate_config(&cfg)?;
        Ok(cfg)
    }

    fn resolve_unmappable(&self) -> Result<Unmappable> {
        match self.ascii_unmappable.trim().to_ascii_lowercase().as_str() {
            "drop" => Ok(Unmappable::Drop),
            "replace" => Ok(Unmappable::Replace(single_char(
                "ascii_replacement",
                &self.ascii_replacement,
            )?)),
            other => Err(BytegenError::config(format!(
                "unknown ascii_unmappable policy {other:?} (expected drop or replace)"
            ))),
        }
    }
}

fn single_char(key: &str, value: &str) -> Result<char> {
    let mut it = value.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(BytegenError::config(format!(
            "{key} must be exactly one character, got {value:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_resolve_to_default_config() {
        let cfg = Settings::default().resolve().unwrap();
        assert_eq!(cfg, default_config());
    }

    #[test]
    fn flatten_then_resolve_keeps_csv_options() {
        let mut s = Settings::default();
        s.preset_mode = "csv".into();
        s.csv_delimiter = ";".into();
        s.csv_neutralize_strategy = "space".into();
        let cfg = s.resolve().unwrap();
        assert_eq!(Settings::from_config(&cfg), s);
    }

    #[test]
    fn multi_char_delimiter_is_rejected() {
        let mut s = Settings::default();
        s.preset_mode = "csv".into();
        s.csv_delimiter = ";;".into();
        assert!(matches!(s.resolve(), Err(BytegenError::Configuration(_))));
    }
}
