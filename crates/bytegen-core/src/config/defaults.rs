// crates/bytegen-core/src/config/defaults.rs

use crate::config::options::{
    AsciiOptions, BoldOptions, Charset, CleanOptions, CsvOptions, FinalizeConfig, NeutralizeStrategy,
    Newline, NormalizationForm, PipelineConfig, PresetMode, Unmappable,
};

/// NFKC, every cleaning step on, header bolding (letters only), plain output,
/// LF, UTF-8, no BOM.
pub fn default_config() -> PipelineConfig {
    PipelineConfig {
        normalization: NormalizationForm::CompatibilityComposed,
        clean: CleanOptions::default(),
        bold: Some(BoldOptions::default()),
        preset: PresetMode::Plain,
        finalize: FinalizeConfig::default(),
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        default_config()
    }
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            replace_smart_punct: true,
            strip_invisibles: true,
            strip_controls: true,
        }
    }
}

impl Default for AsciiOptions {
    fn default() -> Self {
        Self {
            unmappable: Unmappable::Drop,
        }
    }
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
            neutralize: true,
            strategy: NeutralizeStrategy::Apostrophe,
        }
    }
}

impl Default for FinalizeConfig {
    fn default() -> Self {
        Self {
            newline: Newline::Lf,
            charset: Charset::Utf8,
            bom: false,
        }
    }
}

/// Excel-friendly finalization: CRLF rows and a UTF-8 BOM.
pub fn spreadsheet_finalize() -> FinalizeConfig {
    FinalizeConfig {
        newline: Newline::CrLf,
        charset: Charset::Utf8,
        bom: true,
    }
}
