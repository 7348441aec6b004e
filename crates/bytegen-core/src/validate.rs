use crate::config::options::{PipelineConfig, PresetMode, Unmappable};
use crate::error::{BytegenError, Result};

pub fn validate_config(cfg: &PipelineConfig) -> Result<()> {
    // BOM is only defined here for UTF-8 output.
    if cfg.finalize.bom && !cfg.finalize.charset.is_utf8() {
        return Err(BytegenError::config(format!(
            "bom requested with non-UTF-8 encoding {}",
            cfg.finalize.charset
        )));
    }

    match cfg.preset {
        PresetMode::Csv(csv) => {
            if csv.delimiter == csv.quote {
                return Err(BytegenError::config(format!(
                    "csv delimiter and quote char must differ (both {:?})",
                    csv.delimiter
                )));
            }
            for (key, c) in [("csv_delimiter", csv.delimiter), ("csv_quote_char", csv.quote)] {
                if c == '\n' || c == '\r' {
                    return Err(BytegenError::config(format!(
                        "{key} cannot be a line break"
                    )));
                }
            }
        }
        PresetMode::Ascii(ascii) => {
            if let Unmappable::Replace(c) = ascii.unmappable {
                if !c.is_ascii() {
                    return Err(BytegenError::config(format!(
                        "ascii replacement {c:?} is not ASCII"
                    )));
                }
            }
        }
        PresetMode::Plain | PresetMode::Html(_) | PresetMode::Json => {}
    }

    Ok(())
}
