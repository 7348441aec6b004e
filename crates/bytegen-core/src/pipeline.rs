// crates/bytegen-core/src/pipeline.rs
//
// normalize -> clean -> [bold] -> preset -> finalize
// Each call validates the config first, so a bad option never yields
// partial output.

use crate::config::options::{PipelineConfig, PresetMode};
use crate::error::{BytegenError, Result};
use crate::finalize::finalize;
use crate::preset::{self, csv};
use crate::text::bold::bold_wrap;
use crate::text::clean::{clean_with, CleaningReport};
use crate::text::normalize::normalize;
use crate::validate::validate_config;
use crate::verify::{self, VerifyOptions, VerifyReport};

/// Terminal artifact: exact bytes plus their SHA-256.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalizedBytes {
    bytes: Vec<u8>,
    sha256: [u8; 32],
}

impl FinalizedBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        let sha256 = verify::sha256(&bytes);
        Self { bytes, sha256 }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn sha256(&self) -> &[u8; 32] {
        &self.sha256
    }

    pub fn sha256_hex(&self) -> String {
        hex::encode(self.sha256)
    }

    pub fn verify(&self, opts: &VerifyOptions) -> VerifyReport {
        verify::verify(&self.bytes, opts)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transformed {
    /// Rendered text before newline/charset/BOM handling. This is what a
    /// spreadsheet cell would hold.
    pub text: String,
    pub bytes: FinalizedBytes,
    pub zw_removed: usize,
    pub ctrl_removed: usize,
}

/// Normalize, clean and optionally bold one value.
pub fn prepare(raw: &str, cfg: &PipelineConfig) -> CleaningReport {
    let normalized = normalize(raw, cfg.normalization);
    let mut report = clean_with(&normalized, &cfg.clean);
    if let Some(bold) = cfg.bold.as_ref() {
        report.text = bold_wrap(&report.text, bold);
    }
    report
}

pub fn transform(raw: &str, cfg: &PipelineConfig) -> Result<Transformed> {
    validate_config(cfg)?;

    let prepared = prepare(raw, cfg);
    let text = preset::render(&prepared.text, &cfg.preset);
    let bytes = FinalizedBytes::new(finalize(&text, &cfg.finalize)?);

    tracing::debug!(
        preset = cfg.preset.name(),
        in_chars = raw.chars().count(),
        out_bytes = bytes.len(),
        zw_removed = prepared.zw_removed,
        ctrl_removed = prepared.ctrl_removed,
        "transform"
    );

    Ok(Transformed {
        text,
        bytes,
        zw_removed: prepared.zw_removed,
        ctrl_removed: prepared.ctrl_removed,
    })
}

/// Prepare every cell independently, then render them as one CSV row.
pub fn transform_row<S: AsRef<str>>(cells: &[S], cfg: &PipelineConfig) -> Result<Transformed> {
    validate_config(cfg)?;
    let PresetMode::Csv(csv_opts) = cfg.preset else {
        return Err(BytegenError::config(format!(
            "transform_row requires the csv preset, got {}",
            cfg.preset.name()
        )));
    };

    let mut zw_removed = 0usize;
    let mut ctrl_removed = 0usize;
    let mut prepared = Vec::with_capacity(cells.len());
    for cell in cells {
        let r = prepare(cell.as_ref(), cfg);
        zw_removed += r.zw_removed;
        ctrl_removed += r.ctrl_removed;
        prepared.push(r.text);
    }

    let text = csv::render_row(&prepared, &csv_opts);
    let bytes = FinalizedBytes::new(finalize(&text, &cfg.finalize)?);

    tracing::debug!(
        cells = cells.len(),
        out_bytes = bytes.len(),
        zw_removed,
        ctrl_removed,
        "transform_row"
    );

    Ok(Transformed {
        text,
        bytes,
        zw_removed,
        ctrl_removed,
    })
}
