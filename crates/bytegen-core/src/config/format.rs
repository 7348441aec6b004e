// crates/bytegen-core/src/config/format.rs

use crate::config::options::*;

const MAGIC: &[u8; 4] = b"BGC1";
const FORMAT_VERSION: u16 = 1;

/// Canonical byte form of a resolved config, used only for fingerprinting.
/// Layout (little-endian):
/// MAGIC[4]
/// version:u16
/// normalization:u8
/// clean_flags:u8      (bit0 smart punct, bit1 invisibles, bit2 controls)
/// bold:u8             (0 off, 1 letters, 2 letters+digits)
/// preset:u8 + payload
///   ascii: unmappable:u8 replacement:u32
///   html:  linebreaks:u8
///   csv:   delimiter:u32 quote:u32 neutralize:u8 strategy:u8
/// newline:u8
/// bom:u8
/// charset_len:u8 charset:[charset_len]
pub fn encode(cfg: &PipelineConfig) -> Vec<u8> {
    let mut b = Vec::with_capacity(48);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&FORMAT_VERSION.to_le_bytes());

    b.push(match cfg.normalization {
        NormalizationForm::None => 0,
        NormalizationForm::CanonicalComposed => 1,
        NormalizationForm::CanonicalDecomposed => 2,
        NormalizationForm::CompatibilityComposed => 3,
        NormalizationForm::CompatibilityDecomposed => 4,
    });

    let mut flags = 0u8;
    if cfg.clean.replace_smart_punct {
        flags |= 1;
    }
    if cfg.clean.strip_invisibles {
        flags |= 1 << 1;
    }
    if cfg.clean.strip_controls {
        flags |= 1 << 2;
    }
    b.push(flags);

    b.push(match cfg.bold {
        None => 0,
        Some(BoldOptions { include_digits: false }) => 1,
        Some(BoldOptions { include_digits: true }) => 2,
    });

    match cfg.preset {
        PresetMode::Plain => b.push(0),
        PresetMode::Ascii(a) => {
            b.push(1);
            let (tag, repl) = match a.unmappable {
                Unmappable::Drop => (0u8, 0u32),
                Unmappable::Replace(c) => (1u8, c as u32),
            };
            b.push(tag);
            b.extend_from_slice(&repl.to_le_bytes());
        }
        PresetMode::Html(h) => {
            b.push(2);
            b.push(h.linebreaks as u8);
        }
        PresetMode::Csv(c) => {
            b.push(3);
            b.extend_from_slice(&(c.delimiter as u32).to_le_bytes());
            b.extend_from_slice(&(c.quote as u32).to_le_bytes());
            b.push(c.neutralize as u8);
            b.push(match c.strategy {
                NeutralizeStrategy::Apostrophe => 0,
                NeutralizeStrategy::Space => 1,
            });
        }
        PresetMode::Json => b.push(4),
    }

    b.push(match cfg.finalize.newline {
        Newline::Lf => 0,
        Newline::CrLf => 1,
    });
    b.push(cfg.finalize.bom as u8);

    // WHATWG names are short ASCII; 255 is far beyond any of them.
    let name = cfg.finalize.charset.name().as_bytes();
    let len = name.len().min(u8::MAX as usize);
    b.push(len as u8);
    b.extend_from_slice(&name[..len]);

    b
}

/// 16-byte BLAKE3 fingerprint of the canonical config bytes.
pub fn config_id_16(cfg: &PipelineConfig) -> [u8; 16] {
    let hash = blake3::hash(&encode(cfg));
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[..16]);
    out
}

pub fn config_id_hex(cfg: &PipelineConfig) -> String {
    hex::encode(config_id_16(cfg))
}
