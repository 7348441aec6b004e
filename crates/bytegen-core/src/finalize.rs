// crates/bytegen-core/src/finalize.rs
//
// Byte finalization.
// - Convert CRLF and lone CR to LF, then expand to CRLF if asked.
//   Normalizing first keeps mixed input from being double converted.
// - Encode under the requested charset; unrepresentable codepoints are errors.
// - Prepend the UTF-8 BOM when asked (UTF-8 only).

use std::borrow::Cow;

use encoding_rs::{EncoderResult, Encoding};

use crate::config::options::{Charset, FinalizeConfig, Newline};
use crate::error::{BytegenError, Result};

pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            // CRLF -> LF, CR -> LF
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

pub fn apply_newline(text: &str, newline: Newline) -> Cow<'_, str> {
    let lf = normalize_newlines(text);
    match newline {
        Newline::Lf => lf,
        Newline::CrLf if !lf.contains('\n') => lf,
        Newline::CrLf => Cow::Owned(lf.replace('\n', "\r\n")),
    }
}

pub fn encode(text: &str, charset: Charset) -> Result<Vec<u8>> {
    match charset {
        Charset::Utf8 => Ok(text.as_bytes().to_vec()),
        Charset::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
        Charset::Utf16Be => Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
        Charset::Ascii => {
            if let Some((offset, ch)) = text.char_indices().find(|(_, c)| !c.is_ascii()) {
                return Err(BytegenError::Encoding {
                    charset: charset.name().to_string(),
                    ch,
                    offset,
                });
            }
            Ok(text.as_bytes().to_vec())
        }
        Charset::Latin1 => text
            .char_indices()
            .map(|(offset, ch)| {
                u8::try_from(u32::from(ch)).map_err(|_| BytegenError::Encoding {
                    charset: charset.name().to_string(),
                    ch,
                    offset,
                })
            })
            .collect(),
        Charset::Legacy(enc) => encode_legacy(text, enc),
    }
}

fn encode_legacy(text: &str, enc: &'static Encoding) -> Result<Vec<u8>> {
    let mut encoder = enc.new_encoder();
    let cap = encoder
        .max_buffer_length_from_utf8_without_replacement(text.len())
        .unwrap_or(text.len());
    let mut out = Vec::with_capacity(cap);
    let mut pos = 0usize;

    loop {
        let (result, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(&text[pos..], &mut out, true);
        pos += read;
        match result {
            EncoderResult::InputEmpty => return Ok(out),
            EncoderResult::OutputFull => {
                let more = encoder
                    .max_buffer_length_from_utf8_without_replacement(text.len() - pos)
                    .unwrap_or(16)
                    .max(16);
                out.reserve(more);
            }
            EncoderResult::Unmappable(ch) => {
                return Err(BytegenError::Encoding {
                    charset: enc.name().to_string(),
                    ch,
                    offset: pos - ch.len_utf8(),
                });
            }
        }
    }
}

pub fn finalize(text: &str, cfg: &FinalizeConfig) -> Result<Vec<u8>> {
    if cfg.bom && !cfg.charset.is_utf8() {
        return Err(BytegenError::config(format!(
            "bom requested with non-UTF-8 encoding {}",
            cfg.charset
        )));
    }

    let text = apply_newline(text, cfg.newline);
    let body = encode(&text, cfg.charset)?;

    if !cfg.bom {
        return Ok(body);
    }
    let mut out = Vec::with_capacity(UTF8_BOM.len() + body.len());
    out.extend_from_slice(&UTF8_BOM);
    out.extend_from_slice(&body);
    Ok(out)
}
