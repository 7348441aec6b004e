// crates/bytegen-cli/src/io/output.rs

use std::io::Write;

use anyhow::Context;
use bytegen_core::config::format::config_id_hex;
use bytegen_core::config::options::PipelineConfig;
use bytegen_core::verify::VerifyOptions;
use bytegen_core::Transformed;

use crate::cmd::opts::OutputArgs;

pub const PREVIEW_CHARS: usize = 1000;
const TRUNCATED: &str = "...[truncated]";

/// First `PREVIEW_CHARS` chars of `text`, marked when cut.
pub fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{TRUNCATED}", &text[..cut]),
        None => text.to_string(),
    }
}

pub fn write_bytes_file(path: &str, bytes: &[u8]) -> anyhow::Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("write output: {path}"))?;
    Ok(())
}

/// Emit a result the way the flags ask: exact bytes to a file and/or stdout,
/// otherwise a text preview on stdout. The report always goes to stderr.
pub fn emit(out: &Transformed, cfg: &PipelineConfig, args: &OutputArgs) -> anyhow::Result<()> {
    if let Some(path) = &args.out {
        write_bytes_file(path, out.bytes.as_bytes())?;
        tracing::info!(path = %path, bytes = out.bytes.len(), "wrote output");
    }

    if args.raw {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(out.bytes.as_bytes())
            .context("write stdout")?;
        stdout.flush().context("flush stdout")?;
    } else if args.out.is_none() {
        println!("{}", preview(&out.text));
    }

    report(out, cfg, args);
    Ok(())
}

pub fn report(out: &Transformed, cfg: &PipelineConfig, args: &OutputArgs) {
    let v = out.bytes.verify(&VerifyOptions {
        hex: args.show_hex,
        base64: args.show_base64,
    });

    eprintln!("--- bytegen ---");
    eprintln!("mode         = {}", cfg.preset.name());
    eprintln!("encoding     = {}", cfg.finalize.charset);
    eprintln!("newline      = {}", cfg.finalize.newline.as_str());
    eprintln!("bom          = {}", cfg.finalize.bom);
    eprintln!("bytes        = {}", v.length);
    eprintln!("sha256       = {}", v.sha256_hex);
    eprintln!("crc32        = {:08x}", v.crc32);
    eprintln!("zw_removed   = {}", out.zw_removed);
    eprintln!("ctrl_removed = {}", out.ctrl_removed);
    eprintln!("config_id    = {}", config_id_hex(cfg));
    if let Some(h) = v.hex_dump {
        eprintln!("hex          = {h}");
    }
    if let Some(b) = v.base64 {
        eprintln!("base64       = {b}");
    }
}
