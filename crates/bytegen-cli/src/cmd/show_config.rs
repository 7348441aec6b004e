// crates/bytegen-cli/src/cmd/show_config.rs

use bytegen_core::config::format::config_id_hex;
use bytegen_core::config::options::{Newline, PipelineConfig, PresetMode};
use clap::Args;

use crate::cmd::opts::PipelineArgs;

#[derive(Args, Debug)]
pub struct ShowConfigArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Print the settings as JSON instead of key = value lines
    #[arg(long)]
    pub json: bool,
}

/// Spreadsheet apps expect CRLF rows and a BOM to detect UTF-8.
pub fn csv_warnings(cfg: &PipelineConfig) -> Vec<&'static str> {
    let mut w = Vec::new();
    if !matches!(cfg.preset, PresetMode::Csv(_)) {
        return w;
    }
    if cfg.finalize.newline == Newline::Lf {
        w.push("csv output uses LF; spreadsheet imports usually expect CRLF (--newline crlf or --excel)");
    }
    if !cfg.finalize.bom {
        w.push("csv output has no BOM; some spreadsheet apps will not detect UTF-8 (--bom or --excel)");
    }
    w
}

pub fn run(args: ShowConfigArgs) -> anyhow::Result<()> {
    let (settings, cfg) = args.pipeline.resolve()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
    } else {
        println!("normalization           = {}", settings.normalization);
        println!("replace_smart_punct     = {}", settings.replace_smart_punct);
        println!("strip_invisibles        = {}", settings.strip_invisibles);
        println!("strip_controls          = {}", settings.strip_controls);
        println!("apply_header_bold       = {}", settings.apply_header_bold);
        println!("bold_includes_digits    = {}", settings.bold_includes_digits);
        println!("preset_mode             = {}", settings.preset_mode);
        println!("html_linebreaks         = {}", settings.html_linebreaks);
        println!("csv_delimiter           = {:?}", settings.csv_delimiter);
        println!("csv_quote_char          = {:?}", settings.csv_quote_char);
        println!("csv_neutralize_formulas = {}", settings.csv_neutralize_formulas);
        println!("csv_neutralize_strategy = {}", settings.csv_neutralize_strategy);
        println!("ascii_unmappable        = {}", settings.ascii_unmappable);
        println!("ascii_replacement       = {:?}", settings.ascii_replacement);
        println!("newline                 = {}", settings.newline);
        println!("bom                     = {}", settings.bom);
        println!("encoding                = {}", cfg.finalize.charset);
        println!("config_id               = {}", config_id_hex(&cfg));
    }

    for w in csv_warnings(&cfg) {
        tracing::warn!("{w}");
    }
    Ok(())
}
