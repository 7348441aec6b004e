// crates/bytegen-cli/src/cmd/opts.rs
//
// Flags shared by every subcommand. Each one is an override on top of the
// layered settings (defaults <- --config file <- BYTEGEN_* env); unset flags
// leave the lower layers alone.

use bytegen_core::{PipelineConfig, Settings};
use clap::{Args, ValueEnum};

use crate::io::settings_file;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Mode {
    Plain,
    Ascii,
    Html,
    Csv,
    Json,
}

impl Mode {
    fn as_str(self) -> &'static str {
        match self {
            Mode::Plain => "plain",
            Mode::Ascii => "ascii",
            Mode::Html => "html",
            Mode::Csv => "csv",
            Mode::Json => "json",
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Form {
    None,
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

impl Form {
    fn as_str(self) -> &'static str {
        match self {
            Form::None => "none",
            Form::Nfc => "nfc",
            Form::Nfd => "nfd",
            Form::Nfkc => "nfkc",
            Form::Nfkd => "nfkd",
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum NewlineArg {
    Lf,
    Crlf,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Strategy {
    Apostrophe,
    Space,
}

#[derive(Args, Debug, Default)]
pub struct PipelineArgs {
    /// Settings file (toml/json/yaml); overrides defaults, overridden by env and flags
    #[arg(long)]
    pub config: Option<String>,

    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Unicode normalization form (default nfkc)
    #[arg(long, value_enum)]
    pub normalize: Option<Form>,

    /// Do not replace smart quotes/dashes/spaces
    #[arg(long)]
    pub no_smart: bool,

    /// Keep zero-width/bidi controls
    #[arg(long)]
    pub keep_zw: bool,

    /// Keep C0/C1 control chars
    #[arg(long)]
    pub keep_ctrl: bool,

    /// Skip the header bold + marker wrap
    #[arg(long, conflicts_with = "bold")]
    pub no_bold: bool,

    /// Force the header bold + marker wrap on
    #[arg(long)]
    pub bold: bool,

    /// Bold digits 0-9 as well as letters
    #[arg(long)]
    pub bold_digits: bool,

    /// HTML mode: convert newlines to <br>
    #[arg(long)]
    pub html_br: bool,

    /// CSV delimiter
    #[arg(long)]
    pub csv_delim: Option<String>,

    /// CSV quote character
    #[arg(long)]
    pub quotechar: Option<String>,

    /// CSV: do not neutralize spreadsheet formulas
    #[arg(long)]
    pub no_neutralize: bool,

    #[arg(long, value_enum)]
    pub neutralize_strategy: Option<Strategy>,

    /// ASCII mode: replace unmappable codepoints with this char instead of dropping them
    #[arg(long)]
    pub ascii_replace: Option<String>,

    #[arg(long, value_enum)]
    pub newline: Option<NewlineArg>,

    /// Prefix a UTF-8 BOM
    #[arg(long)]
    pub bom: bool,

    /// Output charset (default utf-8)
    #[arg(long)]
    pub encoding: Option<String>,

    /// Spreadsheet-friendly output: CRLF + UTF-8 BOM
    #[arg(long)]
    pub excel: bool,
}

impl PipelineArgs {
    pub fn apply(&self, s: &mut Settings) {
        if let Some(m) = self.mode {
            s.preset_mode = m.as_str().to_string();
        }
        if let Some(f) = self.normalize {
            s.normalization = f.as_str().to_string();
        }
        if self.no_smart {
            s.replace_smart_punct = false;
        }
        if self.keep_zw {
            s.strip_invisibles = false;
        }
        if self.keep_ctrl {
            s.strip_controls = false;
        }
        if self.no_bold {
            s.apply_header_bold = false;
        }
        if self.bold {
            s.apply_header_bold = true;
        }
        if self.bold_digits {
            s.bold_includes_digits = true;
        }
        if self.html_br {
            s.html_linebreaks = true;
        }
        if let Some(d) = &self.csv_delim {
            s.csv_delimiter = d.clone();
        }
        if let Some(q) = &self.quotechar {
            s.csv_quote_char = q.clone();
        }
        if self.no_neutralize {
            s.csv_neutralize_formulas = false;
        }
        if let Some(st) = self.neutralize_strategy {
            s.csv_neutralize_strategy = match st {
                Strategy::Apostrophe => "apostrophe",
                Strategy::Space => "space",
            }
            .to_string();
        }
        if let Some(r) = &self.ascii_replace {
            s.ascii_unmappable = "replace".to_string();
            s.ascii_replacement = r.clone();
        }
        if self.excel {
            s.newline = "crlf".to_string();
            s.bom = true;
        }
        if let Some(n) = self.newline {
            s.newline = match n {
                NewlineArg::Lf => "lf",
                NewlineArg::Crlf => "crlf",
            }
            .to_string();
        }
        if self.bom {
            s.bom = true;
        }
        if let Some(e) = &self.encoding {
            s.encoding = e.clone();
        }
    }

    /// Layered settings with these flags on top, then resolved.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        let mut s = settings_file::load_layered(self.config.as_deref())?;
        self.apply(&mut s);
        Ok(s)
    }

    pub fn resolve(&self) -> anyhow::Result<(Settings, PipelineConfig)> {
        let s = self.settings()?;
        let cfg = s.resolve()?;
        Ok((s, cfg))
    }
}

#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Write the exact output bytes to this file
    #[arg(short, long)]
    pub out: Option<String>,

    /// Write the exact output bytes to stdout instead of the text preview
    #[arg(long)]
    pub raw: bool,

    /// Print a full hex dump of the bytes
    #[arg(long)]
    pub show_hex: bool,

    /// Print Base64 of the bytes
    #[arg(long)]
    pub show_base64: bool,
}
