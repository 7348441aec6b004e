// crates/bytegen-cli/src/cmd/text.rs

use std::io::Read;

use anyhow::Context;
use bytegen_core::transform;
use clap::Args;

use crate::cmd::opts::{OutputArgs, PipelineArgs};
use crate::io::output;

#[derive(Args, Debug)]
pub struct TextArgs {
    /// Input text. If omitted, reads all of stdin.
    #[arg(short, long)]
    pub text: Option<String>,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: TextArgs) -> anyhow::Result<()> {
    let (_, cfg) = args.pipeline.resolve()?;

    let input = match args.text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin (expected UTF-8 text)")?;
            buf
        }
    };

    let out = transform(&input, &cfg)?;
    tracing::info!(
        mode = cfg.preset.name(),
        bytes = out.bytes.len(),
        sha256 = %out.bytes.sha256_hex(),
        "text transformed"
    );

    output::emit(&out, &cfg, &args.output)
}
