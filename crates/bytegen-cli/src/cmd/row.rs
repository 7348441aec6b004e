// crates/bytegen-cli/src/cmd/row.rs

use bytegen_core::transform_row;
use clap::Args;

use crate::cmd::opts::{Mode, OutputArgs, PipelineArgs};
use crate::io::output;

pub const CELL_SEP: &str = "||";

#[derive(Args, Debug)]
pub struct RowArgs {
    /// Cells joined with `||`, e.g. "SKU001||=1+2||Cool Chair, Black"
    #[arg(long)]
    pub values: Option<String>,

    /// One cell; repeat for more. Appended after --values.
    #[arg(long = "cell")]
    pub cells: Vec<String>,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn split_values(values: &str) -> Vec<String> {
    values.split(CELL_SEP).map(str::to_string).collect()
}

pub fn run(mut args: RowArgs) -> anyhow::Result<()> {
    match args.pipeline.mode {
        None => args.pipeline.mode = Some(Mode::Csv),
        Some(Mode::Csv) => {}
        Some(other) => anyhow::bail!("row only supports --mode csv (got {other:?})"),
    }

    let mut cells = args.values.as_deref().map(split_values).unwrap_or_default();
    cells.append(&mut args.cells);
    if cells.is_empty() {
        anyhow::bail!("row needs --values or at least one --cell");
    }

    let (_, cfg) = args.pipeline.resolve()?;
    let out = transform_row(&cells, &cfg)?;
    tracing::info!(
        cells = cells.len(),
        bytes = out.bytes.len(),
        sha256 = %out.bytes.sha256_hex(),
        "row transformed"
    );

    output::emit(&out, &cfg, &args.output)
}
