// crates/bytegen-cli/src/io/settings_file.rs

use anyhow::{Context, Result};
use bytegen_core::Settings;
use config::{Config, Environment, File};

const ENV_PREFIX: &str = "BYTEGEN";

/// Built-in defaults <- optional settings file <- `BYTEGEN_*` environment.
pub fn load_layered(path: Option<&str>) -> Result<Settings> {
    let defaults = Config::try_from(&Settings::default()).context("serialize default settings")?;

    let mut builder = Config::builder().add_source(defaults);
    if let Some(p) = path {
        builder = builder.add_source(File::with_name(p).required(true));
    }
    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

    let cfg = builder
        .build()
        .with_context(|| match path {
            Some(p) => format!("load settings {p}"),
            None => "load settings".to_string(),
        })?;
    let settings: Settings = cfg.try_deserialize().context("decode settings")?;

    tracing::debug!(file = ?path, "settings loaded");
    Ok(settings)
}
