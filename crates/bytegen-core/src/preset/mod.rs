// crates/bytegen-core/src/preset/mod.rs

pub mod ascii;
pub mod csv;
pub mod html;
pub mod json;

use crate::config::options::PresetMode;

/// Render one value. Csv treats it as a one-cell row.
pub fn render(text: &str, mode: &PresetMode) -> String {
    match mode {
        PresetMode::Plain => text.to_owned(),
        PresetMode::Ascii(opts) => ascii::fold(text, opts),
        PresetMode::Html(opts) => html::escape(text, opts),
        PresetMode::Csv(opts) => csv::render_row(&[text], opts),
        PresetMode::Json => json::string_literal(text),
    }
}
