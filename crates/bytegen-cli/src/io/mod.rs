pub mod output;
pub mod settings_file;
