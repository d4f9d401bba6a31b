pub mod config;
pub mod descriptor;
pub mod error;
pub mod lines;
pub mod mapping;
pub mod revision;
pub mod selection;
pub mod settings;

pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
