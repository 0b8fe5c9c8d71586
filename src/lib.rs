// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod models;
pub mod ui;

pub use app::App;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start in a regular window instead of maximized
    #[arg(long, default_value_t = false)]
    pub windowed: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>) -> App {
    App::new(cc)
}
