//! Command-line argument definitions for the Meander CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. Arguments control input/output paths, the
//! viewport the canvas is laid out for, configuration file selection,
//! and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Meander workflow-canvas renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input workflow document (TOML)
    #[arg(help = "Path to the input workflow file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Viewport width in pixels the canvas is laid out for
    #[arg(long, default_value_t = 1280.0)]
    pub width: f32,

    /// Render the canvas partway through its reveal animation, after
    /// this many ticks
    #[arg(long)]
    pub reveal_ticks: Option<usize>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
