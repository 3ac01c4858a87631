//! CLI logic for the Meander workflow-canvas renderer.
//!
//! This module contains the core CLI logic for the Meander tool.

pub mod error_adapter;

mod args;
mod config;
mod document;

pub use args::Args;

use std::fs;

use log::info;

use meander::{CanvasBuilder, MeanderError, reveal::RevealSchedule};

use document::WorkflowDocument;

/// Run the Meander CLI application
///
/// This function loads the workflow document, lays it out for the
/// requested viewport width, and writes the resulting SVG to the output
/// file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `MeanderError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Workflow document errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), MeanderError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Rendering workflow canvas"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read and parse the workflow document
    let source = fs::read_to_string(&args.input)?;
    let workflow = WorkflowDocument::from_toml(&source)?;

    // Lay out and render using the CanvasBuilder API
    let builder = CanvasBuilder::new(app_config);
    let layout = builder.layout(workflow.nodes(), args.width)?;

    let svg = match args.reveal_ticks {
        Some(ticks) => {
            let mut reveal = RevealSchedule::new(workflow.nodes().len());
            for _ in 0..ticks {
                reveal.advance();
            }
            info!(
                ticks,
                nodes_revealed = reveal.nodes_revealed(),
                connectors_revealed = reveal.connectors_revealed();
                "Rendering mid-reveal frame"
            );
            builder.render_svg_revealed(workflow.nodes(), &layout, &reveal)?
        }
        None => builder.render_svg(workflow.nodes(), &layout)?,
    };

    // Write output file
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_run_end_to_end() {
        let dir = tempfile::tempdir().expect("temp dir");

        let input_path = dir.path().join("workflow.toml");
        let mut input = std::fs::File::create(&input_path).expect("create input");
        write!(
            input,
            r#"
                [[nodes]]
                id = "n1"
                kind = "input-excel"
                name = "Excel / CSV Upload"
                layer = "input"

                [[nodes]]
                id = "n2"
                kind = "output-email"
                name = "Email Draft"
                layer = "output"
            "#
        )
        .expect("write input");

        let output_path = dir.path().join("canvas.svg");
        let args = Args {
            input: input_path.to_string_lossy().to_string(),
            output: output_path.to_string_lossy().to_string(),
            config: None,
            width: 1280.0,
            reveal_ticks: None,
            log_level: "off".to_string(),
        };

        run(&args).expect("run should succeed");

        let svg = std::fs::read_to_string(&output_path).expect("output exists");
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Email Draft"));
    }

    #[test]
    fn test_run_reports_missing_input() {
        let args = Args {
            input: "missing-workflow.toml".to_string(),
            output: "unused.svg".to_string(),
            config: None,
            width: 1280.0,
            reveal_ticks: None,
            log_level: "off".to_string(),
        };

        let result = run(&args);
        assert!(matches!(result, Err(MeanderError::Io(_))));
    }
}
