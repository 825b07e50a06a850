//! CLI logic for the flowcanvas rendering tool.
//!
//! Reads a JSON diagram payload, renders it on an off-screen canvas, and
//! writes the exported SVG document to a file.

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use flowcanvas::{CanvasError, Diagram, DiagramCanvas};

/// Run the flowcanvas CLI application.
///
/// Processes the input payload through the rendering pipeline and writes
/// the resulting SVG to the output file.
///
/// # Errors
///
/// Returns `CanvasError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Payload parsing errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), CanvasError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let style = config::load_config(args.config.as_ref())?;

    let payload = fs::read_to_string(&args.input)?;
    let diagram = Diagram::from_json(&payload)?;

    let mut canvas = DiagramCanvas::with_style(&style)?;
    canvas.render(diagram);

    let svg = canvas
        .export_svg()
        .ok_or_else(|| CanvasError::Export("canvas produced no drawing".to_string()))?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
