//! Example: Rendering a canvas from a node list
//!
//! This example demonstrates how to programmatically build a workflow
//! node list, lay it out, stage its reveal, and render the result to
//! SVG.

use meander::{
    CanvasBuilder,
    reveal::RevealSchedule,
    semantic::{NodeLayer, WorkflowNode},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building workflow node list...\n");

    // A six-step workflow: two inputs, three processing steps, one output.
    let nodes = vec![
        WorkflowNode::new("n1", "input-excel", "Excel / CSV Upload", NodeLayer::Input),
        WorkflowNode::new("n2", "input-webhook", "HTTP Webhook", NodeLayer::Input),
        WorkflowNode::new("n3", "proc-clean", "Clean & Validate", NodeLayer::Processing),
        WorkflowNode::new("n4", "proc-enrich", "Enrich Records", NodeLayer::Processing),
        WorkflowNode::new("n5", "proc-summarize", "Summarize", NodeLayer::Processing),
        WorkflowNode::new("n6", "output-email", "Email Draft", NodeLayer::Output),
    ];

    // Lay the nodes out for a desktop viewport: four nodes per row, so
    // the sequence wraps onto a reversed second row.
    let builder = CanvasBuilder::default();
    let layout = builder.layout(&nodes, 1280.0)?;

    println!("Computed layout:");
    println!("  Rows: {}", layout.row_count());
    println!("  Connectors: {}", layout.connectors().len());
    let size = layout.canvas_size();
    println!("  Canvas: {}x{}", size.width(), size.height());
    println!();

    // Render the full canvas.
    println!("Rendering to SVG...");
    let svg = builder.render_svg(&nodes, &layout)?;
    println!("SVG generated successfully!");
    println!("SVG length: {} bytes", svg.len());

    let output_path = "from_nodes_output.svg";
    std::fs::write(output_path, &svg)?;
    println!("SVG written to: {}", output_path);

    // Render a mid-animation frame: four ticks reveal four nodes and two
    // connectors.
    let mut reveal = RevealSchedule::new(nodes.len());
    for _ in 0..4 {
        reveal.advance();
    }
    let partial = builder.render_svg_revealed(&nodes, &layout, &reveal)?;

    let partial_path = "from_nodes_partial.svg";
    std::fs::write(partial_path, &partial)?;
    println!("Mid-reveal SVG written to: {}", partial_path);

    Ok(())
}
