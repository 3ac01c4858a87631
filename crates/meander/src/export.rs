//! Export functionality for Meander canvases.
//!
//! This module provides the [`Exporter`] trait that defines the interface
//! for converting laid-out canvases into output formats. It is the final
//! stage in the Meander processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Workflow Nodes
//!     ↓ layout
//! Placements + Connectors (CanvasLayout)
//!     ↓ export (this module)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and
//! I/O errors. [`Error`] converts into [`MeanderError::Export`] at the
//! crate boundary.
//!
//! [`MeanderError::Export`]: crate::MeanderError::Export

/// SVG export backend.
pub mod svg;

use meander_core::semantic::WorkflowNode;

use crate::layout::CanvasLayout;
use crate::reveal::RevealSchedule;

/// Abstraction for canvas export backends.
///
/// Implementors convert a [`CanvasLayout`] plus the node records it was
/// computed for into a specific output format (e.g., SVG).
///
/// See the [`svg`] module for the built-in SVG implementation.
pub trait Exporter {
    /// Exports the complete canvas.
    ///
    /// # Arguments
    ///
    /// * `nodes` - The workflow nodes, in the order the layout was computed for.
    /// * `layout` - The computed placements and connectors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the canvas cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_canvas(
        &mut self,
        nodes: &[WorkflowNode],
        layout: &CanvasLayout,
    ) -> Result<(), Error>;

    /// Exports only the currently revealed prefix of the canvas.
    ///
    /// The reveal schedule gates which placements and connectors render;
    /// it never changes their geometry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] or [`Error::Io`] as for
    /// [`export_canvas`](Self::export_canvas).
    fn export_revealed(
        &mut self,
        nodes: &[WorkflowNode],
        layout: &CanvasLayout,
        reveal: &RevealSchedule,
    ) -> Result<(), Error>;
}

/// Errors that can occur during canvas export.
///
/// This type is converted into [`MeanderError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`MeanderError::Export`]: crate::MeanderError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
