//! Error types for Meander operations.
//!
//! This module provides the main error type [`MeanderError`] which wraps
//! the error conditions that can occur while laying out and rendering a
//! canvas.

use std::io;

use thiserror::Error;

use crate::layout;

/// The main error type for Meander operations.
///
/// Layout and export stages have their own error types at their module
/// boundaries; both convert into this type at the crate boundary.
#[derive(Debug, Error)]
pub enum MeanderError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Layout error: {0}")]
    Layout(#[from] layout::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Workflow document error: {0}")]
    Document(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for MeanderError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
