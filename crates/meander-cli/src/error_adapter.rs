//! Error adapter for converting MeanderError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use meander::MeanderError;

/// Adapter wrapping a [`MeanderError`] for miette rendering.
///
/// Meander errors carry no source spans, so the adapter contributes an
/// error code and, where the mistake is typically in user input, a help
/// message.
pub struct ErrorAdapter<'a>(pub &'a MeanderError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            MeanderError::Io(_) => "meander::io",
            MeanderError::Layout(_) => "meander::layout",
            MeanderError::Config(_) => "meander::config",
            MeanderError::Document(_) => "meander::document",
            MeanderError::Export(_) => "meander::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help: &str = match &self.0 {
            MeanderError::Config(_) => {
                "check the [layout] and [style] tables of your config file"
            }
            MeanderError::Document(_) => {
                "a workflow document is a list of [[nodes]] entries with \
                 id, kind, name, and layer fields"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`MeanderError`] into a list of reportable errors.
///
/// Every variant currently yields a single reportable; the list shape
/// keeps the rendering loop in `main` uniform.
pub fn to_reportables(err: &MeanderError) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter(err)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_has_code_and_help() {
        let err = MeanderError::Config("bad color".to_string());
        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        let adapter = &reportables[0];
        assert_eq!(adapter.code().unwrap().to_string(), "meander::config");
        assert!(adapter.help().is_some());
        assert!(adapter.to_string().contains("bad color"));
    }

    #[test]
    fn test_layout_error_has_no_help() {
        let err = MeanderError::from(meander::layout::Error::InvalidRowCapacity);
        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "meander::layout");
        assert!(adapter.help().is_none());
    }
}
