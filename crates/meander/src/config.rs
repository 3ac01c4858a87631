//! Configuration types for Meander canvas rendering.
//!
//! This module provides configuration structures that control how
//! canvases are laid out and styled. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Responsive breakpoints, row capacities, and density metrics.
//! - [`StyleConfig`] - Visual styling options such as background and layer band colors.
//!
//! # Example
//!
//! ```
//! # use meander::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.layout().row_capacity_for(1280.0), 4);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use meander_core::color::Color;
use meander_core::semantic::NodeLayer;

use crate::layout::{self, NodeMetrics};

/// Top-level application configuration combining layout and style settings.
///
/// Groups [`LayoutConfig`] and [`StyleConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    ///
    /// # Arguments
    ///
    /// * `layout` - Breakpoint and density settings.
    /// * `style` - Visual styling options.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Responsive layout configuration.
///
/// The row capacity and node density are pure step functions of the
/// viewport width; this type holds the breakpoints and the per-density
/// [`NodeMetrics`]. The defaults reproduce the canvas breakpoints:
/// four columns from 1200px, three from 768px, two below, with compact
/// node boxes under 768px.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Minimum viewport width for the widest capacity tier.
    wide_min_width: f32,
    /// Minimum viewport width for the middle capacity tier.
    medium_min_width: f32,
    /// Row capacity at and above `wide_min_width`.
    wide_capacity: usize,
    /// Row capacity at and above `medium_min_width`.
    medium_capacity: usize,
    /// Row capacity below `medium_min_width`.
    narrow_capacity: usize,
    /// Viewport widths below this use the compact metrics.
    compact_below: f32,
    /// Node metrics for regular viewports.
    normal: NodeMetrics,
    /// Node metrics for compact viewports.
    compact: NodeMetrics,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            wide_min_width: 1200.0,
            medium_min_width: 768.0,
            wide_capacity: 4,
            medium_capacity: 3,
            narrow_capacity: 2,
            compact_below: 768.0,
            normal: NodeMetrics::normal(),
            compact: NodeMetrics::compact(),
        }
    }
}

impl LayoutConfig {
    /// Returns the row capacity for a viewport width.
    pub fn row_capacity_for(&self, viewport_width: f32) -> usize {
        if viewport_width >= self.wide_min_width {
            self.wide_capacity
        } else if viewport_width >= self.medium_min_width {
            self.medium_capacity
        } else {
            self.narrow_capacity
        }
    }

    /// Returns the node metrics for a viewport width.
    pub fn metrics_for(&self, viewport_width: f32) -> NodeMetrics {
        if viewport_width < self.compact_below {
            self.compact
        } else {
            self.normal
        }
    }

    /// Checks that every capacity tier and metrics profile is usable.
    ///
    /// # Errors
    /// Returns [`layout::Error`] for a zero capacity or non-positive
    /// dimension; configuration problems fail fast rather than being
    /// clamped.
    pub fn validate(&self) -> Result<(), layout::Error> {
        for capacity in [
            self.wide_capacity,
            self.medium_capacity,
            self.narrow_capacity,
        ] {
            if capacity == 0 {
                return Err(layout::Error::InvalidRowCapacity);
            }
        }
        self.normal.validate()?;
        self.compact.validate()
    }
}

/// Visual styling configuration for rendered canvases.
///
/// Controls the background color and the per-layer band colors. Fields
/// that are not set fall back to the built-in palette.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Default background [`Color`] for canvases, as a color string.
    background_color: Option<String>,

    /// Band [`Color`] for input-layer nodes, as a color string.
    input_color: Option<String>,

    /// Band [`Color`] for processing-layer nodes, as a color string.
    processing_color: Option<String>,

    /// Band [`Color`] for output-layer nodes, as a color string.
    output_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed band [`Color`] for a node layer.
    ///
    /// Falls back to the built-in palette when no override is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn band_color(&self, layer: NodeLayer) -> Result<Color, String> {
        let (configured, fallback) = match layer {
            NodeLayer::Input => (&self.input_color, "#A8F0E0"),
            NodeLayer::Processing => (&self.processing_color, "#C3D0F5"),
            NodeLayer::Output => (&self.output_color, "#FBE8A6"),
        };
        let color_str = configured.as_deref().unwrap_or(fallback);
        Color::new(color_str)
            .map_err(|err| format!("Invalid {layer} band color in config: {err}"))
    }

    /// Returns the label/accent [`Color`] for a node layer: a darker
    /// companion to the band color, used for node text.
    pub fn accent_color(&self, layer: NodeLayer) -> Color {
        let hex = match layer {
            NodeLayer::Input => "#2BA89C",
            NodeLayer::Processing => "#5B6DC2",
            NodeLayer::Output => "#C4A934",
        };
        Color::new(hex).expect("built-in accent colors are valid CSS colors")
    }
}
