//! Meander Core Types and Definitions
//!
//! This crate provides the foundational types for the Meander workflow
//! canvas. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Semantic**: The workflow node model ([`semantic`] module)

pub mod color;
pub mod geometry;
pub mod semantic;
