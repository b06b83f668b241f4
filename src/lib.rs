//! chart-time-axis: adaptive time axis for charts.
//!
//! Picks the finest calendar interval whose labels fit the available width,
//! lays out a minor and a major label series with edge filtering, and sizes
//! tick marks. Output is a backend-agnostic `RenderFrame`; the optional
//! `cairo-backend` feature draws it with Cairo and Pango.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{TimeAxis, TimeAxisConfig, TimeAxisRenderPass};
pub use error::{AxisError, AxisResult};
