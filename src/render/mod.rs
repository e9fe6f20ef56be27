//! Presentation: localized labels, chart series, HTML and text output.
//!
//! Nothing here computes metrics; everything reads an `AggregateResult`.

pub mod charts;
pub mod html;
pub mod labels;
pub mod text;

pub use charts::{Chart, SerialAxis, Series, scaling_charts, serial_chart};
pub use html::render_html_report;
pub use labels::{Labels, Language};
pub use text::{render_mean_summary, render_summary};
