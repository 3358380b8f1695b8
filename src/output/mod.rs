//! Collaborators that take finished curves out of the process: an SVG chart
//! and a flat CSV file.

pub mod export;
pub mod plot;

pub use export::{write_csv, write_csv_file};
pub use plot::{render_svg, render_svg_string, ChartOptions};
