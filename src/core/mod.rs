//! Pure chart computation. Nothing in here performs I/O or returns errors:
//! malformed input degrades into defined (possibly empty) output.

pub mod aggregator;
pub mod chart;
pub mod classifier;
pub mod grid;
pub mod normalizer;
pub mod path;
pub mod remarks;
pub mod trip;

pub use aggregator::{HoursByStatus, aggregate};
pub use chart::LogChart;
pub use classifier::{classify, color_of};
pub use grid::{ChartLayout, GridGeometry};
pub use normalizer::normalize;
pub use path::{PathCommand, PathGeometry, Point, build_path};
pub use remarks::{RemarkRow, build_remarks};
pub use trip::{DaySummary, TripSummary};
