pub mod chart_writer;
pub mod series_writer;

pub use chart_writer::{ChartLabels, ChartWriter};
pub use series_writer::SeriesWriter;
