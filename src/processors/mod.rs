pub mod daily_aggregator;
pub mod normalizer;
pub mod pipeline;
pub mod record_detector;
pub mod series_preparer;
pub mod window_splitter;

pub use daily_aggregator::DailyAggregator;
pub use normalizer::{parse_station_date, tenths_to_celsius, Normalizer};
pub use pipeline::{PipelineOutput, RecordPipeline, RunStats};
pub use record_detector::RecordDetector;
pub use series_preparer::SeriesPreparer;
pub use window_splitter::{WindowSplitter, WindowedReadings, YearWindows};
