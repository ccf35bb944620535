use std::path::PathBuf;

/// Default chart path: output/record-temperatures-{year}.svg
pub fn generate_default_chart_filename(comparison_year: i32) -> PathBuf {
    let filename = format!("record-temperatures-{}.svg", comparison_year);
    PathBuf::from("output").join(filename)
}
