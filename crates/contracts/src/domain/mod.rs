pub mod brand;
pub mod category;
pub mod employee;
pub mod product;

use chrono::NaiveDateTime;

/// Render a backend timestamp for table cells.
pub fn format_timestamp(ts: Option<NaiveDateTime>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
