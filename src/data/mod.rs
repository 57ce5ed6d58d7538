// Module exports
mod csv;
mod models;

// Public exports
pub use self::csv::{load_csv, read_series};
pub use self::models::{Bar, Series};
