// Module exports
mod bearish;
mod bullish;
mod continuation;
mod labels;
mod report;
mod scanner;
mod single_bar;

// Public exports
pub use labels::PatternLabel;
pub use report::{PatternEvent, PatternReport};
pub use scanner::scan;
