//! Continuation family: the four-bar three-methods formations, anchored at
//! the final confirming bar.

use super::labels::PatternLabel;
use super::scanner::{Anchor, Rule, Window};

/// Bullish, bearish, bearish, bullish across four consecutive bars.
fn rising_three_methods(w: &Window) -> bool {
    w.current.is_bullish() && w.next.is_bearish() && w.next2.is_bearish() && w.next3.is_bullish()
}

/// Bearish, bullish, bullish, bearish across four consecutive bars.
fn falling_three_methods(w: &Window) -> bool {
    w.current.is_bearish() && w.next.is_bullish() && w.next2.is_bullish() && w.next3.is_bearish()
}

pub(crate) static RULES: [Rule; 2] = [
    Rule {
        label: PatternLabel::RisingThreeMethods,
        anchor: Anchor::Next3,
        matches: rising_three_methods,
    },
    Rule {
        label: PatternLabel::FallingThreeMethods,
        anchor: Anchor::Next3,
        matches: falling_three_methods,
    },
];
