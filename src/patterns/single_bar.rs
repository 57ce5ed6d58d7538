//! Single-bar directional family.
//!
//! Evaluated as an ordered table: the first rule whose predicate holds wins
//! and the rest are not consulted, which reproduces the classic if/else-if
//! chain these rules are usually written as. All six anchor at the current
//! bar.

use super::labels::PatternLabel;
use super::scanner::{Anchor, Rule, Window};

/// Bullish bar whose lower shadow exceeds twice the body.
fn hammer(w: &Window) -> bool {
    let c = w.current;
    c.is_bullish() && (c.open - c.low) > 2.0 * (c.close - c.open)
}

/// Bullish bar whose upper shadow exceeds twice the body.
fn inverted_hammer(w: &Window) -> bool {
    let c = w.current;
    c.is_bullish() && (c.high - c.close) > 2.0 * (c.close - c.open)
}

/// Bearish bar whose upper shadow exceeds twice the body.
fn shooting_star(w: &Window) -> bool {
    let c = w.current;
    c.is_bearish() && (c.high - c.open) > 2.0 * (c.open - c.close)
}

/// Bearish bar whose lower shadow exceeds twice the body.
fn hanging_man(w: &Window) -> bool {
    let c = w.current;
    c.is_bearish() && (c.open - c.low) > 2.0 * (c.open - c.close)
}

/// Body smaller than a tenth of the full range.
fn doji(w: &Window) -> bool {
    let c = w.current;
    c.body() < 0.1 * c.range()
}

/// Doji body plus a range of more than twice the body.
fn spinning_top(w: &Window) -> bool {
    let c = w.current;
    c.body() < 0.1 * c.range() && c.range() > 2.0 * c.body()
}

// Spinning Top sits after Doji even though Doji's predicate subsumes it, so
// under first-match-wins the rule can never fire. The table keeps the
// historical order instead of reordering; see DESIGN.md.
pub(crate) static RULES: [Rule; 6] = [
    Rule {
        label: PatternLabel::Hammer,
        anchor: Anchor::Current,
        matches: hammer,
    },
    Rule {
        label: PatternLabel::InvertedHammer,
        anchor: Anchor::Current,
        matches: inverted_hammer,
    },
    Rule {
        label: PatternLabel::ShootingStar,
        anchor: Anchor::Current,
        matches: shooting_star,
    },
    Rule {
        label: PatternLabel::HangingMan,
        anchor: Anchor::Current,
        matches: hanging_man,
    },
    Rule {
        label: PatternLabel::Doji,
        anchor: Anchor::Current,
        matches: doji,
    },
    Rule {
        label: PatternLabel::SpinningTop,
        anchor: Anchor::Current,
        matches: spinning_top,
    },
];
