//! Bearish multi-bar family, the mirror of the bullish one.

use super::labels::PatternLabel;
use super::scanner::{Anchor, Rule, Window};

/// Bullish bar whose body is strictly contained by the next bearish body.
fn bearish_engulfing(w: &Window) -> bool {
    w.prev.is_bullish()
        && w.current.is_bearish()
        && w.current.open > w.prev.close
        && w.current.close < w.prev.open
}

/// Bullish bar, a second bullish bar, then a bearish bar closing below the
/// midpoint of the first body.
fn evening_star(w: &Window) -> bool {
    w.prev.is_bullish()
        && w.current.close > w.current.open
        && w.next.is_bearish()
        && w.next.close < w.prev.body_midpoint()
}

/// Three consecutive bearish closes following one bullish bar.
fn three_black_crows(w: &Window) -> bool {
    w.prev.is_bullish()
        && w.current.is_bearish()
        && w.next.is_bearish()
        && w.next2.is_bearish()
}

pub(crate) static RULES: [Rule; 3] = [
    Rule {
        label: PatternLabel::BearishEngulfing,
        anchor: Anchor::Current,
        matches: bearish_engulfing,
    },
    Rule {
        label: PatternLabel::EveningStar,
        anchor: Anchor::Next,
        matches: evening_star,
    },
    Rule {
        label: PatternLabel::ThreeBlackCrows,
        anchor: Anchor::Next2,
        matches: three_black_crows,
    },
];
