//! Bullish multi-bar family.
//!
//! Ordered table, first match wins. Each formation anchors at its last bar:
//! the engulfing bar itself, the third bar of a Morning Star, the fourth bar
//! of a Three White Soldiers run.

use super::labels::PatternLabel;
use super::scanner::{Anchor, Rule, Window};

/// Bearish bar whose body is strictly contained by the next bullish body.
fn bullish_engulfing(w: &Window) -> bool {
    w.prev.is_bearish()
        && w.current.is_bullish()
        && w.current.close > w.prev.open
        && w.current.open < w.prev.close
}

/// Bearish bar, indecisive bearish-leaning star, then a bullish bar closing
/// above the midpoint of the first body.
fn morning_star(w: &Window) -> bool {
    w.prev.is_bearish()
        && w.current.close < w.current.open
        && w.next.is_bullish()
        && w.next.close > w.prev.body_midpoint()
}

/// Three consecutive bullish closes following one bearish bar.
fn three_white_soldiers(w: &Window) -> bool {
    w.prev.is_bearish()
        && w.current.is_bullish()
        && w.next.is_bullish()
        && w.next2.is_bullish()
}

pub(crate) static RULES: [Rule; 3] = [
    Rule {
        label: PatternLabel::BullishEngulfing,
        anchor: Anchor::Current,
        matches: bullish_engulfing,
    },
    Rule {
        label: PatternLabel::MorningStar,
        anchor: Anchor::Next,
        matches: morning_star,
    },
    Rule {
        label: PatternLabel::ThreeWhiteSoldiers,
        anchor: Anchor::Next2,
        matches: three_white_soldiers,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Bar;
    use crate::patterns::scanner::first_match;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn ts(day: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap() + Duration::days(day)
    }

    fn bar(day: i64, open: f64, high: f64, low: f64, close: f64) -> Bar {
        Bar {
            timestamp: ts(day),
            open,
            high,
            low,
            close,
        }
    }

    fn flat(day: i64) -> Bar {
        bar(day, 50.0, 50.0, 50.0, 50.0)
    }

    fn window(bars: &[Bar; 5]) -> Window<'_> {
        Window {
            prev: &bars[0],
            current: &bars[1],
            next: &bars[2],
            next2: &bars[3],
            next3: &bars[4],
        }
    }

    #[test]
    fn engulfing_requires_strict_body_containment() {
        let bars = [
            bar(0, 10.0, 10.0, 8.0, 8.0),
            bar(1, 7.0, 11.0, 7.0, 11.0),
            flat(2),
            flat(3),
            flat(4),
        ];
        let event = first_match(&RULES, &window(&bars)).unwrap();
        assert_eq!(event.label, PatternLabel::BullishEngulfing);
        assert_eq!(event.timestamp, ts(1));

        // Body edges that merely touch do not engulf.
        let touching = [
            bar(0, 10.0, 10.0, 8.0, 8.0),
            bar(1, 8.0, 11.0, 8.0, 11.0),
            flat(2),
            flat(3),
            flat(4),
        ];
        assert!(!bullish_engulfing(&window(&touching)));
    }

    #[test]
    fn morning_star_anchors_at_the_recovery_bar() {
        let bars = [
            bar(0, 10.0, 10.0, 8.0, 8.0),
            bar(1, 7.8, 7.8, 7.6, 7.6),
            bar(2, 7.6, 9.5, 7.6, 9.5),
            flat(3),
            flat(4),
        ];
        let event = first_match(&RULES, &window(&bars)).unwrap();
        assert_eq!(event.label, PatternLabel::MorningStar);
        assert_eq!(event.timestamp, ts(2));
    }

    #[test]
    fn morning_star_requires_close_above_first_body_midpoint() {
        // Midpoint of [10, 8] is 9.0; closing right at it is not enough.
        let bars = [
            bar(0, 10.0, 10.0, 8.0, 8.0),
            bar(1, 7.8, 7.8, 7.6, 7.6),
            bar(2, 7.6, 9.0, 7.6, 9.0),
            flat(3),
            flat(4),
        ];
        assert!(!morning_star(&window(&bars)));
    }

    #[test]
    fn soldiers_anchor_at_the_third_bullish_bar() {
        let bars = [
            bar(0, 10.0, 10.0, 8.0, 8.0),
            bar(1, 8.0, 9.0, 8.0, 9.0),
            bar(2, 9.0, 10.0, 9.0, 10.0),
            bar(3, 10.0, 11.0, 10.0, 11.0),
            flat(4),
        ];
        let event = first_match(&RULES, &window(&bars)).unwrap();
        assert_eq!(event.label, PatternLabel::ThreeWhiteSoldiers);
        assert_eq!(event.timestamp, ts(3));
    }

    #[test]
    fn nothing_fires_without_a_bearish_setup_bar() {
        let bars = [
            flat(0),
            bar(1, 8.0, 9.0, 8.0, 9.0),
            bar(2, 9.0, 10.0, 9.0, 10.0),
            bar(3, 10.0, 11.0, 10.0, 11.0),
            flat(4),
        ];
        assert!(first_match(&RULES, &window(&bars)).is_none());
    }
}
