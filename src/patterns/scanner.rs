use tracing::debug;

use crate::data::{Bar, Series};

use super::labels::PatternLabel;
use super::report::{PatternEvent, PatternReport};
use super::{bearish, bullish, continuation, single_bar};

/// Widest formation is four bars of reach-ahead plus one bar of lookback.
const MIN_BARS: usize = 5;

/// Fixed five-bar view around one scan position.
#[derive(Clone, Copy)]
pub(crate) struct Window<'a> {
    pub prev: &'a Bar,
    pub current: &'a Bar,
    pub next: &'a Bar,
    pub next2: &'a Bar,
    pub next3: &'a Bar,
}

impl<'a> Window<'a> {
    fn at(bars: &'a [Bar], i: usize) -> Self {
        Window {
            prev: &bars[i - 1],
            current: &bars[i],
            next: &bars[i + 1],
            next2: &bars[i + 2],
            next3: &bars[i + 3],
        }
    }

    fn bar(&self, anchor: Anchor) -> &'a Bar {
        match anchor {
            Anchor::Current => self.current,
            Anchor::Next => self.next,
            Anchor::Next2 => self.next2,
            Anchor::Next3 => self.next3,
        }
    }
}

/// Which bar of the window an event is reported against. Multi-bar
/// formations anchor at their last bar, which sits ahead of the scan
/// position.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Anchor {
    Current,
    Next,
    Next2,
    Next3,
}

/// One entry of a family's ordered rule table.
pub(crate) struct Rule {
    pub label: PatternLabel,
    pub anchor: Anchor,
    pub matches: fn(&Window) -> bool,
}

/// Family precedence: single-bar directional, bullish multi-bar, bearish
/// multi-bar, continuation. Each family contributes at most one event per
/// position (first matching rule wins within a family).
static FAMILIES: [&[Rule]; 4] = [
    &single_bar::RULES,
    &bullish::RULES,
    &bearish::RULES,
    &continuation::RULES,
];

/// Scan a series and return every detected pattern, in emission order.
///
/// Pure over its input: the same series always yields the same report.
/// Series shorter than five bars do not have enough context for any rule
/// family and produce an empty report rather than an error. The first bar
/// and the last three bars are visible as window context but are never
/// themselves a scan position.
pub fn scan(series: &Series) -> PatternReport {
    let bars = series.bars();
    if bars.len() < MIN_BARS {
        debug!(bars = bars.len(), "series too short to scan, returning empty report");
        return PatternReport::default();
    }

    let events: Vec<PatternEvent> = (1..=bars.len() - 4)
        .flat_map(|i| {
            let window = Window::at(bars, i);
            FAMILIES
                .iter()
                .filter_map(move |family| first_match(family, &window))
        })
        .collect();

    debug!(bars = bars.len(), events = events.len(), "pattern scan complete");
    PatternReport::new(events)
}

pub(crate) fn first_match(rules: &[Rule], window: &Window) -> Option<PatternEvent> {
    rules
        .iter()
        .find(|rule| (rule.matches)(window))
        .map(|rule| PatternEvent {
            timestamp: window.bar(rule.anchor).timestamp,
            label: rule.label,
        })
}
