use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of pattern names the scanner can emit.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum PatternLabel {
    Hammer,
    InvertedHammer,
    ShootingStar,
    HangingMan,
    Doji,
    SpinningTop,
    BullishEngulfing,
    MorningStar,
    ThreeWhiteSoldiers,
    BearishEngulfing,
    EveningStar,
    ThreeBlackCrows,
    RisingThreeMethods,
    FallingThreeMethods,
}

impl PatternLabel {
    /// Conventional chart annotation name.
    pub fn name(&self) -> &'static str {
        match self {
            PatternLabel::Hammer => "Hammer",
            PatternLabel::InvertedHammer => "Inverted Hammer",
            PatternLabel::ShootingStar => "Shooting Star",
            PatternLabel::HangingMan => "Hanging Man",
            PatternLabel::Doji => "Doji",
            PatternLabel::SpinningTop => "Spinning Top",
            PatternLabel::BullishEngulfing => "Bullish Engulfing",
            PatternLabel::MorningStar => "Morning Star",
            PatternLabel::ThreeWhiteSoldiers => "Three White Soldiers",
            PatternLabel::BearishEngulfing => "Bearish Engulfing",
            PatternLabel::EveningStar => "Evening Star",
            PatternLabel::ThreeBlackCrows => "Three Black Crows",
            PatternLabel::RisingThreeMethods => "Rising Three Methods",
            PatternLabel::FallingThreeMethods => "Falling Three Methods",
        }
    }
}

impl fmt::Display for PatternLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
