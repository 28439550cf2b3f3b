//! Temperature band classification.
//!
//! Pure, total, deterministic: a strict sequential range test against the
//! three ceilings, first match wins, `<` (never `<=`) at every boundary.
//! A temperature exactly equal to a ceiling therefore falls into the
//! *higher* band.
//!
//! Non-monotonic ceilings (e.g. yellow below green) are not repaired —
//! classification is still a strict top-to-bottom evaluation and simply
//! reflects whatever band that yields.  This quirk is inherited from the
//! original control flow and is relied upon by the attribute boundary,
//! which accepts arbitrary integers.

use crate::thresholds::Thresholds;

/// One of the three indicator lines.  Strongly typed so a line handle can
/// never be out of range; the discriminant doubles as the driver index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LedColour {
    Red = 0,
    Yellow = 1,
    Green = 2,
}

impl LedColour {
    /// All lines in driver order.
    pub const ALL: [Self; 3] = [Self::Red, Self::Yellow, Self::Green];

    pub(crate) fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Yellow,
            2 => Self::Green,
            _ => Self::Red,
        }
    }
}

/// Temperature band, derived on every sample, never stored persistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Band {
    Low = 0,
    Mid = 1,
    High = 2,
    Critical = 3,
}

impl Band {
    pub(crate) fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Low,
            1 => Self::Mid,
            2 => Self::High,
            _ => Self::Critical,
        }
    }
}

/// What a single line does within a band's pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    On,
    Off,
    Blinking,
}

/// Fixed assignment of the three lines for one band.  Exactly one line is
/// `Blinking` in every band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePattern {
    pub red: LineMode,
    pub yellow: LineMode,
    pub green: LineMode,
}

impl LinePattern {
    /// The mode of a given line.
    pub fn mode(&self, colour: LedColour) -> LineMode {
        match colour {
            LedColour::Red => self.red,
            LedColour::Yellow => self.yellow,
            LedColour::Green => self.green,
        }
    }

    /// The single blinking line of this pattern.
    pub fn blinking(&self) -> LedColour {
        match (self.red, self.yellow, self.green) {
            (LineMode::Blinking, _, _) => LedColour::Red,
            (_, LineMode::Blinking, _) => LedColour::Yellow,
            _ => LedColour::Green,
        }
    }
}

impl Band {
    /// The output pattern for this band.
    pub fn pattern(self) -> LinePattern {
        use LineMode::{Blinking, Off, On};
        match self {
            Self::Low => LinePattern {
                red: Off,
                yellow: Off,
                green: Blinking,
            },
            Self::Mid => LinePattern {
                red: Off,
                yellow: Blinking,
                green: Off,
            },
            Self::High => LinePattern {
                red: Blinking,
                yellow: Off,
                green: Off,
            },
            // All three on, RED additionally blinking while nominally "on".
            Self::Critical => LinePattern {
                red: Blinking,
                yellow: On,
                green: On,
            },
        }
    }
}

/// Classify a temperature (milli-degrees) against the ceilings.
pub fn classify(temp: i32, thresholds: &Thresholds) -> Band {
    if temp < thresholds.green_ceiling {
        Band::Low
    } else if temp < thresholds.yellow_ceiling {
        Band::Mid
    } else if temp < thresholds.red_ceiling {
        Band::High
    } else {
        Band::Critical
    }
}
