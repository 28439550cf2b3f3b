//! Threshold attribute surface — decimal text over the [`ThresholdStore`].
//!
//! Three named attributes (`to_temp_green`, `to_temp_yellow`,
//! `to_temp_red`), each independently readable and writable as decimal
//! text.  The parser accepts a leading optionally-signed integer token and
//! ignores anything after it (scanf-style); input with no leading integer
//! is rejected here and the stored value is left untouched.  No range or
//! ordering validation — the store and classifier are total over
//! arbitrary integers.

use crate::thresholds::ThresholdStore;

/// The three attribute names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdAttr {
    Green,
    Yellow,
    Red,
}

impl ThresholdAttr {
    /// Attribute name as exposed on the configuration surface.
    pub fn name(self) -> &'static str {
        match self {
            Self::Green => "to_temp_green",
            Self::Yellow => "to_temp_yellow",
            Self::Red => "to_temp_red",
        }
    }
}

/// Errors from attribute writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrError {
    /// The input did not start with a decimal integer.
    NotANumber,
}

impl core::fmt::Display for AttrError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotANumber => write!(f, "not a decimal integer"),
        }
    }
}

/// Render one attribute as decimal text with a trailing newline.
pub fn show(store: &ThresholdStore, attr: ThresholdAttr) -> heapless::String<16> {
    use core::fmt::Write as _;
    let t = store.get();
    let v = match attr {
        ThresholdAttr::Green => t.green_ceiling,
        ThresholdAttr::Yellow => t.yellow_ceiling,
        ThresholdAttr::Red => t.red_ceiling,
    };
    let mut out = heapless::String::new();
    let _ = writeln!(out, "{}", v);
    out
}

/// Parse decimal text and store it into one attribute.
pub fn store(
    thresholds: &ThresholdStore,
    attr: ThresholdAttr,
    text: &str,
) -> Result<(), AttrError> {
    let v = parse_leading_int(text).ok_or(AttrError::NotANumber)?;
    match attr {
        ThresholdAttr::Green => thresholds.set_green(v),
        ThresholdAttr::Yellow => thresholds.set_yellow(v),
        ThresholdAttr::Red => thresholds.set_red(v),
    }
    Ok(())
}

/// scanf-style leading integer: optional whitespace, optional sign, then
/// digits; trailing bytes are ignored.  Overflow saturates rather than
/// wrapping.
fn parse_leading_int(text: &str) -> Option<i32> {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut any = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        any = true;
        value = (value * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1);
    }
    if !any {
        return None;
    }

    let signed = if negative { -value } else { value };
    Some(signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}
