//! Count-up animation for the stats strip.

use crate::constants::{COUNTER_DURATION_MS, COUNTER_MAX_DECIMALS};

/// A number that eases from 0 to `target` over `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Counter {
    pub target: f64,
    pub decimals: usize,
    pub duration_ms: f64,
}

impl Counter {
    pub fn new(target: f64, decimals: usize, duration_ms: f64) -> Self {
        Self {
            target: if target.is_finite() { target } else { 0.0 },
            decimals: decimals.min(COUNTER_MAX_DECIMALS),
            duration_ms: duration_ms.max(0.0),
        }
    }

    /// Build from the raw `data-target` / `data-decimal` attribute values.
    /// Missing or malformed values fall back to 0.
    pub fn from_attributes(target: Option<&str>, decimals: Option<&str>) -> Self {
        let target = target.map(parse_leading_f64).unwrap_or(0.0);
        let decimals = decimals.and_then(parse_leading_usize).unwrap_or(0);
        Self::new(target, decimals, COUNTER_DURATION_MS)
    }

    /// Fraction of the duration elapsed, clamped to [0, 1].
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        ease_out_cubic(self.progress(elapsed_ms)) * self.target
    }

    /// Value rounded half away from zero to `decimals` places.
    pub fn text_at(&self, elapsed_ms: f64) -> String {
        let value = self.value_at(elapsed_ms);
        let scale = 10f64.powi(self.decimals as i32);
        let scaled = (value * scale).round() / scale;
        let rounded = if scaled.is_finite() { scaled } else { value };
        // + 0.0 folds -0.0 so negative targets start at "0", not "-0"
        format!("{:.*}", self.decimals, rounded + 0.0)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Parse the longest numeric prefix (sign, digits, fraction, exponent), the
/// way page scripts read numbers out of attributes such as `"98.6%"` or
/// `"1e3"`. Yields 0 when there is none or the value is not finite.
fn parse_leading_f64(raw: &str) -> f64 {
    let s = raw.trim();
    let b = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(b.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut seen_digit = int_end > end;
    end = int_end;
    if b.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        seen_digit |= frac_end > end + 1;
        end = frac_end;
    }
    if !seen_digit {
        return 0.0;
    }
    // exponent only counts when at least one digit follows it
    if matches!(b.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(b.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Leading unsigned integer, ignoring trailing text (`"2px"`, `"2.0"`).
/// Negative or digit-less input yields `None`.
fn parse_leading_usize(raw: &str) -> Option<usize> {
    let s = raw.trim();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    // absurdly long digit runs saturate, then get capped by `new`
    Some(s[..end].parse::<usize>().unwrap_or(usize::MAX))
}
