//! # Length Formatting
//!
//! Converts raw decimal inches into the strings shown in the report table.
//! Two knobs control the output:
//!
//! - [`RoundingMode`] - snap to the nearest 1/16", 1/8", 1/4", 1/2", or not at all
//! - [`DisplayMode`] - decimal (`26.4375"`) or mixed-number fraction (`26 7/16"`)
//!
//! Fractions are reduced with exact rational arithmetic: the `f64` is
//! expanded to its exact binary ratio and then approximated with a
//! continued-fraction search bounded by the maximum denominator, so the
//! result is always in lowest terms.
//!
//! ## Example
//!
//! ```rust
//! use crt_core::format::{format_length, DisplayMode, RoundingMode};
//!
//! assert_eq!(format_length(3.0625, RoundingMode::Sixteenth, DisplayMode::Fraction), "3 1/16\"");
//! assert_eq!(format_length(48.0, RoundingMode::None, DisplayMode::Decimal), "48.0\"");
//! assert_eq!(format_length(0.5, RoundingMode::Quarter, DisplayMode::Fraction), "1/2\"");
//! ```
//!
//! ## Negative values
//!
//! Fraction mode renders sign and magnitude separately: the whole-inch part
//! is the magnitude truncated toward zero and a single leading `-` covers the
//! whole mixed number (`-2 1/2"`, `-3/8"`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Decimal places kept by every rounding step.
pub const DECIMAL_PLACES: usize = 4;

/// Denominator limit used by Fraction mode when no rounding is selected.
pub const NO_ROUNDING_MAX_DENOMINATOR: u32 = 16;


// ============================================================================
// Rounding / Display Modes
// ============================================================================

/// Rounding step applied before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Keep four decimal places
    None,
    /// Nearest 1/16"
    #[default]
    Sixteenth,
    /// Nearest 1/8"
    Eighth,
    /// Nearest 1/4"
    Quarter,
    /// Nearest 1/2"
    Half,
}

impl RoundingMode {
    /// All modes in menu order
    pub const ALL: [RoundingMode; 5] = [
        RoundingMode::None,
        RoundingMode::Sixteenth,
        RoundingMode::Eighth,
        RoundingMode::Quarter,
        RoundingMode::Half,
    ];

    /// Rounding step in inches, or `None` when values are not snapped.
    pub fn step(self) -> Option<f64> {
        match self {
            RoundingMode::None => None,
            RoundingMode::Sixteenth => Some(1.0 / 16.0),
            RoundingMode::Eighth => Some(1.0 / 8.0),
            RoundingMode::Quarter => Some(1.0 / 4.0),
            RoundingMode::Half => Some(1.0 / 2.0),
        }
    }

    /// Largest denominator Fraction mode may print.
    ///
    /// `None` shares the 1/16 limit.
    pub fn max_denominator(self) -> u32 {
        match self {
            RoundingMode::None => NO_ROUNDING_MAX_DENOMINATOR,
            RoundingMode::Sixteenth => 16,
            RoundingMode::Eighth => 8,
            RoundingMode::Quarter => 4,
            RoundingMode::Half => 2,
        }
    }

    /// Label as shown in the rounding menu
    pub fn label(self) -> &'static str {
        match self {
            RoundingMode::None => "No Rounding",
            RoundingMode::Sixteenth => "Nearest 1/16\"",
            RoundingMode::Eighth => "Nearest 1/8\"",
            RoundingMode::Quarter => "Nearest 1/4\"",
            RoundingMode::Half => "Nearest 1/2\"",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoundingMode {
    type Err = CalcError;

    /// Accepts menu labels (`Nearest 1/8"`) and short forms (`1/8`, `none`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if let Some(mode) = RoundingMode::ALL.iter().find(|m| m.label().eq_ignore_ascii_case(key)) {
            return Ok(*mode);
        }
        match key.trim_end_matches('"').to_ascii_lowercase().as_str() {
            "none" | "no rounding" | "0" => Ok(RoundingMode::None),
            "1/16" | "nearest 1/16" | "sixteenth" => Ok(RoundingMode::Sixteenth),
            "1/8" | "nearest 1/8" | "eighth" => Ok(RoundingMode::Eighth),
            "1/4" | "nearest 1/4" | "quarter" => Ok(RoundingMode::Quarter),
            "1/2" | "nearest 1/2" | "half" => Ok(RoundingMode::Half),
            _ => Err(CalcError::invalid_input(
                "rounding",
                s,
                "Expected one of: none, 1/16, 1/8, 1/4, 1/2",
            )),
        }
    }
}

/// How a length is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    /// `26.4375"`
    Decimal,
    /// `26 7/16"`
    #[default]
    Fraction,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 2] = [DisplayMode::Decimal, DisplayMode::Fraction];

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Decimal => "Decimal",
            DisplayMode::Fraction => "Fraction",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DisplayMode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decimal" => Ok(DisplayMode::Decimal),
            "fraction" => Ok(DisplayMode::Fraction),
            _ => Err(CalcError::invalid_input(
                "display",
                s,
                "Expected 'decimal' or 'fraction'",
            )),
        }
    }
}

/// Active rounding and display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub rounding: RoundingMode,
    pub display: DisplayMode,
}

impl DisplayConfig {
    pub fn new(rounding: RoundingMode, display: DisplayMode) -> Self {
        DisplayConfig { rounding, display }
    }

    /// Format a length with these settings. See [`format_length`].
    pub fn format(&self, value: f64) -> String {
        format_length(value, self.rounding, self.display)
    }
}

// ============================================================================
// Fraction
// ============================================================================

/// A fraction in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: i128,
    pub denominator: u32,
}

impl Fraction {
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / f64::from(self.denominator)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Format a length for display.
///
/// - `RoundingMode::None` + Decimal: four decimal places, e.g. `64.8761"`
/// - `RoundingMode::None` + Fraction: best fraction with denominator <= 16, no snapping
/// - any step + Decimal: snapped value, e.g. `64.875"`
/// - any step + Fraction: snapped value as a mixed number, e.g. `64 7/8"`
///
/// Never fails; negative values keep their sign.
pub fn format_length(value: f64, rounding: RoundingMode, display: DisplayMode) -> String {
    let snapped = match rounding.step() {
        Some(step) => round_to_nearest(value, step),
        None => value,
    };

    match display {
        DisplayMode::Decimal => format!("{}\"", decimal_repr(round_places(snapped))),
        DisplayMode::Fraction => render_fraction(snapped, rounding.max_denominator()),
    }
}

/// Snap `value` to the nearest multiple of `precision`, then round to four
/// decimal places. Halfway cases go to the even multiple.
///
/// A `precision` of 0 skips snapping and only rounds to four decimals.
///
/// ```rust
/// use crt_core::format::round_to_nearest;
///
/// assert_eq!(round_to_nearest(26.438, 1.0 / 16.0), 26.4375);
/// assert_eq!(round_to_nearest(26.43807, 0.0), 26.4381);
/// ```
pub fn round_to_nearest(value: f64, precision: f64) -> f64 {
    if precision == 0.0 {
        return round_places(value);
    }
    round_places((value / precision).round_ties_even() * precision)
}

/// Best rational approximation of `value` with denominator at most
/// `max_denominator`, in lowest terms.
///
/// Ties between the two closest candidates go to the one with the smaller
/// denominator.
///
/// Accepts any finite `value` and any positive `max_denominator`.
///
/// # Errors
///
/// `CalcError::InvalidInput` when `max_denominator` is 0, when `value` is
/// not finite, or when the reduced numerator does not fit in an `i128`
/// (magnitudes around 10^28 and up).
///
/// ```rust
/// use crt_core::format::reduce_fraction;
///
/// let f = reduce_fraction(0.4375, 16).unwrap();
/// assert_eq!((f.numerator, f.denominator), (7, 16));
///
/// let third = reduce_fraction(0.3333, 16).unwrap();
/// assert_eq!(third.to_string(), "1/3");
/// ```
pub fn reduce_fraction(value: f64, max_denominator: u32) -> CalcResult<Fraction> {
    if max_denominator == 0 {
        return Err(CalcError::invalid_input(
            "max_denominator",
            "0",
            "Denominator limit must be at least 1",
        ));
    }
    if !value.is_finite() {
        return Err(CalcError::invalid_input("value", value.to_string(), "Value must be finite"));
    }

    // Shifting by a whole number leaves the best approximation's fractional
    // part unchanged, so only the remainder in [0, 1) is searched.
    let magnitude = value.abs();
    let whole = magnitude.trunc();
    let (frac_n, frac_d) = limit_denominator(magnitude - whole, max_denominator);

    let overflow = || {
        CalcError::invalid_input(
            "value",
            value.to_string(),
            "Numerator does not fit in 128 bits",
        )
    };
    if whole >= i128::MAX as f64 {
        return Err(overflow());
    }
    // frac_d <= max_denominator <= u32::MAX, frac_n <= frac_d
    let numerator = (whole as i128)
        .checked_mul(frac_d as i128)
        .and_then(|n| n.checked_add(frac_n as i128))
        .ok_or_else(overflow)?;

    Ok(Fraction {
        numerator: if value < 0.0 { -numerator } else { numerator },
        denominator: frac_d as u32,
    })
}

/// Render `value` as a mixed number whose fractional part has a denominator
/// of at most `1 / precision`.
///
/// The value is not snapped first; the fractional remainder is rounded to
/// four decimals and then reduced.
///
/// ```rust
/// use crt_core::format::format_fraction;
///
/// assert_eq!(format_fraction(2.75, 0.25).unwrap(), "2 3/4\"");
/// assert_eq!(format_fraction(-0.375, 0.125).unwrap(), "-3/8\"");
/// ```
///
/// # Errors
///
/// `CalcError::InvalidInput` when `precision` is not positive, or when it is
/// above 1 so that `1 / precision` truncates to a zero denominator limit.
pub fn format_fraction(value: f64, precision: f64) -> CalcResult<String> {
    if precision.is_nan() || precision <= 0.0 {
        return Err(CalcError::invalid_input(
            "precision",
            precision.to_string(),
            "Rounding precision must be a positive number",
        ));
    }
    let limit = (1.0 / precision).trunc();
    if limit < 1.0 {
        return Err(CalcError::invalid_input(
            "precision",
            precision.to_string(),
            "1 / precision truncates to a zero denominator limit",
        ));
    }
    // The remainder is a four-decimal value; its best approximation is
    // already exact long before the limit passes u32::MAX.
    Ok(render_fraction(value, limit.min(f64::from(u32::MAX)) as u32))
}

// ============================================================================
// Internals
// ============================================================================

/// Round to [`DECIMAL_PLACES`] using correctly rounded decimal formatting.
fn round_places(value: f64) -> f64 {
    format!("{:.*}", DECIMAL_PLACES, value).parse().unwrap_or(value)
}

/// Shortest round-trip decimal that always shows a fractional digit.
fn decimal_repr(value: f64) -> String {
    // Collapse -0.0
    let value = value + 0.0;
    let repr = value.to_string();
    if value.is_finite() && !repr.contains('.') {
        format!("{}.0", repr)
    } else {
        repr
    }
}

fn render_fraction(value: f64, max_denominator: u32) -> String {
    if !value.is_finite() {
        return format!("{}\"", value);
    }

    let negative = value < 0.0;
    let magnitude = value.abs();
    let mut whole = magnitude.trunc();
    let remainder = round_places(magnitude - whole);

    let (mut numerator, denominator) = if remainder == 0.0 {
        (0, 1)
    } else {
        limit_denominator(remainder, max_denominator)
    };
    if numerator == denominator {
        // 0.99999 rounds to a full inch
        whole += 1.0;
        numerator = 0;
    }

    let sign = if negative && (whole != 0.0 || numerator != 0) { "-" } else { "" };
    match (whole != 0.0, numerator != 0) {
        (_, false) => format!("{}{:.0}\"", sign, whole),
        (true, true) => format!("{}{:.0} {}/{}\"", sign, whole, numerator, denominator),
        (false, true) => format!("{}{}/{}\"", sign, numerator, denominator),
    }
}

/// Exact ratio `numerator / denominator` of a finite, non-negative `f64`,
/// with common factors of two removed.
fn exact_ratio(magnitude: f64) -> (u128, u128) {
    if magnitude == 0.0 {
        return (0, 1);
    }

    let bits = magnitude.to_bits();
    let exponent_bits = ((bits >> 52) & 0x7ff) as i32;
    let fraction_bits = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if exponent_bits == 0 {
        (fraction_bits, -1074)
    } else {
        (fraction_bits | (1u64 << 52), exponent_bits - 1075)
    };

    if exponent >= 0 {
        return ((mantissa as u128) << exponent, 1);
    }

    let shift = exponent.unsigned_abs();
    let common = mantissa.trailing_zeros().min(shift);
    ((mantissa >> common) as u128, 1u128 << (shift - common))
}

/// Closest fraction to `magnitude` with denominator <= `max_denominator`.
///
/// `magnitude` must lie in `[0, 1]` and `max_denominator` must be at least 1.
fn limit_denominator(magnitude: f64, max_denominator: u32) -> (u128, u128) {
    // Strictly closer to 0/1 than to 1/max. Past this guard the exact ratio
    // has a denominator below 2^88, so every product below stays under 2^120.
    if magnitude < 0.25 / f64::from(max_denominator) {
        return (0, 1);
    }

    let (target_n, target_d) = exact_ratio(magnitude);
    let max = u128::from(max_denominator);
    if target_d <= max {
        return (target_n, target_d);
    }

    // Convergents p/q of the continued fraction expansion
    let (mut p0, mut q0, mut p1, mut q1) = (0u128, 1u128, 1u128, 0u128);
    let (mut n, mut d) = (target_n, target_d);
    while d != 0 {
        let a = n / d;
        let q2 = q0 + a * q1;
        if q2 > max {
            break;
        }
        (p0, q0, p1, q1) = (p1, q1, p0 + a * p1, q2);
        (n, d) = (d, n - a * d);
    }

    // q1 >= 1: the first convergent always has denominator 1
    let k = (max - q0) / q1;
    let semi = (p0 + k * p1, q0 + k * q1);
    let convergent = (p1, q1);

    // |p/q - N/D| compared as |p*D - N*q| / q without the common 1/D
    let error = |(p, q): (u128, u128)| (p * target_d).abs_diff(target_n * q);
    let best = if error(convergent) * semi.1 <= error(semi) * convergent.1 {
        convergent
    } else {
        semi
    };

    let divisor = gcd(best.0, best.1);
    (best.0 / divisor, best.1 / divisor)
}

fn gcd(mut left: u128, mut right: u128) -> u128 {
    while right != 0 {
        let rem = left % right;
        left = right;
        right = rem;
    }
    left.max(1)
}
