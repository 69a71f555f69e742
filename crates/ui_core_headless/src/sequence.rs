//! Letter and number sequence stepping for the number-input control.
//!
//! Letters step as a bijective base-26 odometer (`Z` rolls over to `AA`,
//! there is no zero digit). Alphanumeric values step their letter prefix and
//! carry the digit suffix through untouched. Malformed values pass through
//! unchanged; validation belongs to the control layer via
//! [`SequenceMode::accepts`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Fraction digits kept by [`format_decimal`] when nothing else is configured.
pub const DEFAULT_MAX_DECIMALS: usize = 3;

static ALPHA_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("alpha value pattern"));
static ALPHANUMERIC_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)([0-9]*)$").expect("alphanumeric value pattern"));
static NUMERIC_KEYSTROKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]*\.?[0-9]*$").expect("numeric keystroke pattern"));
static ALPHANUMERIC_KEYSTROKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]*$").expect("alphanumeric keystroke pattern"));
static ALPHA_KEYSTROKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]*$").expect("alpha keystroke pattern"));

/// Truncates the fractional part of a (possibly partial) decimal literal to
/// `max_decimals` characters.
///
/// This is lexical truncation, never rounding. Empty input, a lone `-` and
/// anything without a `.` come back unchanged.
pub fn format_decimal(value: &str, max_decimals: usize) -> String {
    if value.is_empty() || value == "-" {
        return value.to_string();
    }
    let Some((whole, fraction)) = value.split_once('.') else {
        return value.to_string();
    };
    let cut = fraction
        .char_indices()
        .nth(max_decimals)
        .map(|(index, _)| index)
        .unwrap_or(fraction.len());
    format!("{whole}.{}", &fraction[..cut])
}

/// Steps an all-letter value up by one (`A` -> `B`, `Z` -> `AA`, `AZ` -> `BA`).
///
/// Output is uppercase. Empty input yields `"A"`; anything that is not purely
/// ASCII letters is returned unchanged.
pub fn increment_alpha(value: &str) -> String {
    if value.is_empty() {
        return "A".to_string();
    }
    if !ALPHA_VALUE.is_match(value) {
        return value.to_string();
    }
    increment_letters(value)
}

/// Steps an all-letter value down by one (`B` -> `A`, `AA` -> `Z`).
///
/// `"A"` is the floor and stays `"A"`. Empty input yields `"A"`; anything
/// that is not purely ASCII letters is returned unchanged.
pub fn decrement_alpha(value: &str) -> String {
    if value.is_empty() {
        return "A".to_string();
    }
    if !ALPHA_VALUE.is_match(value) {
        return value.to_string();
    }
    decrement_letters(value)
}

/// Steps the letter prefix of `letters+digits` up, keeping the digit suffix.
pub fn increment_alphanumeric(value: &str) -> String {
    step_alphanumeric(value, increment_letters)
}

/// Steps the letter prefix of `letters+digits` down, keeping the digit suffix.
pub fn decrement_alphanumeric(value: &str) -> String {
    step_alphanumeric(value, decrement_letters)
}

fn step_alphanumeric(value: &str, step: fn(&str) -> String) -> String {
    if value.is_empty() {
        return "A".to_string();
    }
    let Some(captures) = ALPHANUMERIC_VALUE.captures(value) else {
        return value.to_string();
    };
    let letters = captures.get(1).map_or("", |m| m.as_str());
    let digits = captures.get(2).map_or("", |m| m.as_str());
    format!("{}{digits}", step(letters))
}

fn increment_letters(letters: &str) -> String {
    let mut bytes = letters.to_ascii_uppercase().into_bytes();
    for byte in bytes.iter_mut().rev() {
        if *byte == b'Z' {
            *byte = b'A';
        } else {
            *byte += 1;
            return letters_from(bytes);
        }
    }
    bytes.insert(0, b'A');
    letters_from(bytes)
}

fn decrement_letters(letters: &str) -> String {
    let mut bytes = letters.to_ascii_uppercase().into_bytes();
    for byte in bytes.iter_mut().rev() {
        if *byte == b'A' {
            *byte = b'Z';
        } else {
            *byte -= 1;
            return letters_from(bytes);
        }
    }
    if bytes.len() > 1 {
        bytes.remove(0);
        letters_from(bytes)
    } else {
        "A".to_string()
    }
}

fn letters_from(bytes: Vec<u8>) -> String {
    bytes.into_iter().map(char::from).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
/// Value grammar a sequence input operates in.
pub enum SequenceMode {
    /// Decimal literals, optionally negative.
    #[default]
    Numeric,
    /// Letters only.
    Alpha,
    /// Letters followed by an immutable digit suffix.
    Alphanumeric,
}

impl SequenceMode {
    /// Stable token used in DOM data attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Alpha => "alpha",
            Self::Alphanumeric => "alphanumeric",
        }
    }

    /// Whether a raw keystroke result may be committed in this mode.
    pub fn accepts(self, raw: &str) -> bool {
        match self {
            Self::Numeric => NUMERIC_KEYSTROKE.is_match(raw),
            Self::Alpha => ALPHA_KEYSTROKE.is_match(raw),
            Self::Alphanumeric => ALPHANUMERIC_KEYSTROKE.is_match(raw),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawSequenceFieldConfig {
    mode: SequenceMode,
    min: Option<f64>,
    max: Option<f64>,
    step: f64,
    max_decimals: usize,
}

impl Default for RawSequenceFieldConfig {
    fn default() -> Self {
        Self {
            mode: SequenceMode::Numeric,
            min: None,
            max: None,
            step: 1.0,
            max_decimals: DEFAULT_MAX_DECIMALS,
        }
    }
}

impl TryFrom<RawSequenceFieldConfig> for SequenceFieldConfig {
    type Error = ConfigError;

    fn try_from(raw: RawSequenceFieldConfig) -> Result<Self, Self::Error> {
        SequenceFieldConfig::new(raw.mode)
            .with_bounds(raw.min, raw.max)?
            .with_step(raw.step)
            .map(|config| config.with_max_decimals(raw.max_decimals))
    }
}

/// Validated configuration for a sequence input.
///
/// Bounds and step only apply in [`SequenceMode::Numeric`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSequenceFieldConfig")]
pub struct SequenceFieldConfig {
    mode: SequenceMode,
    min: Option<f64>,
    max: Option<f64>,
    step: f64,
    max_decimals: usize,
}

impl Default for SequenceFieldConfig {
    fn default() -> Self {
        Self::new(SequenceMode::Numeric)
    }
}

impl SequenceFieldConfig {
    /// Unbounded configuration with step 1 and three fraction digits.
    pub fn new(mode: SequenceMode) -> Self {
        Self {
            mode,
            min: None,
            max: None,
            step: 1.0,
            max_decimals: DEFAULT_MAX_DECIMALS,
        }
    }

    /// Sets the inclusive numeric bounds.
    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Result<Self, ConfigError> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(ConfigError::InvertedBounds { min, max });
            }
        }
        self.min = min;
        self.max = max;
        Ok(self)
    }

    /// Sets the numeric step applied by increment/decrement.
    pub fn with_step(mut self, step: f64) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::InvalidStep(step));
        }
        self.step = step;
        Ok(self)
    }

    /// Sets how many fraction digits numeric values keep.
    pub fn with_max_decimals(mut self, max_decimals: usize) -> Self {
        self.max_decimals = max_decimals;
        self
    }

    /// Active value grammar.
    pub fn mode(&self) -> SequenceMode {
        self.mode
    }

    /// Inclusive lower bound, if any.
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// Inclusive upper bound, if any.
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Numeric step.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Fraction digits kept for numeric values.
    pub fn max_decimals(&self) -> usize {
        self.max_decimals
    }

    /// Filters a raw keystroke result.
    ///
    /// Returns `None` when the input must be rejected, otherwise the value to
    /// commit: truncated decimals in numeric mode, uppercase letters otherwise.
    pub fn accept_input(&self, raw: &str) -> Option<String> {
        if !self.mode.accepts(raw) {
            return None;
        }
        Some(match self.mode {
            SequenceMode::Numeric => format_decimal(raw, self.max_decimals),
            SequenceMode::Alpha | SequenceMode::Alphanumeric => raw.to_ascii_uppercase(),
        })
    }

    /// Value one step above `value`.
    pub fn increment(&self, value: &str) -> String {
        match self.mode {
            SequenceMode::Numeric => self.step_number(value, 1.0),
            SequenceMode::Alpha => increment_alpha(value),
            SequenceMode::Alphanumeric => increment_alphanumeric(value),
        }
    }

    /// Value one step below `value`.
    pub fn decrement(&self, value: &str) -> String {
        match self.mode {
            SequenceMode::Numeric => self.step_number(value, -1.0),
            SequenceMode::Alpha => decrement_alpha(value),
            SequenceMode::Alphanumeric => decrement_alphanumeric(value),
        }
    }

    fn step_number(&self, value: &str, direction: f64) -> String {
        let current = value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|parsed| parsed.is_finite())
            .unwrap_or(0.0);
        let scale = 10f64.powi(self.max_decimals.min(15) as i32);
        // Binary drift (0.7 + 0.1) would otherwise survive truncation as 0.799.
        let mut next = snap_to_grid(current + direction * self.step, scale, f64::round);
        // Bounds move inward onto the grid so truncation cannot leave them.
        let (lower, upper) = match (
            self.min.map(|min| snap_to_grid(min, scale, f64::ceil)),
            self.max.map(|max| snap_to_grid(max, scale, f64::floor)),
        ) {
            (Some(lower), Some(upper)) if lower > upper => (self.min, self.max),
            bounds => bounds,
        };
        if let Some(lower) = lower {
            next = next.max(lower);
        }
        if let Some(upper) = upper {
            next = next.min(upper);
        }
        if next == 0.0 {
            next = 0.0;
        }
        format_decimal(&next.to_string(), self.max_decimals)
    }
}

/// Moves `value` onto the `1 / scale` grid with `snap`, treating products
/// within float noise of a grid point as on it. Values too large to scale
/// come back unchanged.
fn snap_to_grid(value: f64, scale: f64, snap: fn(f64) -> f64) -> f64 {
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    let nearest = scaled.round();
    if (scaled - nearest).abs() <= 1e-9 * nearest.abs().max(1.0) {
        nearest / scale
    } else {
        snap(scaled) / scale
    }
}

/// Committed value of a sequence input plus the rules that guard it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceField {
    config: SequenceFieldConfig,
    value: String,
}

impl SequenceField {
    /// Creates a field; an initial value the mode rejects starts out empty.
    pub fn new(config: SequenceFieldConfig, initial: impl AsRef<str>) -> Self {
        let value = config.accept_input(initial.as_ref()).unwrap_or_default();
        Self { config, value }
    }

    /// Committed value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Field configuration.
    pub fn config(&self) -> &SequenceFieldConfig {
        &self.config
    }

    /// Applies a keystroke result. Returns `false` and keeps the committed
    /// value when the mode rejects it.
    pub fn input(&mut self, raw: &str) -> bool {
        match self.config.accept_input(raw) {
            Some(value) => {
                self.value = value;
                true
            }
            None => false,
        }
    }

    /// Replaces the committed value under the same rules as [`Self::input`].
    pub fn set_value(&mut self, value: &str) -> bool {
        self.input(value)
    }

    /// Steps up and returns the new committed value.
    pub fn increment(&mut self) -> &str {
        self.value = self.config.increment(&self.value);
        &self.value
    }

    /// Steps down and returns the new committed value.
    pub fn decrement(&mut self) -> &str {
        self.value = self.config.decrement(&self.value);
        &self.value
    }
}
