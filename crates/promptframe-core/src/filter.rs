//! Filter stack applied while drawing the editor surface.
//!
//! Four filters, composited in a fixed order:
//! 1. Brightness
//! 2. Contrast
//! 3. Grayscale
//! 4. Sepia
//!
//! Values are percentages. The math follows the CSS Filter Effects
//! definitions so that a host drawing with a native 2D context (using
//! [`FilterState::css_filter`]) and the pure renderer agree. Each function
//! works on straight RGB in the 0-1 range and clamps its result; alpha is
//! never touched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Range exposed by the brightness and contrast sliders.
pub const TONE_RANGE: RangeInclusive<f32> = 50.0..=200.0;

/// Range of the grayscale and sepia amounts.
pub const TINT_RANGE: RangeInclusive<f32> = 0.0..=100.0;

/// One of the four filters in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Brightness,
    Contrast,
    Grayscale,
    Sepia,
}

impl FilterKind {
    /// All filters, in compositing order.
    pub const ALL: [FilterKind; 4] = [
        FilterKind::Brightness,
        FilterKind::Contrast,
        FilterKind::Grayscale,
        FilterKind::Sepia,
    ];

    /// CSS function name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
            Self::Grayscale => "grayscale",
            Self::Sepia => "sepia",
        }
    }

    /// Allowed range for this filter's percentage.
    pub fn range(self) -> RangeInclusive<f32> {
        match self {
            Self::Brightness | Self::Contrast => TONE_RANGE,
            Self::Grayscale | Self::Sepia => TINT_RANGE,
        }
    }

    /// Clamp a value into this filter's range. NaN maps to the default.
    pub fn clamp(self, value: f32) -> f32 {
        if value.is_nan() {
            return FilterState::default().get(self);
        }
        let range = self.range();
        value.clamp(*range.start(), *range.end())
    }
}

impl std::str::FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brightness" => Ok(Self::Brightness),
            "contrast" => Ok(Self::Contrast),
            "grayscale" | "greyscale" => Ok(Self::Grayscale),
            "sepia" => Ok(Self::Sepia),
            other => Err(format!("unknown filter: {other}")),
        }
    }
}

/// Filter percentages for the editor.
///
/// Fields are private so every write goes through [`FilterState::set`],
/// which clamps to the control ranges. Deserialization clamps as well.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawFilterState")]
pub struct FilterState {
    brightness: f32,
    contrast: f32,
    grayscale: f32,
    sepia: f32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            brightness: 100.0,
            contrast: 100.0,
            grayscale: 0.0,
            sepia: 0.0,
        }
    }
}

/// Unchecked wire form of [`FilterState`]. Missing fields take defaults.
#[derive(Deserialize)]
#[serde(default)]
struct RawFilterState {
    brightness: f32,
    contrast: f32,
    grayscale: f32,
    sepia: f32,
}

impl Default for RawFilterState {
    fn default() -> Self {
        let d = FilterState::default();
        Self {
            brightness: d.brightness,
            contrast: d.contrast,
            grayscale: d.grayscale,
            sepia: d.sepia,
        }
    }
}

impl From<RawFilterState> for FilterState {
    fn from(raw: RawFilterState) -> Self {
        FilterState::new()
            .with(FilterKind::Brightness, raw.brightness)
            .with(FilterKind::Contrast, raw.contrast)
            .with(FilterKind::Grayscale, raw.grayscale)
            .with(FilterKind::Sepia, raw.sepia)
    }
}

impl FilterState {
    /// Create a new FilterState with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn contrast(&self) -> f32 {
        self.contrast
    }

    pub fn grayscale(&self) -> f32 {
        self.grayscale
    }

    pub fn sepia(&self) -> f32 {
        self.sepia
    }

    /// Read one filter's value.
    pub fn get(&self, kind: FilterKind) -> f32 {
        match kind {
            FilterKind::Brightness => self.brightness,
            FilterKind::Contrast => self.contrast,
            FilterKind::Grayscale => self.grayscale,
            FilterKind::Sepia => self.sepia,
        }
    }

    /// Replace one filter's value, clamped to its range. Others are untouched.
    pub fn set(&mut self, kind: FilterKind, value: f32) {
        let value = kind.clamp(value);
        match kind {
            FilterKind::Brightness => self.brightness = value,
            FilterKind::Contrast => self.contrast = value,
            FilterKind::Grayscale => self.grayscale = value,
            FilterKind::Sepia => self.sepia = value,
        }
    }

    /// Builder-style [`FilterState::set`].
    pub fn with(mut self, kind: FilterKind, value: f32) -> Self {
        self.set(kind, value);
        self
    }

    /// Flip a grayscale or sepia toggle between 0 and 100.
    ///
    /// Any non-zero amount counts as "on". Brightness and contrast are not
    /// toggles and are left alone.
    pub fn toggle(&mut self, kind: FilterKind) {
        if matches!(kind, FilterKind::Grayscale | FilterKind::Sepia) {
            let next = if self.get(kind) > 0.0 { 0.0 } else { 100.0 };
            self.set(kind, next);
        }
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Composite CSS filter string, e.g.
    /// `brightness(100%) contrast(100%) grayscale(0%) sepia(0%)`.
    pub fn css_filter(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for kind in FilterKind::ALL {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{}({}%)", kind.as_str(), self.get(kind))?;
        }
        Ok(())
    }
}

/// Apply the filter stack to RGBA pixel data in place.
///
/// # Example
/// ```
/// use promptframe_core::filter::{apply_filters, FilterKind, FilterState};
///
/// let mut pixels = vec![100, 100, 100, 255];
/// let filters = FilterState::new().with(FilterKind::Brightness, 150.0);
///
/// apply_filters(&mut pixels, &filters);
/// assert_eq!(pixels, vec![150, 150, 150, 255]);
/// ```
pub fn apply_filters(pixels: &mut [u8], filters: &FilterState) {
    // Early exit keeps the default stack an exact identity
    if filters.is_default() {
        return;
    }

    let brightness = filters.brightness / 100.0;
    let contrast = filters.contrast / 100.0;
    let grayscale = grayscale_matrix(filters.grayscale / 100.0);
    let sepia = sepia_matrix(filters.sepia / 100.0);

    for chunk in pixels.chunks_exact_mut(4) {
        let mut rgb = [
            chunk[0] as f32 / 255.0,
            chunk[1] as f32 / 255.0,
            chunk[2] as f32 / 255.0,
        ];

        if brightness != 1.0 {
            rgb = apply_brightness(rgb, brightness);
        }
        if contrast != 1.0 {
            rgb = apply_contrast(rgb, contrast);
        }
        if let Some(m) = &grayscale {
            rgb = apply_matrix(rgb, m);
        }
        if let Some(m) = &sepia {
            rgb = apply_matrix(rgb, m);
        }

        chunk[0] = to_byte(rgb[0]);
        chunk[1] = to_byte(rgb[1]);
        chunk[2] = to_byte(rgb[2]);
    }
}

type ColorMatrix = [[f32; 3]; 3];

/// Formula: `output = input * amount`
#[inline]
fn apply_brightness(rgb: [f32; 3], amount: f32) -> [f32; 3] {
    rgb.map(|c| (c * amount).clamp(0.0, 1.0))
}

/// Formula: `output = (input - 0.5) * amount + 0.5`
#[inline]
fn apply_contrast(rgb: [f32; 3], amount: f32) -> [f32; 3] {
    rgb.map(|c| ((c - 0.5) * amount + 0.5).clamp(0.0, 1.0))
}

#[inline]
fn apply_matrix(rgb: [f32; 3], m: &ColorMatrix) -> [f32; 3] {
    let [r, g, b] = rgb;
    [
        (m[0][0] * r + m[0][1] * g + m[0][2] * b).clamp(0.0, 1.0),
        (m[1][0] * r + m[1][1] * g + m[1][2] * b).clamp(0.0, 1.0),
        (m[2][0] * r + m[2][1] * g + m[2][2] * b).clamp(0.0, 1.0),
    ]
}

/// CSS `grayscale()` matrix, or `None` when the amount is zero.
fn grayscale_matrix(amount: f32) -> Option<ColorMatrix> {
    if amount <= 0.0 {
        return None;
    }
    let s = 1.0 - amount.min(1.0);
    Some([
        [0.2126 + 0.7874 * s, 0.7152 - 0.7152 * s, 0.0722 - 0.0722 * s],
        [0.2126 - 0.2126 * s, 0.7152 + 0.2848 * s, 0.0722 - 0.0722 * s],
        [0.2126 - 0.2126 * s, 0.7152 - 0.7152 * s, 0.0722 + 0.9278 * s],
    ])
}

/// CSS `sepia()` matrix, or `None` when the amount is zero.
fn sepia_matrix(amount: f32) -> Option<ColorMatrix> {
    if amount <= 0.0 {
        return None;
    }
    let s = 1.0 - amount.min(1.0);
    Some([
        [0.393 + 0.607 * s, 0.769 - 0.769 * s, 0.189 - 0.189 * s],
        [0.349 - 0.349 * s, 0.686 + 0.314 * s, 0.168 - 0.168 * s],
        [0.272 - 0.272 * s, 0.534 - 0.534 * s, 0.131 + 0.869 * s],
    ])
}

#[inline]
fn to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}


// ============================================================================
// Property-Based Tests
// ============================================================================
