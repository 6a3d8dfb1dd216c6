//! Color temperature in mired units.

use serde::{Deserialize, Serialize};

/// Color temperature in mirek (mired), where `kelvin = 1_000_000 / mirek`.
///
/// Higher values produce warmer (more yellow/orange) light, while lower
/// values produce cooler (more blue) light. Typical bridge values:
/// - 153 mirek: ~6500K daylight
/// - 366 mirek: ~2730K warm white
/// - 500 mirek: 2000K candlelight
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct Mirek {
    pub(crate) value: u16,
}

impl Mirek {
    /// Coolest value most bridge hardware reports.
    pub const MIN: u16 = 153;
    /// Warmest value most bridge hardware reports.
    pub const MAX: u16 = 500;

    /// Warm white used when a light carries no color information at all.
    pub const DEFAULT_WARM_WHITE: Mirek = Mirek { value: 366 };

    /// Create a new Mirek with the given value.
    ///
    /// Returns `None` for zero, which has no Kelvin equivalent. Values
    /// outside the practical bridge range are accepted as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_snapshot_rs::Mirek;
    ///
    /// assert!(Mirek::create(0).is_none());
    /// assert!(Mirek::create(153).is_some());
    /// assert!(Mirek::create(1000).is_some());
    /// ```
    pub fn create(value: u16) -> Option<Self> {
        if value == 0 { None } else { Some(Mirek { value }) }
    }

    /// Get the mirek value.
    pub fn value(&self) -> u16 {
        self.value
    }

    /// Equivalent temperature in Kelvin.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_snapshot_rs::Mirek;
    ///
    /// let mirek = Mirek::create(500).unwrap();
    /// assert_eq!(mirek.kelvin(), 2000.0);
    /// ```
    pub fn kelvin(&self) -> f64 {
        1_000_000.0 / f64::from(self.value)
    }
}
