//! Brightness percentages from snapshot data.

use serde::{Deserialize, Serialize};

/// Brightness level from 0 to 100 percent.
///
/// The bridge reports brightness as a float percentage and omits it
/// for lights that cannot dim. Color math treats an absent brightness
/// as full; the display label shows it as 0%.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Brightness {
    pub(crate) value: f64,
}

impl Default for Brightness {
    fn default() -> Self {
        Self::new()
    }
}

impl Brightness {
    const MIN: f64 = 0.0;
    const MAX: f64 = 100.0;

    /// Full brightness (100%).
    pub fn new() -> Self {
        Brightness { value: Self::MAX }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns None if value is outside valid range (0-100).
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_snapshot_rs::Brightness;
    ///
    /// assert!(Brightness::create(-1.0).is_none());
    /// assert!(Brightness::create(0.0).is_some());
    /// assert!(Brightness::create(100.0).is_some());
    /// assert!(Brightness::create(100.1).is_none());
    /// ```
    pub fn create(value: f64) -> Option<Self> {
        if Self::is_valid(value) {
            Some(Brightness { value })
        } else {
            None
        }
    }

    /// Returns default (100%) if value is absent or invalid.
    pub fn create_or(value: Option<f64>) -> Self {
        match value {
            Some(v) if Self::is_valid(v) => Brightness { value: v },
            _ => Self::new(),
        }
    }

    /// Readable percentage label; an absent brightness shows as `0%`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_snapshot_rs::Brightness;
    ///
    /// assert_eq!(Brightness::label(Some(49.8)), "50%");
    /// assert_eq!(Brightness::label(None), "0%");
    /// ```
    pub fn label(value: Option<f64>) -> String {
        format!("{}%", value.unwrap_or(0.0).round())
    }

    fn is_valid(value: f64) -> bool {
        (Self::MIN..=Self::MAX).contains(&value)
    }
}
