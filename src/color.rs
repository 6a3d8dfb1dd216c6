//! Conversion between Hue color encodings and display RGB.
//!
//! The bridge stores saturated colors as CIE xy chromaticity and white
//! tones as mirek color temperatures. [`xy_to_rgb`] follows the
//! Philips Hue conversion formulas (XYZ tristimulus, fixed sRGB
//! matrix, gamma encoding); [`mirek_to_rgb`] uses the Tanner Helland
//! blackbody approximation.

use crate::errors::Error;
use crate::types::{Brightness, Chromaticity, Mirek, Rgb};

type Result<T> = std::result::Result<T, Error>;

/// Neutral gray shown for lights that are off.
pub const NEUTRAL_GRAY: Rgb = Rgb::rgb(0x37, 0x41, 0x51);

/// Swatch for scene actions that turn a light on without color data.
pub const DEFAULT_ON: Rgb = Rgb::rgb(0xfb, 0xbf, 0x24);

/// Swatch for scene actions with no usable color information.
pub const SCENE_NEUTRAL: Rgb = Rgb::rgb(0x6b, 0x72, 0x80);

const SWATCH_WARM: Rgb = Rgb::rgb(0xff, 0xb3, 0x66);
const SWATCH_COOL: Rgb = Rgb::rgb(0xb3, 0xd9, 0xff);
const SWATCH_NEUTRAL: Rgb = Rgb::rgb(0xff, 0xf3, 0xe6);

/// Convert a CIE xy chromaticity point and brightness into display RGB.
///
/// Points with `x + y > 1` are out of gamut but tolerated; the final
/// normalize-and-clamp step resolves them to a plausible color. A
/// chromaticity with `y = 0` has no defined luminance and is rejected
/// instead of dividing by zero.
///
/// # Examples
///
/// ```
/// use hue_snapshot_rs::{Brightness, Chromaticity, xy_to_rgb};
///
/// let rgb = xy_to_rgb(Chromaticity::new(0.3, 0.3), Brightness::new()).unwrap();
/// assert_eq!(rgb.hex(), "#e1e5ff");
///
/// assert!(xy_to_rgb(Chromaticity::new(0.0, 0.0), Brightness::new()).is_err());
/// ```
pub fn xy_to_rgb(xy: Chromaticity, brightness: Brightness) -> Result<Rgb> {
    if xy.y <= 0.0 {
        return Err(Error::ZeroChromaticityY);
    }

    let z = 1.0 - xy.x - xy.y;
    let luminance = brightness.value() / 100.0;
    let x_t = (luminance / xy.y) * xy.x;
    let z_t = (luminance / xy.y) * z;

    // XYZ to linear sRGB, using the wide-gamut matrix Hue publishes.
    let r = x_t * 1.656492 - luminance * 0.354851 - z_t * 0.255038;
    let g = -x_t * 0.707196 + luminance * 1.655397 + z_t * 0.036152;
    let b = x_t * 0.051713 - luminance * 0.121364 + z_t * 1.011530;

    let mut r = gamma_encode(r);
    let mut g = gamma_encode(g);
    let mut b = gamma_encode(b);

    // Scale all three down so the brightest channel caps at 1; this
    // must happen before the clamp or the hue shifts.
    let max = r.max(g).max(b);
    if max > 1.0 {
        r /= max;
        g /= max;
        b /= max;
    }

    Ok(Rgb::rgb(to_channel(r), to_channel(g), to_channel(b)))
}

/// Convert a color temperature and brightness into display RGB.
///
/// Each channel is clamped to [0, 255] both before and after the
/// brightness scaling; this matches the observed bridge-dashboard
/// behavior and is deliberate.
///
/// # Examples
///
/// ```
/// use hue_snapshot_rs::{Brightness, Mirek, mirek_to_rgb};
///
/// let warm = mirek_to_rgb(Mirek::create(500).unwrap(), Brightness::new());
/// let cool = mirek_to_rgb(Mirek::create(153).unwrap(), Brightness::new());
/// assert!(warm.blue() < cool.blue());
/// ```
pub fn mirek_to_rgb(mirek: Mirek, brightness: Brightness) -> Rgb {
    let kelvin = mirek.kelvin();
    let t = kelvin / 100.0;

    let r = if kelvin >= 6600.0 {
        329.698727466 * (t - 60.0).powf(-0.1332047592)
    } else {
        255.0
    };

    let g = if kelvin >= 6600.0 {
        288.1221695283 * (t - 60.0).powf(-0.0755148492)
    } else {
        99.4708025861 * t.ln() - 161.1195681661
    };

    let b = if kelvin >= 6600.0 {
        255.0
    } else if kelvin < 1900.0 {
        0.0
    } else {
        138.5177312231 * (t - 10.0).ln() - 305.0447927307
    };

    let scale = brightness.value() / 100.0;
    let channel = |v: f64| (v.clamp(0.0, 255.0) * scale).clamp(0.0, 255.0).round() as u8;
    Rgb::rgb(channel(r), channel(g), channel(b))
}

/// Coarse warm/neutral/cool swatch for quick visual grouping.
///
/// The dashboard room list uses this three-bucket simplification; it
/// is not a substitute for [`mirek_to_rgb`].
pub fn mirek_swatch(mirek: Mirek) -> Rgb {
    let kelvin = mirek.kelvin();
    if kelvin < 3000.0 {
        SWATCH_WARM
    } else if kelvin > 5000.0 {
        SWATCH_COOL
    } else {
        SWATCH_NEUTRAL
    }
}

fn gamma_encode(channel: f64) -> f64 {
    if channel <= 0.0031308 {
        12.92 * channel
    } else {
        1.055 * channel.powf(1.0 / 2.4) - 0.055
    }
}

fn to_channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
