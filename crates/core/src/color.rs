use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Cell colour for the coldest month in the dataset.
pub const LOW_COLOR: Rgb = Rgb::new(0x00, 0xFF, 0xBE);
/// Cell colour for the warmest month in the dataset.
pub const HIGH_COLOR: Rgb = Rgb::new(0xFF, 0x00, 0x41);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid hex colour {0:?}, expected #RRGGBB")]
pub struct ParseColorError(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
        };
        if hex.len() != 6 {
            return Err(ParseColorError(s.to_string()));
        }
        match (channel(0..2), channel(2..4), channel(4..6)) {
            (Some(r), Some(g), Some(b)) => Ok(Self::new(r, g, b)),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

/// CSS functional notation, the form written to `fill`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Linear temperature → colour map between two endpoint colours.
///
/// Inputs outside the domain are not clamped: the interpolation parameter
/// runs past 0 or 1 and each channel saturates at 0 or 255.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScale {
    pub domain: (f64, f64),
    pub low: Rgb,
    pub high: Rgb,
}

impl ColorScale {
    pub const fn new(domain: (f64, f64), low: Rgb, high: Rgb) -> Self {
        Self { domain, low, high }
    }

    /// Interpolation parameter for `value`: 0 at the low end, 1 at the high
    /// end, 0.5 everywhere when the domain is a single point.
    pub fn parameter(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        if span == 0.0 {
            0.5
        } else {
            (value - d0) / span
        }
    }

    pub fn apply(&self, value: f64) -> Rgb {
        let t = self.parameter(value);
        Rgb::new(
            mix(self.low.r, self.high.r, t),
            mix(self.low.g, self.high.g, t),
            mix(self.low.b, self.high.b, t),
        )
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn mix(a: u8, b: u8, t: f64) -> u8 {
    let value = f64::from(a) * (1.0 - t) + f64::from(b) * t;
    if value.is_nan() {
        return 0;
    }
    (value + 0.5).floor().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::{ColorScale, Rgb, HIGH_COLOR, LOW_COLOR};

    #[test]
    fn parses_hex_colours() {
        assert_eq!("#00FFBE".parse::<Rgb>(), Ok(LOW_COLOR));
        assert_eq!("ff0041".parse::<Rgb>(), Ok(HIGH_COLOR));
        assert!("#GGGGGG".parse::<Rgb>().is_err());
        assert!("#FFF".parse::<Rgb>().is_err());
    }

    #[test]
    fn formats_as_css_rgb() {
        assert_eq!(LOW_COLOR.to_string(), "rgb(0, 255, 190)");
        assert_eq!(HIGH_COLOR.to_hex(), "#ff0041");
    }

    #[test]
    fn endpoints_and_midpoint() {
        let scale = ColorScale::new((2.0, 12.0), LOW_COLOR, HIGH_COLOR);
        assert_eq!(scale.apply(2.0), LOW_COLOR);
        assert_eq!(scale.apply(12.0), HIGH_COLOR);
        // (0 + 255) / 2 = 127.5 rounds up, (190 + 65) / 2 = 127.5 too.
        assert_eq!(scale.apply(7.0), Rgb::new(128, 128, 128));
    }

    #[test]
    fn parameter_is_monotonic() {
        let scale = ColorScale::new((2.584, 10.435), LOW_COLOR, HIGH_COLOR);
        let temps = [2.584, 3.0, 5.5, 8.66, 10.435];
        let params: Vec<f64> = temps.iter().map(|&t| scale.parameter(t)).collect();
        assert!(params.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(params.iter().all(|p| (0.0..=1.0).contains(p)));

        let reds: Vec<u8> = temps.iter().map(|&t| scale.apply(t).r).collect();
        assert!(reds.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn out_of_domain_values_saturate() {
        let scale = ColorScale::new((0.0, 10.0), LOW_COLOR, HIGH_COLOR);
        assert_eq!(scale.apply(-10.0), Rgb::new(0, 255, 255));
        assert_eq!(scale.apply(20.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn single_point_domain_uses_midpoint() {
        let scale = ColorScale::new((5.0, 5.0), LOW_COLOR, HIGH_COLOR);
        assert_eq!(scale.apply(5.0), Rgb::new(128, 128, 128));
    }
}
