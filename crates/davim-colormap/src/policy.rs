//! Colormap policies: scalar value to RGB within a domain.
//!
//! Every policy is a pure function of `(domain, value)`; only
//! [`ColorMapPolicy::BlueWhiteRed`] additionally reads a [`WhitePoint`].
//! Degenerate domains (`max == min`) map to [`NEUTRAL_COLOR`] for every
//! policy that would otherwise divide by the domain span.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::domain::Domain;
use crate::error::{ColorMapError, Result};
use crate::hsv::{hsv_to_rgb, Hsv};

/// Color returned by the rainbow and nonlinear maps for values outside the domain.
pub const OUT_OF_DOMAIN_COLOR: Vec3 = Vec3::ZERO;

/// Color returned for degenerate domains.
pub const NEUTRAL_COLOR: Vec3 = Vec3::splat(0.5);

const HUE_BLUE: f32 = 240.0;
const HUE_RED: f32 = 0.0;

/// A scalar-to-color mapping policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMapPolicy {
    /// Linear hue sweep from blue (min) to red (max).
    #[default]
    Rainbow,
    /// Diverging map: blue to white to red, split at the white point.
    BlueWhiteRed,
    /// Black to red to yellow to white in three equal bands.
    Heatmap,
    /// Pure blue at or below the domain midpoint, pure red above it.
    Discrete,
    /// Quadratic hue sweep, wrapping the hue wheel several times.
    Nonlinear,
}

impl ColorMapPolicy {
    /// All policies, in menu order.
    pub const ALL: [ColorMapPolicy; 5] = [
        ColorMapPolicy::Rainbow,
        ColorMapPolicy::BlueWhiteRed,
        ColorMapPolicy::Heatmap,
        ColorMapPolicy::Nonlinear,
        ColorMapPolicy::Discrete,
    ];

    /// The policy's selector name.
    pub fn name(self) -> &'static str {
        match self {
            ColorMapPolicy::Rainbow => "rainbow",
            ColorMapPolicy::BlueWhiteRed => "blue-white-red",
            ColorMapPolicy::Heatmap => "heatmap",
            ColorMapPolicy::Discrete => "discrete",
            ColorMapPolicy::Nonlinear => "nonlinear",
        }
    }

    /// Maps a single scalar to a color.
    pub fn map(self, domain: &Domain, value: f32, white_point: WhitePoint) -> Vec3 {
        match self {
            ColorMapPolicy::Rainbow => rainbow(domain, value),
            ColorMapPolicy::BlueWhiteRed => blue_white_red(domain, value, white_point),
            ColorMapPolicy::Heatmap => heatmap(domain, value),
            ColorMapPolicy::Discrete => discrete(domain, value),
            ColorMapPolicy::Nonlinear => nonlinear(domain, value),
        }
    }
}

impl fmt::Display for ColorMapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMapPolicy {
    type Err = ColorMapError;

    fn from_str(s: &str) -> Result<Self> {
        ColorMapPolicy::ALL
            .into_iter()
            .find(|policy| policy.name() == s)
            .ok_or_else(|| ColorMapError::InvalidPolicy(s.to_string()))
    }
}

/// Position of the white midpoint of the blue-white-red map, as a
/// percentage of the domain in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct WhitePoint(f32);

impl WhitePoint {
    /// Creates a white point, rejecting values outside [0, 100].
    pub fn new(percent: f32) -> Result<Self> {
        if (0.0..=100.0).contains(&percent) {
            Ok(Self(percent))
        } else {
            Err(ColorMapError::InvalidWhitePoint(percent))
        }
    }

    /// The white point as a percentage.
    pub fn percent(self) -> f32 {
        self.0
    }

    /// The white point as a fraction of the domain in [0, 1].
    pub fn fraction(self) -> f32 {
        self.0 / 100.0
    }
}

impl Default for WhitePoint {
    fn default() -> Self {
        Self(50.0)
    }
}

impl TryFrom<f32> for WhitePoint {
    type Error = ColorMapError;

    fn try_from(percent: f32) -> Result<Self> {
        Self::new(percent)
    }
}

impl From<WhitePoint> for f32 {
    fn from(white_point: WhitePoint) -> Self {
        white_point.0
    }
}

/// Relative position of `x` within `[lo, hi]`, clamped into [0, 1].
fn ramp(x: f64, lo: f64, hi: f64) -> f32 {
    if hi > lo {
        ((x - lo) / (hi - lo)).clamp(0.0, 1.0) as f32
    } else {
        1.0
    }
}

/// Rainbow map: hue 240 (blue) at `min` down to hue 0 (red) at `max`.
pub fn rainbow(domain: &Domain, value: f32) -> Vec3 {
    if domain.is_degenerate() {
        return NEUTRAL_COLOR;
    }
    let t = domain.normalize(value);
    if !(0.0..=1.0).contains(&t) {
        return OUT_OF_DOMAIN_COLOR;
    }
    hsv_to_rgb(Hsv::pure((1.0 - t) * 240.0))
}

/// Diverging map from blue through white to red.
///
/// The white midpoint sits at `white_point` percent of the domain. A white
/// point of 0 or 100 collapses one half of the map onto its boundary color.
pub fn blue_white_red(domain: &Domain, value: f32, white_point: WhitePoint) -> Vec3 {
    if domain.is_degenerate() {
        return NEUTRAL_COLOR;
    }
    let (min, max) = (f64::from(domain.min()), f64::from(domain.max()));
    let middle = f64::from(domain.at_fraction(white_point.fraction()));
    let value = f64::from(value);

    // Saturation is clamped by the converter, which covers out-of-domain values.
    if value <= middle {
        if middle <= min {
            return hsv_to_rgb(Hsv::pure(HUE_BLUE));
        }
        let saturation = (middle - value) / (middle - min);
        hsv_to_rgb(Hsv::new(HUE_BLUE, saturation as f32, 1.0))
    } else {
        if middle >= max {
            return hsv_to_rgb(Hsv::pure(HUE_RED));
        }
        let saturation = (value - middle) / (max - middle);
        hsv_to_rgb(Hsv::new(HUE_RED, saturation as f32, 1.0))
    }
}

/// Heat map: black to red, red to yellow, yellow to white over three equal bands.
///
/// Band boundaries belong to the lower band. Values outside the domain are
/// clamped to it.
pub fn heatmap(domain: &Domain, value: f32) -> Vec3 {
    if domain.is_degenerate() {
        return NEUTRAL_COLOR;
    }
    let (min, max) = (f64::from(domain.min()), f64::from(domain.max()));
    let value = if value.is_nan() {
        min
    } else {
        f64::from(value).clamp(min, max)
    };
    let span = max - min;
    let first = min + span / 3.0;
    let second = min + span * 2.0 / 3.0;

    if value <= first {
        Vec3::new(ramp(value, min, first), 0.0, 0.0)
    } else if value <= second {
        Vec3::new(1.0, ramp(value, first, second), 0.0)
    } else {
        Vec3::new(1.0, 1.0, ramp(value, second, max))
    }
}

/// Two-color threshold map split at the domain midpoint.
pub fn discrete(domain: &Domain, value: f32) -> Vec3 {
    if f64::from(value) <= domain.midpoint() {
        hsv_to_rgb(Hsv::pure(HUE_BLUE))
    } else {
        hsv_to_rgb(Hsv::pure(HUE_RED))
    }
}

/// Quadratic hue map: hue `2400 t^2`, left unreduced for the converter to wrap.
pub fn nonlinear(domain: &Domain, value: f32) -> Vec3 {
    if domain.is_degenerate() {
        return NEUTRAL_COLOR;
    }
    let t = domain.normalize(value);
    if !(0.0..=1.0).contains(&t) {
        return OUT_OF_DOMAIN_COLOR;
    }
    hsv_to_rgb(Hsv::pure(2400.0 * t * t))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: Vec3 = Vec3::new(0.0, 0.0, 1.0);
    const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    fn wp(percent: f32) -> WhitePoint {
        WhitePoint::new(percent).unwrap()
    }

    #[test]
    fn test_policy_names_round_trip() {
        for policy in ColorMapPolicy::ALL {
            assert_eq!(policy.name().parse::<ColorMapPolicy>().unwrap(), policy);
            assert_eq!(policy.to_string(), policy.name());
        }
    }

    #[test]
    fn test_unknown_policy_name() {
        assert_eq!(
            "viridis".parse::<ColorMapPolicy>(),
            Err(ColorMapError::InvalidPolicy("viridis".to_string()))
        );
        assert!("Rainbow".parse::<ColorMapPolicy>().is_err());
    }

    #[test]
    fn test_policy_serde_names() {
        let json = serde_json::to_string(&ColorMapPolicy::BlueWhiteRed).unwrap();
        assert_eq!(json, "\"blue-white-red\"");
        let policy: ColorMapPolicy = serde_json::from_str("\"nonlinear\"").unwrap();
        assert_eq!(policy, ColorMapPolicy::Nonlinear);
    }

    #[test]
    fn test_white_point_validation() {
        assert_eq!(WhitePoint::default().percent(), 50.0);
        assert!(WhitePoint::new(0.0).is_ok());
        assert!(WhitePoint::new(100.0).is_ok());
        assert_eq!(
            WhitePoint::new(100.5),
            Err(ColorMapError::InvalidWhitePoint(100.5))
        );
        assert!(WhitePoint::new(-1.0).is_err());
        assert!(WhitePoint::new(f32::NAN).is_err());
        assert!(serde_json::from_str::<WhitePoint>("250.0").is_err());
        assert_eq!(serde_json::from_str::<WhitePoint>("25.0").unwrap(), wp(25.0));
    }

    #[test]
    fn test_rainbow_endpoints() {
        let domain = Domain::new(0.0, 10.0);
        assert_eq!(rainbow(&domain, 0.0), BLUE);
        assert_eq!(rainbow(&domain, 10.0), RED);
        // Midpoint is hue 120: green.
        assert!(approx(rainbow(&domain, 5.0), Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_rainbow_out_of_domain_is_black() {
        let domain = Domain::new(0.0, 10.0);
        assert_eq!(rainbow(&domain, -1.0), Vec3::ZERO);
        assert_eq!(rainbow(&domain, 11.0), Vec3::ZERO);
        assert_eq!(rainbow(&domain, f32::NAN), Vec3::ZERO);
    }

    #[test]
    fn test_blue_white_red_midpoint_is_white() {
        let domain = Domain::new(0.0, 10.0);
        assert_eq!(blue_white_red(&domain, 5.0, wp(50.0)), Vec3::ONE);
        assert_eq!(blue_white_red(&domain, 0.0, wp(50.0)), BLUE);
        assert_eq!(blue_white_red(&domain, 10.0, wp(50.0)), RED);
    }

    #[test]
    fn test_blue_white_red_ramps() {
        let domain = Domain::new(0.0, 10.0);
        // Halfway between min and white: half-saturated blue.
        assert!(approx(
            blue_white_red(&domain, 2.5, wp(50.0)),
            Vec3::new(0.5, 0.5, 1.0)
        ));
        assert!(approx(
            blue_white_red(&domain, 7.5, wp(50.0)),
            Vec3::new(1.0, 0.5, 0.5)
        ));
    }

    #[test]
    fn test_blue_white_red_shifted_white_point() {
        let domain = Domain::new(0.0, 10.0);
        assert_eq!(blue_white_red(&domain, 2.0, wp(20.0)), Vec3::ONE);
        assert!(approx(
            blue_white_red(&domain, 6.0, wp(20.0)),
            Vec3::new(1.0, 0.5, 0.5)
        ));
    }

    #[test]
    fn test_blue_white_red_extreme_white_points() {
        let domain = Domain::new(0.0, 10.0);
        assert_eq!(blue_white_red(&domain, 0.0, wp(0.0)), BLUE);
        assert!(approx(
            blue_white_red(&domain, 5.0, wp(0.0)),
            Vec3::new(1.0, 0.5, 0.5)
        ));
        assert_eq!(blue_white_red(&domain, 10.0, wp(0.0)), RED);

        assert_eq!(blue_white_red(&domain, 0.0, wp(100.0)), BLUE);
        assert!(approx(
            blue_white_red(&domain, 5.0, wp(100.0)),
            Vec3::new(0.5, 0.5, 1.0)
        ));
        assert_eq!(blue_white_red(&domain, 10.0, wp(100.0)), Vec3::ONE);
        assert_eq!(blue_white_red(&domain, 11.0, wp(100.0)), RED);
    }

    #[test]
    fn test_blue_white_red_white_point_at_inexact_bounds() {
        for domain in [Domain::new(1.1, 3.3), Domain::new(-7.7, 0.9)] {
            assert_eq!(blue_white_red(&domain, domain.max(), wp(100.0)), Vec3::ONE);
            assert_eq!(blue_white_red(&domain, domain.min(), wp(100.0)), BLUE);
            assert_eq!(blue_white_red(&domain, domain.max(), wp(0.0)), RED);
            assert_eq!(blue_white_red(&domain, domain.min(), wp(0.0)), BLUE);
        }
    }

    #[test]
    fn test_wide_domain_maps_in_range() {
        let domain = Domain::from_scalars(&[-3e38, 3e38]).unwrap();
        assert_eq!(rainbow(&domain, 3e38), RED);
        assert_eq!(rainbow(&domain, -3e38), BLUE);
        assert!(approx(nonlinear(&domain, 3e38), BLUE));
        assert_eq!(heatmap(&domain, 3e38), Vec3::ONE);
        assert_eq!(heatmap(&domain, -3e38), Vec3::ZERO);
        assert_eq!(blue_white_red(&domain, 0.0, wp(50.0)), Vec3::ONE);
        assert_eq!(discrete(&domain, -1.0), BLUE);
        assert_eq!(discrete(&domain, 1.0), RED);

        let high = Domain::new(2e38, 3e38);
        assert_eq!(discrete(&high, 2e38), BLUE);
        assert_eq!(discrete(&high, 3e38), RED);
    }

    #[test]
    fn test_blue_white_red_clamps_out_of_domain() {
        let domain = Domain::new(0.0, 10.0);
        assert_eq!(blue_white_red(&domain, -5.0, wp(50.0)), BLUE);
        assert_eq!(blue_white_red(&domain, 20.0, wp(50.0)), RED);
    }

    #[test]
    fn test_heatmap_bands() {
        let domain = Domain::new(0.0, 9.0);
        assert_eq!(heatmap(&domain, 0.0), Vec3::ZERO);
        assert_eq!(heatmap(&domain, 3.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(heatmap(&domain, 6.0), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(heatmap(&domain, 9.0), Vec3::ONE);
        assert!(approx(heatmap(&domain, 1.5), Vec3::new(0.5, 0.0, 0.0)));
        assert!(approx(heatmap(&domain, 4.5), Vec3::new(1.0, 0.5, 0.0)));
        assert!(approx(heatmap(&domain, 7.5), Vec3::new(1.0, 1.0, 0.5)));
    }

    #[test]
    fn test_heatmap_clamps_out_of_domain() {
        let domain = Domain::new(0.0, 9.0);
        assert_eq!(heatmap(&domain, -3.0), Vec3::ZERO);
        assert_eq!(heatmap(&domain, 12.0), Vec3::ONE);
    }

    #[test]
    fn test_discrete_threshold() {
        let domain = Domain::new(-4.0, 6.0);
        assert_eq!(discrete(&domain, -4.0), BLUE);
        assert_eq!(discrete(&domain, 1.0), BLUE);
        assert_eq!(discrete(&domain, 1.001), RED);
        assert_eq!(discrete(&domain, 6.0), RED);
    }

    #[test]
    fn test_nonlinear() {
        let domain = Domain::new(0.0, 1.0);
        assert_eq!(nonlinear(&domain, 0.0), RED);
        // 2400 * 0.25 = 600 degrees, wraps to 240: blue.
        assert!(approx(nonlinear(&domain, 0.5), BLUE));
        // 2400 degrees wraps to 240: blue.
        assert!(approx(nonlinear(&domain, 1.0), BLUE));
        assert_eq!(nonlinear(&domain, 1.5), Vec3::ZERO);
        assert_eq!(nonlinear(&domain, -0.5), Vec3::ZERO);
    }

    #[test]
    fn test_degenerate_domain_is_neutral() {
        let domain = Domain::new(5.0, 5.0);
        for policy in [
            ColorMapPolicy::Rainbow,
            ColorMapPolicy::BlueWhiteRed,
            ColorMapPolicy::Heatmap,
            ColorMapPolicy::Nonlinear,
        ] {
            assert_eq!(policy.map(&domain, 5.0, WhitePoint::default()), NEUTRAL_COLOR);
        }
        assert_eq!(
            ColorMapPolicy::Discrete.map(&domain, 5.0, WhitePoint::default()),
            BLUE
        );
    }

    #[test]
    fn test_map_dispatch() {
        let domain = Domain::new(0.0, 9.0);
        let white = WhitePoint::default();
        assert_eq!(
            ColorMapPolicy::Heatmap.map(&domain, 6.0, white),
            heatmap(&domain, 6.0)
        );
        assert_eq!(
            ColorMapPolicy::Rainbow.map(&domain, 2.0, white),
            rainbow(&domain, 2.0)
        );
        assert_eq!(
            ColorMapPolicy::BlueWhiteRed.map(&domain, 2.0, white),
            blue_white_red(&domain, 2.0, white)
        );
    }
}
