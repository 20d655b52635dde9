//! Angle - rotation about a single axis with CSS transform output

/// Angle in degrees, normalized to [-180, 180]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f32);

impl Angle {
    pub const ZERO: Self = Self(0.0);

    /// Below this the angle renders as flat
    const NEUTRAL_EPSILON: f32 = 0.005;

    pub fn new(degrees: f32) -> Self {
        Self(Self::normalize(degrees))
    }

    pub const fn degrees(&self) -> f32 {
        self.0
    }

    fn normalize(degrees: f32) -> f32 {
        let mut d = degrees % 360.0;
        if d > 180.0 {
            d -= 360.0;
        } else if d < -180.0 {
            d += 360.0;
        }
        d
    }

    pub fn is_neutral(&self) -> bool {
        self.0.abs() < Self::NEUTRAL_EPSILON
    }

    /// `rotateX(..)` term for a CSS transform list
    pub fn rotate_x_css(&self) -> String {
        format!("rotateX({:.2}deg)", self.css_degrees())
    }

    /// `rotateY(..)` term for a CSS transform list
    pub fn rotate_y_css(&self) -> String {
        format!("rotateY({:.2}deg)", self.css_degrees())
    }

    // Avoids "-0.00deg" in the output.
    fn css_degrees(&self) -> f32 {
        if self.is_neutral() { 0.0 } else { self.0 }
    }
}
