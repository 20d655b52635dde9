//! Pointer tilt - maps a pointer position over a region to a 3D rotation
//!
//! The offset math is pure: `(pointer, rect, previous) -> offset`. Smoothing
//! between successive values lives in [`spring`], and the event wiring in
//! [`surface`].

pub mod spring;
pub mod surface;

pub use spring::{Spring, SpringState};
pub use surface::TiltSurface;

use crate::primitives::{Angle, Point, Rect};

/// Sensitivity and range of a tilt effect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltConfig {
    /// Raw pixel offset is divided by this before clamping
    pub divisor: f32,
    /// Symmetric clamp applied to each damped offset axis
    pub limit: f32,
    /// Rotation reached when an offset axis sits at `limit`
    pub max_angle: f32,
    /// CSS perspective distance in pixels
    pub perspective: f32,
}

impl TiltConfig {
    /// Large hero card: gentle, wide range
    pub const HERO: Self = Self::new(4.0, 50.0, 8.0, 1000.0);
    /// Project cards: tighter range, snappier
    pub const CARD: Self = Self::new(6.0, 30.0, 6.0, 800.0);

    #[track_caller]
    pub const fn new(divisor: f32, limit: f32, max_angle: f32, perspective: f32) -> Self {
        if !(divisor > 0.0) {
            panic!("TiltConfig divisor must be positive");
        }
        if !(limit > 0.0) {
            panic!("TiltConfig limit must be positive");
        }
        Self { divisor, limit, max_angle, perspective }
    }
}

/// Damped, clamped distance from a region's center to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub dx: f32,
    pub dy: f32,
}

impl PointerOffset {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    pub fn from_pointer(pointer: Point, region: Rect, config: &TiltConfig) -> Self {
        let center = region.center();
        let damp = |raw: f32| (raw / config.divisor).clamp(-config.limit, config.limit);
        Self {
            dx: damp(pointer.x - center.x),
            dy: damp(pointer.y - center.y),
        }
    }

    /// Offset after a pointer move.
    ///
    /// Keeps `self` when the region is missing or not laid out, or the
    /// pointer is not a finite position.
    pub fn update(self, pointer: Point, region: Option<Rect>, config: &TiltConfig) -> Self {
        match region {
            Some(rect) if rect.is_measured() && pointer.is_finite() => {
                Self::from_pointer(pointer, rect, config)
            }
            _ => self,
        }
    }

    /// Offset after the pointer leaves the region
    pub const fn leave() -> Self {
        Self::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Rotation about the horizontal (x) and vertical (y) axes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltAngles {
    pub rotate_x: Angle,
    pub rotate_y: Angle,
}

impl TiltAngles {
    pub const FLAT: Self = Self { rotate_x: Angle::ZERO, rotate_y: Angle::ZERO };

    pub fn new(rotate_x: f32, rotate_y: f32) -> Self {
        Self { rotate_x: Angle::new(rotate_x), rotate_y: Angle::new(rotate_y) }
    }

    /// Pointer below center tips the top edge away (negative rotateX); pointer
    /// right of center turns the surface right (positive rotateY).
    pub fn from_offset(offset: PointerOffset, config: &TiltConfig) -> Self {
        let range = (-config.limit, config.limit);
        Self::new(
            map_range(offset.dy, range, (config.max_angle, -config.max_angle)),
            map_range(offset.dx, range, (-config.max_angle, config.max_angle)),
        )
    }

    pub fn is_flat(&self) -> bool {
        self.rotate_x.is_neutral() && self.rotate_y.is_neutral()
    }

    /// Full CSS `transform` value
    pub fn to_css(&self, perspective: f32) -> String {
        format!(
            "perspective({perspective}px) {} {}",
            self.rotate_x.rotate_x_css(),
            self.rotate_y.rotate_y_css(),
        )
    }
}

/// Spring-driven angles trailing a target tilt, one spring per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltMotion {
    spring: Spring,
    x: SpringState,
    y: SpringState,
}

impl TiltMotion {
    /// Start from angles already on screen, at rest.
    pub fn from_rest(angles: TiltAngles, spring: Spring) -> Self {
        Self {
            spring,
            x: SpringState::at_rest(angles.rotate_x.degrees()),
            y: SpringState::at_rest(angles.rotate_y.degrees()),
        }
    }

    /// Advance both axes by `dt` seconds and return the angles to render.
    pub fn step(&mut self, target: TiltAngles, dt: f32) -> TiltAngles {
        self.x = self.spring.step(self.x, target.rotate_x.degrees(), dt);
        self.y = self.spring.step(self.y, target.rotate_y.degrees(), dt);
        TiltAngles::new(self.x.value, self.y.value)
    }

    /// Both axes sit on `target`; further frames would change nothing.
    pub fn is_settled_at(&self, target: TiltAngles) -> bool {
        self.spring.is_settled(self.x, target.rotate_x.degrees())
            && self.spring.is_settled(self.y, target.rotate_y.degrees())
    }
}

/// Linear interpolation of `value` from one range onto another.
///
/// `value` is clamped to the input range first, so the output never
/// extrapolates. Either range may be descending.
pub fn map_range(value: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    let (lo, hi) = if from.0 <= from.1 { (from.0, from.1) } else { (from.1, from.0) };
    let span = from.1 - from.0;
    if span == 0.0 {
        return to.0;
    }
    let t = (value.clamp(lo, hi) - from.0) / span;
    to.0 + t * (to.1 - to.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGION: Rect = Rect::new(100.0, 100.0, 200.0, 200.0);
    const SCENARIO: TiltConfig = TiltConfig::new(4.0, 50.0, 8.0, 1000.0);

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn pointer_above_right_of_center() {
        let offset = PointerOffset::from_pointer(Point::new(250.0, 150.0), REGION, &SCENARIO);
        assert_eq!(offset, PointerOffset { dx: 12.5, dy: -12.5 });

        let angles = TiltAngles::from_offset(offset, &SCENARIO);
        assert!(approx(angles.rotate_x.degrees(), 2.0));
        assert!(approx(angles.rotate_y.degrees(), 2.0));
    }

    #[test]
    fn far_pointer_saturates_at_limit() {
        let offset = PointerOffset::from_pointer(Point::new(1000.0, 1000.0), REGION, &SCENARIO);
        assert_eq!(offset, PointerOffset { dx: 50.0, dy: 50.0 });

        let angles = TiltAngles::from_offset(offset, &SCENARIO);
        assert!(approx(angles.rotate_x.degrees(), -8.0));
        assert!(approx(angles.rotate_y.degrees(), 8.0));
    }

    #[test]
    fn far_negative_pointer_saturates_at_negative_limit() {
        let offset = PointerOffset::from_pointer(Point::new(-5000.0, -5000.0), REGION, &SCENARIO);
        assert_eq!(offset, PointerOffset { dx: -50.0, dy: -50.0 });
    }

    #[test]
    fn center_is_zero_offset_and_flat() {
        let offset = PointerOffset::from_pointer(REGION.center(), REGION, &SCENARIO);
        assert!(offset.is_zero());
        assert!(TiltAngles::from_offset(offset, &SCENARIO).is_flat());
    }

    #[test]
    fn offsets_stay_within_limit_across_region() {
        for config in [TiltConfig::HERO, TiltConfig::CARD] {
            let mut y = REGION.y - 400.0;
            while y <= REGION.bottom() + 400.0 {
                let mut x = REGION.x - 400.0;
                while x <= REGION.x + REGION.w + 400.0 {
                    let o = PointerOffset::from_pointer(Point::new(x, y), REGION, &config);
                    assert!(o.dx.abs() <= config.limit && o.dy.abs() <= config.limit);
                    let a = TiltAngles::from_offset(o, &config);
                    assert!(a.rotate_x.degrees().abs() <= config.max_angle + 1e-4);
                    assert!(a.rotate_y.degrees().abs() <= config.max_angle + 1e-4);
                    x += 17.0;
                }
                y += 17.0;
            }
        }
    }

    #[test]
    fn same_input_same_output() {
        let p = Point::new(173.0, 288.0);
        let a = PointerOffset::ZERO.update(p, Some(REGION), &TiltConfig::CARD);
        let b = a.update(p, Some(REGION), &TiltConfig::CARD);
        assert_eq!(a, b);
    }

    #[test]
    fn missing_region_keeps_previous() {
        let prev = PointerOffset { dx: 7.0, dy: -3.0 };
        assert_eq!(prev.update(Point::new(0.0, 0.0), None, &SCENARIO), prev);
    }

    #[test]
    fn unmeasured_region_keeps_previous() {
        let prev = PointerOffset { dx: 7.0, dy: -3.0 };
        let collapsed = Rect::new(100.0, 100.0, 0.0, 0.0);
        assert_eq!(prev.update(Point::new(0.0, 0.0), Some(collapsed), &SCENARIO), prev);
    }

    #[test]
    fn non_finite_pointer_keeps_previous() {
        let prev = PointerOffset { dx: 1.0, dy: 1.0 };
        assert_eq!(prev.update(Point::new(f32::NAN, 0.0), Some(REGION), &SCENARIO), prev);
    }

    #[test]
    fn leave_always_resets() {
        let prev = PointerOffset::from_pointer(Point::new(1000.0, -1000.0), REGION, &SCENARIO);
        assert!(!prev.is_zero());
        assert!(PointerOffset::leave().is_zero());
    }

    #[test]
    fn angle_mapping_is_monotonic() {
        let mut last_y = f32::NEG_INFINITY;
        let mut last_x = f32::INFINITY;
        let mut v = -50.0;
        while v <= 50.0 {
            let a = TiltAngles::from_offset(PointerOffset { dx: v, dy: v }, &SCENARIO);
            assert!(a.rotate_y.degrees() >= last_y);
            assert!(a.rotate_x.degrees() <= last_x);
            last_y = a.rotate_y.degrees();
            last_x = a.rotate_x.degrees();
            v += 2.5;
        }
    }

    #[test]
    fn motion_settles_after_leave_in_bounded_frames() {
        let tilted = TiltAngles::from_offset(PointerOffset { dx: 50.0, dy: -50.0 }, &SCENARIO);
        let mut motion = TiltMotion::from_rest(tilted, Spring::responsive());
        let target = TiltAngles::from_offset(PointerOffset::leave(), &SCENARIO);
        assert!(!motion.is_settled_at(target));

        let mut frames = 0;
        let mut shown = tilted;
        while !motion.is_settled_at(target) {
            shown = motion.step(target, 1.0 / 60.0);
            frames += 1;
            assert!(frames < 240, "tilt never settled");
        }
        assert!(shown.is_flat());
        // settled motion is a fixed point, so the frame task can stop
        assert_eq!(motion.step(target, 1.0 / 60.0), shown);
    }

    #[test]
    fn motion_at_rest_on_target_is_settled() {
        let angles = TiltAngles::new(2.0, -3.0);
        let motion = TiltMotion::from_rest(angles, Spring::responsive());
        assert!(motion.is_settled_at(angles));
        assert!(!motion.is_settled_at(TiltAngles::FLAT));
    }

    #[test]
    fn map_range_clamps_and_handles_descending() {
        assert_eq!(map_range(0.0, (-50.0, 50.0), (8.0, -8.0)), 0.0);
        assert_eq!(map_range(25.0, (-50.0, 50.0), (8.0, -8.0)), -4.0);
        assert_eq!(map_range(500.0, (-50.0, 50.0), (-8.0, 8.0)), 8.0);
        assert_eq!(map_range(3.0, (10.0, 0.0), (0.0, 1.0)), 0.7);
        assert_eq!(map_range(3.0, (1.0, 1.0), (5.0, 9.0)), 5.0);
    }

    #[test]
    fn css_includes_perspective_and_both_axes() {
        let css = TiltAngles::new(2.0, -1.5).to_css(1000.0);
        assert_eq!(css, "perspective(1000px) rotateX(2.00deg) rotateY(-1.50deg)");
    }

    #[test]
    #[should_panic(expected = "divisor must be positive")]
    fn config_rejects_zero_divisor() {
        let _ = TiltConfig::new(0.0, 50.0, 8.0, 1000.0);
    }
}
