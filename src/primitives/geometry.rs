//! Geometry - pointer positions and element bounds
//!
//! Everything is in client (viewport) pixels, the coordinate space shared by
//! mouse events and `getBoundingClientRect`.

/// Pointer position in client pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned bounding box: left, top, width, height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Laid out: finite and with non-zero area.
    ///
    /// A detached or `display: none` element reports an all-zero rect.
    pub fn is_measured(&self) -> bool {
        [self.x, self.y, self.w, self.h].iter().all(|v| v.is_finite())
            && self.w > 0.0
            && self.h > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_center() {
        let r = Rect::new(100.0, 100.0, 200.0, 200.0);
        assert_eq!(r.center(), Point::new(200.0, 200.0));
        assert_eq!(r.bottom(), 300.0);
    }

    #[test]
    fn zero_area_is_unmeasured() {
        assert!(!Rect::default().is_measured());
        assert!(!Rect::new(10.0, 10.0, 0.0, 40.0).is_measured());
        assert!(Rect::new(-20.0, -20.0, 1.0, 1.0).is_measured());
    }

    #[test]
    fn non_finite_is_unmeasured() {
        assert!(!Rect::new(f32::NAN, 0.0, 10.0, 10.0).is_measured());
        assert!(!Rect::new(0.0, 0.0, f32::INFINITY, 10.0).is_measured());
    }

    #[test]
    fn point_finiteness() {
        assert!(Point::new(0.0, 0.0).is_finite());
        assert!(!Point::new(f32::NAN, 1.0).is_finite());
    }
}
