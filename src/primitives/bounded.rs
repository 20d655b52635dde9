//! Bounded - macro for range-constrained scalar types
//!
//! Values only enter through `clamped`, which saturates at the bounds.

/// Creates a bounded f32 newtype with min/max constraints.
///
/// # Example
/// ```ignore
/// bounded_f32!(ScrollProgress, 0.0, 1.0);
/// let p = ScrollProgress::clamped(1.4); // ScrollProgress(1.0)
/// ```
macro_rules! bounded_f32 {
    ($name:ident, $min:expr, $max:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f32);

        impl $name {
            pub const MIN: f32 = $min;
            pub const MAX: f32 = $max;

            /// Saturates at the bounds; NaN collapses to `MIN`.
            pub fn clamped(value: f32) -> Self {
                if value.is_nan() {
                    return Self(Self::MIN);
                }
                Self(value.clamp(Self::MIN, Self::MAX))
            }

            pub const fn value(&self) -> f32 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(Self::MIN)
            }
        }
    };
}

pub(crate) use bounded_f32;
