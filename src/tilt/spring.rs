//! Critically damped spring for smoothing between target values
//!
//! Stepped with the closed-form solution rather than numeric integration, so
//! the frame interval does not affect stability and a spring released from
//! rest approaches its target without overshoot.

/// Position and velocity of one spring-driven value
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpringState {
    pub value: f32,
    pub velocity: f32,
}

impl SpringState {
    pub const fn at_rest(value: f32) -> Self {
        Self { value, velocity: 0.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    /// Natural angular frequency, `sqrt(stiffness / mass)` with unit mass
    omega: f32,
    /// Displacement and velocity below this snap to the target
    settle_epsilon: f32,
}

impl Spring {
    /// Tilt and scroll bar default
    pub fn responsive() -> Self {
        Self::new(150.0)
    }

    pub fn new(stiffness: f32) -> Self {
        Self { omega: stiffness.max(f32::EPSILON).sqrt(), settle_epsilon: 1e-3 }
    }

    pub fn with_settle_epsilon(mut self, epsilon: f32) -> Self {
        self.settle_epsilon = epsilon.abs();
        self
    }

    /// Advance `state` toward `target` by `dt` seconds.
    pub fn step(&self, state: SpringState, target: f32, dt: f32) -> SpringState {
        if self.is_settled(state, target) {
            return SpringState::at_rest(target);
        }
        let dt = dt.max(0.0);
        let w = self.omega;

        // x(t) = (c1 + c2 t) e^(-wt), displacement from target
        let c1 = state.value - target;
        let c2 = state.velocity + w * c1;
        let decay = (-w * dt).exp();

        let displacement = (c1 + c2 * dt) * decay;
        let velocity = (c2 - w * (c1 + c2 * dt)) * decay;

        let next = SpringState { value: target + displacement, velocity };
        if self.is_settled(next, target) {
            SpringState::at_rest(target)
        } else {
            next
        }
    }

    pub fn is_settled(&self, state: SpringState, target: f32) -> bool {
        (state.value - target).abs() < self.settle_epsilon
            && state.velocity.abs() < self.settle_epsilon
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::responsive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn converges_to_target() {
        let spring = Spring::responsive();
        let mut s = SpringState::at_rest(0.0);
        for _ in 0..120 {
            s = spring.step(s, 8.0, FRAME);
        }
        assert_eq!(s, SpringState::at_rest(8.0));
    }

    #[test]
    fn no_overshoot_from_rest() {
        let spring = Spring::responsive();
        let mut s = SpringState::at_rest(-8.0);
        let mut last = s.value;
        for _ in 0..240 {
            s = spring.step(s, 0.0, FRAME);
            assert!(s.value <= 0.0, "overshot to {}", s.value);
            assert!(s.value >= last);
            last = s.value;
        }
    }

    #[test]
    fn settled_state_is_fixed_point() {
        let spring = Spring::responsive();
        let s = SpringState::at_rest(3.0);
        assert_eq!(spring.step(s, 3.0, FRAME), s);
        assert_eq!(spring.step(spring.step(s, 3.0, FRAME), 3.0, FRAME), s);
    }

    #[test]
    fn zero_dt_does_not_move() {
        let spring = Spring::responsive();
        let s = SpringState::at_rest(1.0);
        let next = spring.step(s, 5.0, 0.0);
        assert!((next.value - 1.0).abs() < 1e-6);
    }

    #[test]
    fn large_dt_stays_stable() {
        let spring = Spring::new(400.0);
        let next = spring.step(SpringState::at_rest(10.0), 0.0, 5.0);
        assert_eq!(next, SpringState::at_rest(0.0));
    }

    #[test]
    fn coarse_epsilon_settles_sooner() {
        let fine = Spring::responsive();
        let coarse = Spring::responsive().with_settle_epsilon(0.5);
        let count = |spring: Spring| {
            let mut s = SpringState::at_rest(0.0);
            let mut frames = 0;
            while !spring.is_settled(s, 1.0) {
                s = spring.step(s, 1.0, FRAME);
                frames += 1;
            }
            frames
        };
        assert!(count(coarse) < count(fine));
    }
}
