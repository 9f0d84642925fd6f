/// Easing curves used by camera segments and caption fades.
///
/// Names follow the `powerN` convention: `Power1` is quadratic and `Power2`
/// is cubic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power1InOut,
    Power2InOut,
    Power2In,
    Power2Out,
}

impl Ease {
    /// Map a normalized time `t` to eased progress. `t` is clamped to [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t).powi(2)
                }
            }
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - 4.0 * (1.0 - t).powi(3)
                }
            }
            Ease::Power2In => t * t * t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Single scalar tween driven by elapsed seconds.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub ease: Ease,
    elapsed: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration,
            ease,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds and return the overshoot past the end (0 while running).
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed += dt.max(0.0);
        (self.elapsed - self.duration).max(0.0)
    }

    pub fn value(&self) -> f32 {
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        };
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
