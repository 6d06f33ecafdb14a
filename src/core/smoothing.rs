use std::ops::{Add, Mul, Sub};

/// Exponential smoothing toward a moving target.
///
/// Each [`step`](Smoothed::step) covers a fixed fraction `damping` of the
/// remaining distance. With `damping` in `(0, 1]` the value approaches the
/// target monotonically and never passes it.
#[derive(Clone, Copy, Debug)]
pub struct Smoothed<T> {
    current: T,
    damping: f32,
}

impl<T> Smoothed<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    pub fn new(initial: T, damping: f32) -> Self {
        Self {
            current: initial,
            damping: clamp_damping(damping),
        }
    }

    #[inline]
    pub fn step(&mut self, target: T) -> T {
        self.current = self.current + (target - self.current) * self.damping;
        self.current
    }

    #[inline]
    pub fn current(&self) -> T {
        self.current
    }

    #[inline]
    pub fn damping(&self) -> f32 {
        self.damping
    }
}

fn clamp_damping(k: f32) -> f32 {
    if k.is_nan() || k <= 0.0 {
        f32::EPSILON
    } else {
        k.min(1.0)
    }
}
