//! Easing curves and a small retargetable tween.

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Cubic ease-out: fast start, gentle landing.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quadratic ease-out, the default curve for scrubbed timeline segments.
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Time-based transition of one scalar. Retargeting mid-flight starts the new
/// transition from the currently displayed value, so there is no jump.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    start_sec: f64,
    duration_sec: f32,
}

impl Tween {
    /// A tween resting at `value`.
    pub fn at_rest(value: f32, duration_sec: f32) -> Self {
        Self {
            from: value,
            to: value,
            start_sec: 0.0,
            duration_sec,
        }
    }

    pub fn retarget(&mut self, to: f32, now_sec: f64) {
        if to == self.to {
            return;
        }
        self.from = self.sample(now_sec);
        self.to = to;
        self.start_sec = now_sec;
    }

    pub fn sample(&self, now_sec: f64) -> f32 {
        if self.duration_sec <= 0.0 {
            return self.to;
        }
        let t = ((now_sec - self.start_sec) as f32 / self.duration_sec).clamp(0.0, 1.0);
        lerp(self.from, self.to, ease_out_cubic(t))
    }

    pub fn is_settled(&self, now_sec: f64) -> bool {
        now_sec - self.start_sec >= self.duration_sec as f64
    }
}
