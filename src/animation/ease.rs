/// Easing functions used to map normalized segment progress.
///
/// Every curve is a polynomial of degree 2 or 3, applied at the start of the segment (`in`),
/// at its end (`out`), or mirrored around its midpoint (`in_out`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant speed.
    #[default]
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
}

impl Ease {
    /// Apply this easing function to progress `t`, clamped into `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => accelerate(t, 2),
            Self::OutQuad => decelerate(t, 2),
            Self::InOutQuad => mirrored(t, 2),
            Self::InCubic => accelerate(t, 3),
            Self::OutCubic => decelerate(t, 3),
            Self::InOutCubic => mirrored(t, 3),
        }
    }
}

fn accelerate(t: f64, degree: i32) -> f64 {
    t.powi(degree)
}

fn decelerate(t: f64, degree: i32) -> f64 {
    1.0 - accelerate(1.0 - t, degree)
}

// Accelerate over the first half, decelerate over the second.
fn mirrored(t: f64, degree: i32) -> f64 {
    if t < 0.5 {
        accelerate(2.0 * t, degree) / 2.0
    } else {
        1.0 - accelerate(2.0 - 2.0 * t, degree) / 2.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
