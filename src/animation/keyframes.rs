use crate::{
    animation::ease::Ease,
    foundation::core::Point,
    foundation::error::{ChessmotionError, ChessmotionResult},
};

/// Interpolation contract for keyframed value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

/// One keyframe.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    /// Absolute time in seconds.
    pub time: f64,
    /// Value at `time`.
    pub value: T,
    /// Easing applied toward the next keyframe.
    pub ease: Ease,
}

/// Interpolation strategy between keyframes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpMode {
    /// Hold the previous key value until the next keyframe.
    Hold,
    /// Interpolate between keyframes using [`Ease`].
    Linear,
}

/// Keyframed value with an optional fallback.
///
/// Before the first key the first value holds; after the last key the last value holds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    /// Keyframes sorted by `time`.
    pub keys: Vec<Keyframe<T>>,
    /// Interpolation mode between adjacent keyframes.
    pub mode: InterpMode,
    /// Value used when `keys` is empty.
    pub default: Option<T>,
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    /// A value that never changes.
    pub fn constant(value: T) -> Self {
        Self {
            keys: Vec::new(),
            mode: InterpMode::Linear,
            default: Some(value),
        }
    }

    /// Append a key. Keys pushed out of order are rejected by [`Keyframes::validate`].
    pub fn push(&mut self, time: f64, value: T, ease: Ease) {
        self.keys.push(Keyframe { time, value, ease });
    }

    /// Validate keyframe ordering and default/fallback requirements.
    pub fn validate(&self) -> ChessmotionResult<()> {
        if self.keys.is_empty() && self.default.is_none() {
            return Err(ChessmotionError::validation(
                "Keyframes must have at least one key or a default value",
            ));
        }
        if self.keys.iter().any(|k| !k.time.is_finite()) {
            return Err(ChessmotionError::validation(
                "Keyframes key times must be finite",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].time <= w[1].time) {
            return Err(ChessmotionError::validation(
                "Keyframes keys must be sorted by time",
            ));
        }
        Ok(())
    }

    /// Sample the value at time `t`.
    pub fn sample(&self, t: f64) -> ChessmotionResult<T> {
        if self.keys.is_empty() {
            return self.default.clone().ok_or_else(|| {
                ChessmotionError::validation("Keyframes has no keys and no default")
            });
        }

        let idx = self.keys.partition_point(|k| k.time <= t);
        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.time - a.time;
        if span <= 0.0 {
            return Ok(a.value.clone());
        }

        let te = a.ease.apply((t - a.time) / span);
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, te)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
