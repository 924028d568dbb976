use crate::foundation::error::{ChessmotionError, ChessmotionResult};

pub use kurbo::{Point, Rect};

/// Output canvas the board is laid out on, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        // Portrait 1080p, the layout the board was designed for.
        Self {
            width: 1080,
            height: 1920,
        }
    }
}

impl Canvas {
    /// Build a canvas, rejecting zero-sized dimensions.
    pub fn new(width: u32, height: u32) -> ChessmotionResult<Self> {
        if width == 0 || height == 0 {
            return Err(ChessmotionError::validation(
                "Canvas width and height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Side length of the largest square that fits on the canvas.
    pub fn min_side(self) -> f64 {
        f64::from(self.width.min(self.height))
    }

    /// Canvas center point.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
