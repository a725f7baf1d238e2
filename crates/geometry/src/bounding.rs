use serde::{Deserialize, Serialize};

use crate::vector::Vector2;

/// Axis-aligned box stored in center form (center point + width/height).
///
/// The box holds whatever coordinate convention its producer uses
/// (normalized `[0, 1]` for DETR heads). Nothing here validates or clips the
/// values; use [`BoundingBox::scale`] and [`BoundingBox::clamp`] when mapping
/// onto an image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    center: Vector2<f32>,
    size: Vector2<f32>,
}

impl BoundingBox {
    pub const fn from_center(center: Vector2<f32>, size: Vector2<f32>) -> Self {
        Self { center, size }
    }

    /// Build from the `(cx, cy, w, h)` layout emitted by DETR box heads.
    pub const fn from_cxcywh(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self::from_center(Vector2::new(cx, cy), Vector2::new(width, height))
    }

    /// Build from top-left and bottom-right corners.
    pub fn from_corners(min: Vector2<f32>, max: Vector2<f32>) -> Self {
        let size = max - min;
        Self::from_center(min + size / 2.0, size)
    }

    pub fn center(&self) -> Vector2<f32> {
        self.center
    }

    pub fn size(&self) -> Vector2<f32> {
        self.size
    }

    /// Top-left corner.
    pub fn min(&self) -> Vector2<f32> {
        self.center - self.size / 2.0
    }

    /// Bottom-right corner.
    pub fn max(&self) -> Vector2<f32> {
        self.center + self.size / 2.0
    }

    /// Corners as `[x1, y1, x2, y2]`.
    pub fn to_xyxy(&self) -> [f32; 4] {
        let (min, max) = (self.min(), self.max());
        [min.x, min.y, max.x, max.y]
    }

    pub fn area(&self) -> f32 {
        self.size.x * self.size.y
    }

    /// Multiply center and size per axis, e.g. normalized -> pixel coordinates.
    pub fn scale(&self, factor: Vector2<f32>) -> Self {
        Self::from_center(self.center * factor, self.size * factor)
    }

    /// Clip both corners into `[min, max]`.
    pub fn clamp(&self, min: Vector2<f32>, max: Vector2<f32>) -> Self {
        Self::from_corners(self.min().clamp(min, max), self.max().clamp(min, max))
    }
}
