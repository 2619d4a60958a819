use glam::IVec2;
use crate::assets::registry::ImageId;

/// Axis-aligned rectangle in integer pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// One drawing operation on the 2D surface.
/// Commands are replayed in push order by a `Renderer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    /// Clear the surface area `(0, 0, width, height)`.
    Clear { width: u32, height: u32 },
    /// Fill `(0, 0, width, height)` with the image repeated as a pattern,
    /// shifted left by `offset_x` pixels.
    FillPattern {
        image: ImageId,
        offset_x: i32,
        width: u32,
        height: u32,
    },
    /// Copy `src` out of the image to `dst` at native size.
    Blit { image: ImageId, src: Rect, dst: IVec2 },
}
