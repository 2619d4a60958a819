use super::registry::{ImageId, LoadedImage};
use super::AssetError;
use crate::renderer::command::Rect;

/// A loaded image cut into a grid of fixed-size frames.
///
/// Only constructible from a `LoadedImage`, so the frame grid is always known
/// before anything can be drawn from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheet {
    image: ImageId,
    frame_width: u32,
    frame_height: u32,
    frames_per_row: u32,
}

impl SpriteSheet {
    pub fn new(image: &LoadedImage, frame_width: u32, frame_height: u32) -> Result<Self, AssetError> {
        let invalid = |reason: String| AssetError::InvalidSheet {
            name: image.path.clone(),
            reason,
        };
        if frame_width == 0 || frame_height == 0 {
            return Err(invalid(format!(
                "frame size {}x{} must be positive",
                frame_width, frame_height
            )));
        }
        if i32::try_from(frame_width).is_err() || i32::try_from(frame_height).is_err() {
            return Err(invalid(format!(
                "frame size {}x{} exceeds the drawable range",
                frame_width, frame_height
            )));
        }
        let frames_per_row = image.width / frame_width;
        if frames_per_row == 0 {
            return Err(invalid(format!(
                "image width {} is smaller than one frame ({})",
                image.width, frame_width
            )));
        }
        Ok(Self {
            image: image.id,
            frame_width,
            frame_height,
            frames_per_row,
        })
    }

    pub fn image(&self) -> ImageId {
        self.image
    }

    pub fn frame_width(&self) -> u32 {
        self.frame_width
    }

    pub fn frame_height(&self) -> u32 {
        self.frame_height
    }

    pub fn frames_per_row(&self) -> u32 {
        self.frames_per_row
    }

    /// Source rectangle of frame `index`, counted row-major from the top-left.
    ///
    /// `None` when the frame's origin lies outside the `i32` pixel range.
    pub fn frame_rect(&self, index: u32) -> Option<Rect> {
        let row = index / self.frames_per_row;
        let col = index % self.frames_per_row;
        let x = col.checked_mul(self.frame_width)?;
        let y = row.checked_mul(self.frame_height)?;
        Some(Rect::new(
            i32::try_from(x).ok()?,
            i32::try_from(y).ok()?,
            i32::try_from(self.frame_width).ok()?,
            i32::try_from(self.frame_height).ok()?,
        ))
    }
}
