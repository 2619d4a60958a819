//! Tiled terrain that scrolls horizontally behind the scene.

use crate::assets::registry::{ImageId, LoadedImage};
use crate::renderer::buffer::RenderBuffer;
use crate::renderer::command::DrawCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollingBackground {
    image: ImageId,
    /// Width of one tile; the offset wraps at this value.
    tile_width: u32,
    /// Pixels moved per tick. Zero keeps the pattern still.
    speed: u32,
    offset: u32,
}

impl ScrollingBackground {
    pub fn new(image: &LoadedImage, speed: u32) -> Self {
        Self {
            image: image.id,
            tile_width: image.width.max(1),
            speed,
            offset: 0,
        }
    }

    pub fn update(&mut self) {
        let offset = (u64::from(self.offset) + u64::from(self.speed)) % u64::from(self.tile_width);
        self.offset = offset as u32;
    }

    /// Fill a `width` x `height` surface with the pattern.
    pub fn draw(&self, buffer: &mut RenderBuffer, width: u32, height: u32) {
        buffer.push(DrawCommand::FillPattern {
            image: self.image,
            offset_x: self.offset as i32,
            width,
            height,
        });
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }
}
