//! Frame animation over a sprite sheet.
//!
//! An animation holds each frame of its sequence for `frame_speed` ticks and
//! loops forever. There is no "play once" mode and no paused state.

use glam::IVec2;
use crate::assets::sheet::SpriteSheet;
use crate::assets::AssetError;
use crate::renderer::buffer::RenderBuffer;
use crate::renderer::command::DrawCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    sheet: SpriteSheet,
    /// Frame indices into the sheet, never empty.
    sequence: Vec<u32>,
    /// Ticks per frame, at least 1.
    frame_speed: u32,
    /// Index into `sequence`.
    current_frame: usize,
    /// Ticks since the last frame change, in `[0, frame_speed)`.
    counter: u32,
}

impl Animation {
    pub fn new(sheet: SpriteSheet, frame_speed: u32, sequence: Vec<u32>) -> Result<Self, AssetError> {
        let invalid = |reason: &str| AssetError::InvalidAnimation {
            name: "unnamed".to_string(),
            reason: reason.to_string(),
        };
        if sequence.is_empty() {
            return Err(invalid("frame sequence is empty"));
        }
        if frame_speed == 0 {
            return Err(invalid("frame speed must be at least 1"));
        }
        if let Some(frame) = sequence.iter().find(|&&f| sheet.frame_rect(f).is_none()) {
            return Err(invalid(&format!("frame {} is outside the sheet's pixel range", frame)));
        }
        Ok(Self {
            sheet,
            sequence,
            frame_speed,
            current_frame: 0,
            counter: 0,
        })
    }

    /// Frames `start..=end` of the sheet, in order.
    pub fn from_range(sheet: SpriteSheet, frame_speed: u32, start: u32, end: u32) -> Result<Self, AssetError> {
        Self::new(sheet, frame_speed, (start..=end).collect())
    }

    /// Advance one tick.
    pub fn update(&mut self) {
        if self.counter == self.frame_speed - 1 {
            self.current_frame = (self.current_frame + 1) % self.sequence.len();
        }
        self.counter = (self.counter + 1) % self.frame_speed;
    }

    /// Queue the current frame at `pos` (top-left, native size).
    pub fn draw(&self, buffer: &mut RenderBuffer, pos: IVec2) {
        // Every sequence frame was checked in `new`.
        if let Some(src) = self.sheet.frame_rect(self.frame()) {
            buffer.push(DrawCommand::Blit {
                image: self.sheet.image(),
                src,
                dst: pos,
            });
        }
    }

    /// Index into the sequence.
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Sheet frame currently shown.
    pub fn frame(&self) -> u32 {
        self.sequence[self.current_frame]
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn frame_speed(&self) -> u32 {
        self.frame_speed
    }

    pub fn sequence(&self) -> &[u32] {
        &self.sequence
    }

    pub fn sheet(&self) -> &SpriteSheet {
        &self.sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::registry::{ImageId, LoadedImage};
    use crate::renderer::command::Rect;

    fn sheet() -> SpriteSheet {
        let image = LoadedImage {
            id: ImageId(0),
            path: "run.png".into(),
            width: 432,
            height: 380,
        };
        SpriteSheet::new(&image, 144, 190).unwrap()
    }

    #[test]
    fn frame_advances_every_frame_speed_ticks() {
        let mut anim = Animation::new(sheet(), 4, vec![0, 1, 2]).unwrap();
        let mut changes = Vec::new();
        let mut last = anim.current_frame();
        for tick in 1..=12 {
            anim.update();
            assert!(anim.current_frame() < 3);
            if anim.current_frame() != last {
                changes.push((tick, anim.current_frame()));
                last = anim.current_frame();
            }
        }
        assert_eq!(changes, vec![(4, 1), (8, 2), (12, 0)]);
    }

    #[test]
    fn loops_indefinitely() {
        let mut anim = Animation::new(sheet(), 1, vec![5, 6]).unwrap();
        let frames: Vec<u32> = (0..7)
            .map(|_| {
                anim.update();
                anim.frame()
            })
            .collect();
        assert_eq!(frames, vec![6, 5, 6, 5, 6, 5, 6]);
    }

    #[test]
    fn counter_stays_below_frame_speed() {
        let mut anim = Animation::new(sheet(), 3, vec![0]).unwrap();
        for _ in 0..10 {
            anim.update();
            assert!(anim.counter() < 3);
            assert_eq!(anim.current_frame(), 0);
        }
    }

    #[test]
    fn from_range_is_inclusive() {
        let anim = Animation::from_range(sheet(), 10, 0, 5).unwrap();
        assert_eq!(anim.sequence(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn rejects_empty_sequence_and_zero_speed() {
        assert!(Animation::new(sheet(), 1, vec![]).is_err());
        assert!(Animation::new(sheet(), 0, vec![0]).is_err());
    }

    #[test]
    fn rejects_frames_past_the_pixel_range() {
        let err = Animation::new(sheet(), 1, vec![0, 3_000_000_000]).unwrap_err();
        assert!(matches!(err, AssetError::InvalidAnimation { .. }));
    }

    #[test]
    fn draw_blits_current_frame_at_native_size() {
        let mut anim = Animation::new(sheet(), 1, vec![0, 4]).unwrap();
        anim.update();
        let mut buffer = RenderBuffer::new();
        anim.draw(&mut buffer, IVec2::new(60, 15));
        assert_eq!(
            buffer.commands(),
            &[DrawCommand::Blit {
                image: ImageId(0),
                src: Rect::new(144, 190, 144, 190),
                dst: IVec2::new(60, 15),
            }]
        );
    }
}
