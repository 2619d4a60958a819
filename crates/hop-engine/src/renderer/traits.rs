//! Renderer contract.
//!
//! The engine never touches a drawing API directly. Games push `DrawCommand`s
//! into a `RenderBuffer`; a platform backend (Canvas 2D in `hop-web`) replays
//! them once per frame.

use super::buffer::RenderBuffer;

pub trait Renderer {
    /// Backend identifier (e.g. "canvas2d").
    fn backend(&self) -> &'static str;

    /// Surface size in logical pixels.
    fn size(&self) -> (u32, u32);

    /// Replay one frame of commands onto the surface.
    fn draw(&mut self, buffer: &RenderBuffer);
}
