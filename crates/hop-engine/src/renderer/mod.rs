pub mod buffer;
pub mod command;
pub mod traits;

pub use buffer::RenderBuffer;
pub use command::{DrawCommand, Rect};
pub use traits::Renderer;
