pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, RenderContext};
pub use assets::{AssetError, AssetManifest, AssetStore, ImageId, LoadedImage, SpriteSheet};
pub use components::animation::Animation;
pub use components::background::ScrollingBackground;
pub use core::vector::Vector;
pub use input::keys::{InputEvent, Key, KeyStatus};
pub use renderer::buffer::RenderBuffer;
pub use renderer::command::{DrawCommand, Rect};
pub use renderer::traits::Renderer;
