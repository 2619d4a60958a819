pub mod animation;
pub mod background;

pub use animation::Animation;
pub use background::ScrollingBackground;
