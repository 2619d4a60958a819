pub mod keys;

pub use keys::{InputEvent, Key, KeyStatus};
