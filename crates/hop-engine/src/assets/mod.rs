pub mod manifest;
pub mod registry;
pub mod sheet;

pub use manifest::{AssetManifest, AnimationDescriptor, FrameSequence, SheetDescriptor};
pub use registry::{AssetStore, ImageId, LoadedImage};
pub use sheet::SpriteSheet;

/// Everything that can go wrong between reading the manifest and the first frame.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Asset not loaded yet: {0}")]
    NotLoaded(String),

    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Invalid sprite sheet {name}: {reason}")]
    InvalidSheet { name: String, reason: String },

    #[error("Invalid animation {name}: {reason}")]
    InvalidAnimation { name: String, reason: String },
}
