use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use super::AssetError;

/// Asset manifest describing every image, sprite sheet and animation of a game.
/// Loaded from JSON; image order defines `ImageId`s.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Image paths, loaded before the game starts.
    pub images: Vec<String>,
    /// Named sprite sheets.
    #[serde(default)]
    pub sheets: HashMap<String, SheetDescriptor>,
    /// Named frame animations.
    #[serde(default)]
    pub animations: HashMap<String, AnimationDescriptor>,
    /// Image tiled behind everything else.
    #[serde(default)]
    pub background: Option<String>,
}

/// Describes a grid of equally sized frames inside one image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetDescriptor {
    /// Path of the image, must be listed in `images`.
    pub image: String,
    pub frame_width: u32,
    pub frame_height: u32,
}

/// Describes a looping frame animation over a sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    /// Name of the sheet in `sheets`.
    pub sheet: String,
    /// Ticks each frame is held (default: 1).
    #[serde(default = "default_frame_speed")]
    pub frame_speed: u32,
    pub frames: FrameSequence,
}

/// Frame indices of an animation, either an inclusive range or an explicit list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrameSequence {
    Range { start: u32, end: u32 },
    List(Vec<u32>),
}

impl FrameSequence {
    /// Expand into the ordered list of frame indices.
    /// A reversed range (`start > end`) expands to nothing.
    pub fn to_vec(&self) -> Vec<u32> {
        match self {
            FrameSequence::Range { start, end } => (*start..=*end).collect(),
            FrameSequence::List(frames) => frames.clone(),
        }
    }
}

fn default_frame_speed() -> u32 {
    1
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        let manifest: Self = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check cross references between images, sheets and animations.
    pub fn validate(&self) -> Result<(), AssetError> {
        for (name, sheet) in &self.sheets {
            if !self.images.contains(&sheet.image) {
                return Err(AssetError::InvalidManifest(format!(
                    "sheet '{}' uses unlisted image '{}'",
                    name, sheet.image
                )));
            }
        }
        for (name, anim) in &self.animations {
            if !self.sheets.contains_key(&anim.sheet) {
                return Err(AssetError::InvalidManifest(format!(
                    "animation '{}' uses unknown sheet '{}'",
                    name, anim.sheet
                )));
            }
        }
        if let Some(bg) = &self.background {
            if !self.images.contains(bg) {
                return Err(AssetError::InvalidManifest(format!(
                    "background uses unlisted image '{}'",
                    bg
                )));
            }
        }
        Ok(())
    }
}
