use std::collections::HashMap;
use crate::assets::manifest::AssetManifest;
use crate::assets::sheet::SpriteSheet;
use crate::assets::AssetError;
use crate::components::animation::Animation;

/// Identifies an image by its position in the manifest's `images` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ImageId(pub u32);

/// An image whose natural dimensions are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub id: ImageId,
    pub path: String,
    pub width: u32,
    pub height: u32,
}

/// Registry of the manifest's images and their load state.
///
/// Sheets and animations are only handed out for images that finished loading.
pub struct AssetStore {
    manifest: AssetManifest,
    ids: HashMap<String, ImageId>,
    loaded: Vec<Option<LoadedImage>>,
}

impl AssetStore {
    /// Register every manifest image as pending.
    pub fn new(manifest: AssetManifest) -> Self {
        let ids = manifest
            .images
            .iter()
            .enumerate()
            .map(|(i, path)| (path.clone(), ImageId(i as u32)))
            .collect();
        let loaded = vec![None; manifest.images.len()];
        Self {
            manifest,
            ids,
            loaded,
        }
    }

    pub fn manifest(&self) -> &AssetManifest {
        &self.manifest
    }

    /// Record the natural size of a finished image.
    pub fn mark_loaded(&mut self, id: ImageId, width: u32, height: u32) -> Result<(), AssetError> {
        let path = self
            .manifest
            .images
            .get(id.0 as usize)
            .ok_or_else(|| AssetError::NotFound(format!("image #{}", id.0)))?
            .clone();
        log::debug!("image loaded: {} ({}x{})", path, width, height);
        self.loaded[id.0 as usize] = Some(LoadedImage {
            id,
            path,
            width,
            height,
        });
        Ok(())
    }

    /// Number of manifest images.
    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }

    /// Number of images that finished loading.
    pub fn loaded_count(&self) -> usize {
        self.loaded.iter().filter(|img| img.is_some()).count()
    }

    /// True once every manifest image has loaded.
    pub fn is_ready(&self) -> bool {
        self.loaded.iter().all(Option::is_some)
    }

    /// Id assigned to an image path.
    pub fn id(&self, path: &str) -> Option<ImageId> {
        self.ids.get(path).copied()
    }

    /// Look up a loaded image by path.
    pub fn get(&self, path: &str) -> Result<&LoadedImage, AssetError> {
        let id = self
            .id(path)
            .ok_or_else(|| AssetError::NotFound(path.to_string()))?;
        self.loaded[id.0 as usize]
            .as_ref()
            .ok_or_else(|| AssetError::NotLoaded(path.to_string()))
    }

    /// Build a named sprite sheet from the manifest.
    pub fn sprite_sheet(&self, name: &str) -> Result<SpriteSheet, AssetError> {
        let desc = self
            .manifest
            .sheets
            .get(name)
            .ok_or_else(|| AssetError::NotFound(format!("sheet '{}'", name)))?;
        let image = self.get(&desc.image)?;
        SpriteSheet::new(image, desc.frame_width, desc.frame_height)
    }

    /// Build a named animation (and its sheet) from the manifest.
    pub fn animation(&self, name: &str) -> Result<Animation, AssetError> {
        let desc = self
            .manifest
            .animations
            .get(name)
            .ok_or_else(|| AssetError::NotFound(format!("animation '{}'", name)))?;
        let sheet = self.sprite_sheet(&desc.sheet)?;
        Animation::new(sheet, desc.frame_speed, desc.frames.to_vec()).map_err(|err| match err {
            AssetError::InvalidAnimation { reason, .. } => AssetError::InvalidAnimation {
                name: name.to_string(),
                reason,
            },
            other => other,
        })
    }

    /// The loaded background image, if the manifest names one.
    pub fn background(&self) -> Result<Option<&LoadedImage>, AssetError> {
        match &self.manifest.background {
            Some(path) => self.get(path).map(Some),
            None => Ok(None),
        }
    }
}
