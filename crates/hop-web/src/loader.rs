//! Browser image loading.
//!
//! Every manifest image is requested at once; the ready callback fires exactly
//! once, after the last image finishes or on the first failure.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;
use hop_engine::{AssetError, AssetManifest, AssetStore, ImageId};

/// Images ready for drawing, plus the store describing their sizes.
pub struct LoadedImages {
    pub store: AssetStore,
    /// DOM elements indexed by `ImageId`.
    pub elements: Vec<HtmlImageElement>,
}

type ReadyCallback = Box<dyn FnOnce(Result<LoadedImages, AssetError>)>;

struct PendingLoad {
    store: AssetStore,
    elements: Vec<HtmlImageElement>,
    on_ready: Option<ReadyCallback>,
}

impl PendingLoad {
    fn finish(&mut self, result: Result<(), AssetError>) {
        let Some(on_ready) = self.on_ready.take() else {
            return;
        };
        match result {
            Ok(()) => {
                let store = std::mem::replace(&mut self.store, AssetStore::new(AssetManifest::default()));
                let elements = std::mem::take(&mut self.elements);
                log::info!("assets: {} images ready", elements.len());
                on_ready(Ok(LoadedImages { store, elements }));
            }
            Err(err) => {
                log::error!("assets: {}", err);
                on_ready(Err(err));
            }
        }
    }
}

/// Start loading every image of `manifest`.
///
/// Returns an error only if the DOM refuses to create an image element; load
/// failures are reported through `on_ready`.
pub fn load_images(
    manifest: AssetManifest,
    on_ready: impl FnOnce(Result<LoadedImages, AssetError>) + 'static,
) -> Result<(), JsValue> {
    let paths = manifest.images.clone();
    let state = Rc::new(RefCell::new(PendingLoad {
        store: AssetStore::new(manifest),
        elements: Vec::with_capacity(paths.len()),
        on_ready: Some(Box::new(on_ready)),
    }));

    if paths.is_empty() {
        state.borrow_mut().finish(Ok(()));
        return Ok(());
    }

    for (i, path) in paths.into_iter().enumerate() {
        let id = ImageId(i as u32);
        let image = HtmlImageElement::new()?;

        let onload = {
            let state = state.clone();
            let image = image.clone();
            let path = path.clone();
            Closure::<dyn FnMut()>::new(move || {
                let mut pending = state.borrow_mut();
                if let Err(err) = pending
                    .store
                    .mark_loaded(id, image.natural_width(), image.natural_height())
                {
                    pending.finish(Err(err));
                    return;
                }
                log::debug!("assets: loaded {}", path);
                if pending.store.is_ready() {
                    pending.finish(Ok(()));
                }
            })
        };

        let onerror = {
            let state = state.clone();
            let path = path.clone();
            Closure::<dyn FnMut()>::new(move || {
                state
                    .borrow_mut()
                    .finish(Err(AssetError::LoadFailed(path.clone())));
            })
        };

        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        // Handlers live as long as the page; each fires at most once.
        onload.forget();
        onerror.forget();

        state.borrow_mut().elements.push(image.clone());
        image.set_src(&path);
    }

    Ok(())
}
