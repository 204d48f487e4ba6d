use iced::widget::image;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use atrium_model::AssetId;

#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Loaded(image::Handle),
    Failed,
}

impl ImageState {
    /// Whether a fetch for this asset already ran to completion.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ImageState::Loading)
    }
}

/// Decoded-image cache shared across pages.
///
/// Entries survive navigation, so revisiting a page settles its gate from
/// cache instead of re-fetching.
#[derive(Debug, Clone)]
pub struct ImageCache {
    cache: Arc<Mutex<HashMap<AssetId, ImageState>>>,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCache {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn get(&self, id: &AssetId) -> Option<ImageState> {
        self.cache.lock().unwrap().get(id).cloned()
    }

    pub fn set_loading(&self, id: AssetId) {
        self.cache.lock().unwrap().insert(id, ImageState::Loading);
    }

    pub fn set_loaded(&self, id: AssetId, handle: image::Handle) {
        self.cache
            .lock()
            .unwrap()
            .insert(id, ImageState::Loaded(handle));
    }

    pub fn set_failed(&self, id: AssetId) {
        self.cache.lock().unwrap().insert(id, ImageState::Failed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(!ImageState::Loading.is_terminal());
        assert!(ImageState::Failed.is_terminal());
        assert!(ImageState::Loaded(image::Handle::from_bytes(Vec::new())).is_terminal());
    }

    #[test]
    fn insert_and_read_back() {
        let cache = ImageCache::new();
        let id = AssetId::new("bg.jpg");

        assert!(cache.get(&id).is_none());
        cache.set_loading(id.clone());
        assert!(matches!(cache.get(&id), Some(ImageState::Loading)));
        cache.set_failed(id.clone());
        assert!(matches!(cache.get(&id), Some(ImageState::Failed)));
    }
}
