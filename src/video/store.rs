use std::sync::RwLock;

use tracing::debug;

use super::error::StoreError;
use super::model::{Video, VideoInput};
use crate::id::IdGenerator;

/// Ordered in-memory video collection.
///
/// Records keep insertion order. Lookups by id are linear scans. All
/// mutations take the write lock, and ids are drawn while it is held so the
/// sequence order always matches id order.
pub struct VideoStore {
    videos: RwLock<Vec<Video>>,
    ids: IdGenerator,
}

impl Default for VideoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoStore {
    pub fn new() -> Self {
        VideoStore {
            videos: RwLock::new(Vec::new()),
            ids: IdGenerator::new(),
        }
    }

    /// Every record, in insertion order.
    pub fn list(&self) -> Result<Vec<Video>, StoreError> {
        let videos = self
            .videos
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(videos.clone())
    }

    pub fn get(&self, id: u64) -> Result<Option<Video>, StoreError> {
        let videos = self
            .videos
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(videos.iter().find(|video| video.id == id).cloned())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let videos = self
            .videos
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(videos.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Append a new record and return its freshly assigned id.
    ///
    /// Any id carried by `input` is ignored.
    pub fn create(&self, input: VideoInput) -> Result<u64, StoreError> {
        let mut videos = self
            .videos
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        let id = self.ids.next_id();
        videos.push(input.into_video(id));
        debug!(id, total = videos.len(), "video created");
        Ok(id)
    }

    /// Replace the fields of the first record with `id`, keeping its position.
    pub fn update(&self, id: u64, input: VideoInput) -> Result<(), StoreError> {
        let mut videos = self
            .videos
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        match videos.iter_mut().find(|video| video.id == id) {
            Some(slot) => {
                *slot = input.into_video(id);
                debug!(id, "video updated");
                Ok(())
            }
            None => {
                debug!(id, "update target missing");
                Err(StoreError::NotFound(id))
            }
        }
    }

    /// Remove the first record with `id`, shifting later records down.
    pub fn delete(&self, id: u64) -> Result<Video, StoreError> {
        let mut videos = self
            .videos
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        let index = videos.iter().position(|video| video.id == id);
        match index.and_then(|index| remove_at(&mut videos, index)) {
            Some(video) => {
                debug!(id, total = videos.len(), "video deleted");
                Ok(video)
            }
            None => {
                debug!(id, "delete target missing");
                Err(StoreError::NotFound(id))
            }
        }
    }
}

/// Order-preserving removal by position.
///
/// An out-of-range index leaves the sequence untouched and yields `None`
/// rather than panicking.
fn remove_at(videos: &mut Vec<Video>, index: usize) -> Option<Video> {
    if index >= videos.len() {
        return None;
    }
    Some(videos.remove(index))
}
