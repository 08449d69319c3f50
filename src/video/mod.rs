//! The video catalogue: record types, the ordered in-memory store, and its errors.
//!
//! ```ignore
//! use video_store::{VideoInput, VideoStore};
//!
//! let store = VideoStore::new();
//! let id = store.create(VideoInput::new("Intro", "first upload", "sam"))?;
//! store.update(id, VideoInput::new("Intro (v2)", "re-cut", "sam"))?;
//! assert_eq!(store.list()?.len(), 1);
//! store.delete(id)?;
//! ```

mod error;
mod model;
mod store;

pub use error::StoreError;
pub use model::{Video, VideoInput};
pub use store::VideoStore;
