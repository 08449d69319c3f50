use serde::{Deserialize, Serialize};

/// A stored video record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub author: String,
}

/// Client-supplied fields for create and update.
///
/// An `id` in the payload is accepted but never trusted: create assigns a
/// fresh one and update takes it from the path. Missing fields decode as
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub description: String,
    pub author: String,
}

impl VideoInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        VideoInput {
            id: None,
            title: title.into(),
            description: description.into(),
            author: author.into(),
        }
    }

    pub(crate) fn into_video(self, id: u64) -> Video {
        Video {
            id,
            title: self.title,
            description: self.description,
            author: self.author,
        }
    }
}
