use serde::{Deserialize, Serialize};

/// A meme template as served by the Imgflip API.
///
/// Only ever handed to callers after the surrounding payload deserialized
/// and `check_fields` passed, so consumers never see a partial record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MemeRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "url")]
    pub image_url: String,
    pub width: u32,
    pub height: u32,
    pub box_count: u32,
}

impl MemeRecord {
    /// Field-level checks the wire format itself cannot express.
    pub(crate) fn check_fields(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("meme record with empty id".to_string());
        }
        if self.name.is_empty() {
            return Err(format!("meme record {} has an empty name", self.id));
        }
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "meme record {} has zero dimensions ({}x{})",
                self.id, self.width, self.height
            ));
        }
        Ok(())
    }
}

/// Outer envelope of the `get_memes` response: `{"data": {"memes": [...]}}`.
#[derive(Deserialize, Debug)]
pub(crate) struct MemeListResponse {
    pub(crate) data: MemeData,
}

#[derive(Deserialize, Debug)]
pub(crate) struct MemeData {
    pub(crate) memes: Vec<MemeRecord>,
}
