use serde::{Deserialize, Serialize};

/// A single catalog item. `id` is the only field used for equality checks
/// in the selection set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: u64,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_text")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_text")]
    pub artist_title: String,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_text")]
    pub date_display: String,
}

impl Artwork {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        artist_title: impl Into<String>,
        date_display: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist_title: artist_title.into(),
            date_display: date_display.into(),
        }
    }

    /// "title by creator", as shown in the selection panel
    pub fn label(&self) -> String {
        let artist =
            if self.artist_title.is_empty() { "unknown artist" } else { &self.artist_title };
        format!("{} by {}", self.title, artist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_with_artist() {
        let artwork = Artwork::new(1, "Water Lilies", "Claude Monet", "1906");
        assert_eq!(artwork.label(), "Water Lilies by Claude Monet");
    }

    #[test]
    fn test_label_without_artist() {
        let artwork = Artwork::new(2, "Untitled", "", "");
        assert_eq!(artwork.label(), "Untitled by unknown artist");
    }
}
