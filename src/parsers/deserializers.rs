use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Custom deserializer for free-form text fields that the API may send as
/// `null`, a string, or (for `date_display` on some records) a number
pub fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(Error::custom("text field must be a string, number or null")),
    }
}

#[cfg(test)]
mod tests {
    use crate::models::Artwork;

    #[test]
    fn test_artwork_all_fields() {
        let json = r#"{
            "id": 27992,
            "title": "A Sunday on La Grande Jatte — 1884",
            "artist_title": "Georges Seurat",
            "date_display": "1884–86"
        }"#;

        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.id, 27992);
        assert_eq!(artwork.artist_title, "Georges Seurat");
        assert_eq!(artwork.date_display, "1884–86");
    }

    #[test]
    fn test_artwork_null_fields_become_empty() {
        let json = r#"{"id": 5, "title": "Fragment", "artist_title": null, "date_display": null}"#;

        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.title, "Fragment");
        assert!(artwork.artist_title.is_empty());
        assert!(artwork.date_display.is_empty());
    }

    #[test]
    fn test_artwork_missing_fields_become_empty() {
        let json = r#"{"id": 6}"#;

        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.id, 6);
        assert!(artwork.title.is_empty());
    }

    #[test]
    fn test_artwork_numeric_date() {
        let json = r#"{"id": 7, "title": "Vase", "artist_title": "", "date_display": 1750}"#;

        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.date_display, "1750");
    }

    #[test]
    fn test_artwork_missing_id_fails() {
        let json = r#"{"title": "No key"}"#;
        assert!(serde_json::from_str::<Artwork>(json).is_err());
    }

    #[test]
    fn test_artwork_object_title_fails() {
        let json = r#"{"id": 8, "title": {"en": "nested"}}"#;
        assert!(serde_json::from_str::<Artwork>(json).is_err());
    }
}
