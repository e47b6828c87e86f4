use crate::catalog::CatalogError;
use crate::models::{ArtworkPage, ArtworksResponse};

/// Parse the body of an `/artworks` listing into an [`ArtworkPage`]
///
/// # Errors
///
/// Returns [`CatalogError::Decode`] if the body is not JSON or is missing
/// `data` or `pagination.total`.
pub fn parse_page_response(body: &str) -> Result<ArtworkPage, CatalogError> {
    let response: ArtworksResponse = serde_json::from_str(body)?;
    Ok(response.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_record_page() {
        let body = r#"{"data":[{"id":1,"title":"A","artist_title":"X","date_display":"2020"}],"pagination":{"total":12}}"#;

        let page = parse_page_response(body).unwrap();
        assert_eq!(page.total, 12);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.records[0].id, 1);
        assert_eq!(page.records[0].title, "A");
        assert_eq!(page.records[0].artist_title, "X");
        assert_eq!(page.records[0].date_display, "2020");
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let body = r#"{
            "pagination": {"total": 3, "limit": 5, "offset": 0, "total_pages": 1, "current_page": 1},
            "data": [{"id": 9, "title": "T", "artist_title": "A", "date_display": "D", "image_id": "abc"}],
            "info": {"license_text": "..."},
            "config": {"iiif_url": "https://www.artic.edu/iiif/2"}
        }"#;

        let page = parse_page_response(body).unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.records[0].id, 9);
    }

    #[test]
    fn test_parse_empty_data() {
        let body = r#"{"data":[],"pagination":{"total":0}}"#;

        let page = parse_page_response(body).unwrap();
        assert!(page.records.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_parse_missing_pagination() {
        let body = r#"{"data":[]}"#;
        let err = parse_page_response(body).unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn test_parse_not_json() {
        let err = parse_page_response("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn test_parse_error_body() {
        // Shape the API uses for errors (e.g. page beyond its result window)
        let body = r#"{"status":403,"error":"Invalid number of results","detail":"..."}"#;
        assert!(parse_page_response(body).is_err());
    }
}
