use serde::Deserialize;
use serde_json::Value;

use crate::global_constants;

#[derive(Debug, Deserialize)]
struct VolumeItem {
    #[serde(rename = "volumeInfo")]
    volume_info: VolumeInfo,
}

// Only `title` and `infoLink` are strict. Optional fields stay loosely typed so a
// wrong-typed value falls back to its default instead of dropping the item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: String,
    #[serde(default)]
    authors: Option<Value>,
    #[serde(default)]
    published_date: Option<Value>,
    #[serde(default)]
    average_rating: Option<Value>,
    #[serde(default)]
    image_links: Option<Value>,
    info_link: String,
}

/// The fields of one volume, before its thumbnail has been fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeEntry {
    pub title: String,
    pub author: String,
    pub published_date: String,
    pub rating: String,
    pub website_url: String,
    pub thumbnail_url: Option<String>,
}

impl VolumeInfo {
    fn into_entry(self) -> VolumeEntry {
        let author_names: Vec<&str> = match &self.authors {
            Some(Value::Array(authors)) => authors.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        };
        let author = if author_names.is_empty() {
            global_constants::BLANK_AUTHOR.to_string()
        } else {
            author_names.join("\n")
        };

        let rating = scalar_text(self.average_rating)
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| global_constants::RATING_NOT_AVAILABLE.to_string());

        let thumbnail_url = self
            .image_links
            .and_then(|mut links| links.get_mut("thumbnail").map(Value::take))
            .and_then(|thumbnail| match thumbnail {
                Value::String(link) if !link.trim().is_empty() => Some(link),
                _ => None,
            });

        VolumeEntry {
            title: self.title,
            author,
            published_date: scalar_text(self.published_date).unwrap_or_default(),
            rating,
            website_url: self.info_link,
            thumbnail_url,
        }
    }
}

/// Strings pass through and numbers are written out; anything else has no text.
fn scalar_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Extracts every well-formed volume from a search response body.
///
/// An empty or malformed document, or one without an `items` array, yields no
/// entries. A single item missing `title` or `infoLink` is logged and skipped;
/// its neighbours are still returned in source order.
pub fn extract_volume_entries(response_body: &str) -> Vec<VolumeEntry> {
    if response_body.trim().is_empty() {
        log::warn!("[GOOGLE_BOOKS] Empty response body, no books extracted");
        return Vec::new();
    }

    let document: Value = match serde_json::from_str(response_body) {
        Ok(document) => document,
        Err(error) => {
            log::error!("[GOOGLE_BOOKS] Problem parsing the book JSON results: {}", error);
            return Vec::new();
        }
    };

    let items = match document.get("items").and_then(Value::as_array) {
        Some(items) => items,
        None => {
            log::info!("[GOOGLE_BOOKS] Response has no items array");
            return Vec::new();
        }
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match VolumeItem::deserialize(item) {
            Ok(volume) => Some(volume.volume_info.into_entry()),
            Err(error) => {
                log::warn!("[GOOGLE_BOOKS] Skipping malformed item {}: {}", index, error);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESPONSE: &str = r#"{
        "kind": "books#volumes",
        "totalItems": 2,
        "items": [
            {
                "volumeInfo": {
                    "title": "Good Omens",
                    "authors": ["Terry Pratchett", "Neil Gaiman"],
                    "publishedDate": "2006-11-28",
                    "averageRating": 4.5,
                    "imageLinks": { "thumbnail": "http://books.google.com/thumb?id=omens" },
                    "infoLink": "http://books.google.com/books?id=omens"
                }
            },
            {
                "volumeInfo": {
                    "title": "Untitled Notes",
                    "infoLink": "http://books.google.com/books?id=notes"
                }
            }
        ]
    }"#;

    #[test]
    fn test_extract_returns_one_entry_per_item_in_order() {
        let entries = extract_volume_entries(FULL_RESPONSE);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Good Omens");
        assert_eq!(entries[1].title, "Untitled Notes");
    }

    #[test]
    fn test_extract_joins_authors_with_newlines() {
        let entries = extract_volume_entries(FULL_RESPONSE);

        assert_eq!(entries[0].author, "Terry Pratchett\nNeil Gaiman");
        assert_eq!(entries[0].published_date, "2006-11-28");
        assert_eq!(entries[0].rating, "4.5");
        assert_eq!(
            entries[0].thumbnail_url.as_deref(),
            Some("http://books.google.com/thumb?id=omens")
        );
    }

    #[test]
    fn test_extract_applies_defaults_for_missing_optional_fields() {
        let entries = extract_volume_entries(FULL_RESPONSE);
        let notes = &entries[1];

        assert_eq!(notes.author, " ");
        assert_eq!(notes.published_date, "");
        assert_eq!(notes.rating, "N/A");
        assert_eq!(notes.thumbnail_url, None);
        assert_eq!(notes.website_url, "http://books.google.com/books?id=notes");
    }

    #[test]
    fn test_extract_keeps_integer_and_string_ratings_as_text() {
        let body = r#"{ "items": [
            { "volumeInfo": { "title": "A", "averageRating": 4, "infoLink": "http://a" } },
            { "volumeInfo": { "title": "B", "averageRating": "3.5", "infoLink": "http://b" } }
        ] }"#;

        let entries = extract_volume_entries(body);

        assert_eq!(entries[0].rating, "4");
        assert_eq!(entries[1].rating, "3.5");
    }

    #[test]
    fn test_extract_skips_item_missing_title_and_keeps_the_rest() {
        let body = r#"{ "items": [
            { "volumeInfo": { "title": "First", "infoLink": "http://first" } },
            { "volumeInfo": { "authors": ["Nobody"], "infoLink": "http://untitled" } },
            { "volumeInfo": { "title": "Third", "infoLink": "http://third" } }
        ] }"#;

        let entries = extract_volume_entries(body);

        let titles: Vec<&str> = entries.iter().map(|entry| entry.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Third"]);
    }

    #[test]
    fn test_extract_skips_item_missing_info_link_or_volume_info() {
        let body = r#"{ "items": [
            { "volumeInfo": { "title": "No Link" } },
            { "id": "bare" },
            { "volumeInfo": { "title": "Linked", "infoLink": "http://linked" } }
        ] }"#;

        let entries = extract_volume_entries(body);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Linked");
    }

    #[test]
    fn test_extract_treats_image_links_without_thumbnail_as_missing() {
        let body = r#"{ "items": [
            { "volumeInfo": { "title": "A", "imageLinks": { "smallThumbnail": "http://s" }, "infoLink": "http://a" } }
        ] }"#;

        let entries = extract_volume_entries(body);

        assert_eq!(entries[0].thumbnail_url, None);
    }

    #[test]
    fn test_extract_keeps_items_with_wrong_typed_optional_fields() {
        let body = r#"{ "items": [
            { "volumeInfo": { "title": "Dated", "publishedDate": 1956, "infoLink": "http://dated" } },
            { "volumeInfo": { "title": "Mixed Authors", "authors": ["X", null, 7], "infoLink": "http://mixed" } },
            { "volumeInfo": { "title": "Odd Cover", "imageLinks": { "thumbnail": 5 }, "infoLink": "http://odd" } },
            { "volumeInfo": { "title": "Flat", "authors": "Solo", "imageLinks": [], "averageRating": true, "infoLink": "http://flat" } }
        ] }"#;

        let entries = extract_volume_entries(body);

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].published_date, "1956");
        assert_eq!(entries[1].author, "X");
        assert_eq!(entries[2].thumbnail_url, None);
        assert_eq!(entries[2].website_url, "http://odd");
        assert_eq!(entries[3].author, " ");
        assert_eq!(entries[3].rating, "N/A");
        assert_eq!(entries[3].thumbnail_url, None);
    }

    #[test]
    fn test_extract_empty_items_array_yields_empty_list() {
        assert!(extract_volume_entries(r#"{ "totalItems": 0, "items": [] }"#).is_empty());
    }

    #[test]
    fn test_extract_missing_items_array_yields_empty_list() {
        assert!(extract_volume_entries(r#"{ "kind": "books#volumes", "totalItems": 0 }"#).is_empty());
    }

    #[test]
    fn test_extract_malformed_or_empty_body_yields_empty_list() {
        assert!(extract_volume_entries("").is_empty());
        assert!(extract_volume_entries("<html>502 Bad Gateway</html>").is_empty());
        assert!(extract_volume_entries(r#"{ "items": "#).is_empty());
        assert!(extract_volume_entries(r#"{ "items": 7 }"#).is_empty());
    }
}
