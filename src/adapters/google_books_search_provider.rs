use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use crate::adapters::google_books_response::{extract_volume_entries, VolumeEntry};
use crate::core::interfaces::adapters::{BookSearchProvider, HttpClient};
use crate::core::models::{Book, BookThumbnail};

pub struct GoogleBooksSearchProvider {
    http_client: Arc<dyn HttpClient>,
    search_endpoint: String,
    max_results: u32,
    thumbnail_fetch_concurrency: usize,
}

impl GoogleBooksSearchProvider {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        search_endpoint: String,
        max_results: u32,
        thumbnail_fetch_concurrency: usize,
    ) -> Self {
        Self {
            http_client,
            search_endpoint,
            max_results,
            thumbnail_fetch_concurrency: thumbnail_fetch_concurrency.max(1),
        }
    }

    fn construct_search_url(&self, query: &str) -> String {
        let encoded_query = urlencoding::encode(query.trim());
        format!(
            "{}{}&maxResults={}",
            self.search_endpoint, encoded_query, self.max_results
        )
    }

    async fn fetch_thumbnail(&self, thumbnail_url: &str) -> Option<BookThumbnail> {
        let bytes = match self.http_client.fetch_bytes(thumbnail_url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                log::error!("[GOOGLE_BOOKS] Problem getting thumbnail image: {:#}", e);
                return None;
            }
        };

        match BookThumbnail::decode_from_bytes(&bytes) {
            Ok(thumbnail) => Some(thumbnail),
            Err(e) => {
                log::error!("[GOOGLE_BOOKS] Problem decoding thumbnail image: {:#}", e);
                None
            }
        }
    }

    async fn build_book(&self, entry: VolumeEntry) -> Book {
        let thumbnail = match entry.thumbnail_url.as_deref() {
            Some(url) => self.fetch_thumbnail(url).await,
            None => None,
        };

        Book::new(
            entry.title,
            entry.author,
            entry.published_date,
            entry.rating,
            entry.website_url,
            thumbnail,
        )
    }
}

#[async_trait]
impl BookSearchProvider for GoogleBooksSearchProvider {
    async fn search_books(&self, query: &str) -> Vec<Book> {
        let search_url = self.construct_search_url(query);

        log::info!("[GOOGLE_BOOKS] Searching books");
        log::debug!("[GOOGLE_BOOKS] Search URL: {}", search_url);

        let response_body = match self.http_client.fetch_text(&search_url).await {
            Ok(body) => body,
            Err(e) => {
                log::error!("[GOOGLE_BOOKS] Problem retrieving the book JSON results: {:#}", e);
                return Vec::new();
            }
        };

        let entries = extract_volume_entries(&response_body);
        log::info!("[GOOGLE_BOOKS] Extracted {} books", entries.len());

        // buffered keeps source order while up to N thumbnails are in flight
        let books: Vec<Book> = stream::iter(entries)
            .map(|entry| self.build_book(entry))
            .buffered(self.thumbnail_fetch_concurrency)
            .collect()
            .await;

        log::info!(
            "[GOOGLE_BOOKS] {} of {} books have thumbnails",
            books.iter().filter(|book| book.has_thumbnail()).count(),
            books.len()
        );

        books
    }
}
