use super::{BookThumbnail, RatingColor};

/// One search hit. Built once from a volume entry and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub published_date: String,
    pub rating: String,
    pub website_url: String,
    pub thumbnail: Option<BookThumbnail>,
}

impl Book {
    pub fn new(
        title: String,
        author: String,
        published_date: String,
        rating: String,
        website_url: String,
        thumbnail: Option<BookThumbnail>,
    ) -> Self {
        Self {
            title,
            author,
            published_date,
            rating,
            website_url,
            thumbnail,
        }
    }

    pub fn rating_color(&self) -> RatingColor {
        RatingColor::from_rating(&self.rating)
    }

    pub fn has_thumbnail(&self) -> bool {
        self.thumbnail.is_some()
    }
}
