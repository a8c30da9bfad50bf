mod book;
mod book_thumbnail;
mod rating_color;
mod user_settings;

pub use book::Book;
pub use book_thumbnail::BookThumbnail;
pub use rating_color::RatingColor;
pub use user_settings::{ThemeMode, UserSettings};
