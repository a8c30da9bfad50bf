pub mod app_theme;
mod book_results_view;
mod search_view;

pub use book_results_view::{BookResultsMessage, BookResultsView, ResultsState};
pub use search_view::{SearchView, SearchViewMessage};
