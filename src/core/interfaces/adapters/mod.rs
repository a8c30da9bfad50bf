mod book_search_provider;
mod browser_launcher;
mod connectivity_checker;
mod http_client;

pub use book_search_provider::BookSearchProvider;
pub use browser_launcher::BrowserLauncher;
pub use connectivity_checker::ConnectivityChecker;
pub use http_client::HttpClient;
