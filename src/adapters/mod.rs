mod google_books_response;
mod google_books_search_provider;
mod reqwest_http_client;
mod system_browser_launcher;
mod tcp_connectivity_checker;

pub use google_books_search_provider::GoogleBooksSearchProvider;
pub use reqwest_http_client::ReqwestHttpClient;
pub use system_browser_launcher::SystemBrowserLauncher;
pub use tcp_connectivity_checker::{AssumeConnected, TcpConnectivityChecker};
