pub const APPLICATION_TITLE: &str = "Book Search";
pub const RESULTS_WINDOW_TITLE: &str = "Book Results";

pub const GOOGLE_BOOKS_API_URL: &str = "https://www.googleapis.com/books/v1/volumes?q=";
pub const DEFAULT_MAX_RESULTS: u32 = 30;

pub const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 15;
pub const DEFAULT_READ_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_CONNECTIVITY_TIMEOUT_SECONDS: u64 = 5;
pub const DEFAULT_THUMBNAIL_FETCH_CONCURRENCY: usize = 4;

pub const RATING_NOT_AVAILABLE: &str = "N/A";
pub const BLANK_AUTHOR: &str = " ";

pub const SETTINGS_DIRECTORY_NAME: &str = "book-search-pc";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const STATUS_READY: &str = "Ready - type a subject, title or author";
pub const STATUS_SEARCHING: &str = "Searching...";
pub const STATUS_NO_CONNECTION: &str = "No internet connection";

pub const USER_MESSAGE_LOADING: &str = "Loading books...";
pub const USER_MESSAGE_NO_BOOKS: &str = "No books found.";
pub const USER_MESSAGE_NO_CONNECTION: &str = "No internet connection.";

pub const SEARCH_INPUT_PLACEHOLDER: &str = "Enter a subject, title or author";
