use std::collections::HashMap;
use std::sync::Arc;

use iced::window::{self, Id};
use iced::widget::text;
use iced::{Element, Size, Task};

use crate::core::interfaces::adapters::{BookSearchProvider, BrowserLauncher, ConnectivityChecker};
use crate::core::models::{Book, UserSettings};
use crate::global_constants;
use crate::presentation::{
    BookResultsMessage, BookResultsView, ResultsState, SearchView, SearchViewMessage,
};

pub enum AppWindow {
    Search(SearchView),
    BookResults(BookResultsView),
}

pub struct AppOrchestrator {
    book_search_provider: Arc<dyn BookSearchProvider>,
    connectivity_checker: Arc<dyn ConnectivityChecker>,
    browser_launcher: Arc<dyn BrowserLauncher>,
    windows: HashMap<Id, AppWindow>,
    search_window_id: Option<Id>,
    status: String,
    settings: UserSettings,
}

#[derive(Clone)]
pub enum OrchestratorMessage {
    OpenSearchWindow,
    SearchViewMsg(Id, SearchViewMessage),
    StartSearch(String),
    ConnectivityChecked(Id, bool),
    SearchCompleted(Id, Vec<Book>),
    BookResultsMsg(Id, BookResultsMessage),
    WindowClosed(Id),
}

impl std::fmt::Debug for OrchestratorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorMessage::OpenSearchWindow => write!(f, "OpenSearchWindow"),
            OrchestratorMessage::SearchViewMsg(id, msg) => {
                write!(f, "SearchViewMsg({:?}, {:?})", id, msg)
            }
            OrchestratorMessage::StartSearch(_) => write!(f, "StartSearch"),
            OrchestratorMessage::ConnectivityChecked(id, connected) => {
                write!(f, "ConnectivityChecked({:?}, {})", id, connected)
            }
            OrchestratorMessage::SearchCompleted(id, books) => {
                write!(f, "SearchCompleted({:?}, {} books)", id, books.len())
            }
            OrchestratorMessage::BookResultsMsg(id, msg) => {
                write!(f, "BookResultsMsg({:?}, {:?})", id, msg)
            }
            OrchestratorMessage::WindowClosed(id) => write!(f, "WindowClosed({:?})", id),
        }
    }
}

impl AppOrchestrator {
    pub fn build(
        book_search_provider: Arc<dyn BookSearchProvider>,
        connectivity_checker: Arc<dyn ConnectivityChecker>,
        browser_launcher: Arc<dyn BrowserLauncher>,
        settings: UserSettings,
    ) -> Self {
        Self {
            book_search_provider,
            connectivity_checker,
            browser_launcher,
            windows: HashMap::new(),
            search_window_id: None,
            status: global_constants::STATUS_READY.to_string(),
            settings,
        }
    }

    pub fn get_window_title(&self, window_id: Id) -> String {
        match self.windows.get(&window_id) {
            Some(AppWindow::BookResults(view)) => {
                format!("{} - {}", global_constants::RESULTS_WINDOW_TITLE, view.query())
            }
            _ => global_constants::APPLICATION_TITLE.to_string(),
        }
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::debug!("[ORCHESTRATOR] Received message: {:?}", message);

        match message {
            OrchestratorMessage::OpenSearchWindow => self.handle_open_search_window(),
            OrchestratorMessage::SearchViewMsg(window_id, search_msg) => {
                self.handle_search_view_message(window_id, search_msg)
            }
            OrchestratorMessage::StartSearch(query) => self.handle_start_search(query),
            OrchestratorMessage::ConnectivityChecked(window_id, connected) => {
                self.handle_connectivity_checked(window_id, connected)
            }
            OrchestratorMessage::SearchCompleted(window_id, books) => {
                self.handle_search_completed(window_id, books)
            }
            OrchestratorMessage::BookResultsMsg(window_id, results_msg) => {
                self.handle_book_results_message(window_id, results_msg)
            }
            OrchestratorMessage::WindowClosed(window_id) => self.handle_window_closed(window_id),
        }
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        let theme_mode = &self.settings.theme_mode;

        match self.windows.get(&window_id) {
            Some(AppWindow::Search(search_view)) => search_view
                .render_ui(&self.status, theme_mode)
                .map(move |msg| OrchestratorMessage::SearchViewMsg(window_id, msg)),
            Some(AppWindow::BookResults(results_view)) => results_view
                .render_ui(theme_mode)
                .map(move |msg| OrchestratorMessage::BookResultsMsg(window_id, msg)),
            None => text("Loading...").into(),
        }
    }

    fn handle_open_search_window(&mut self) -> Task<OrchestratorMessage> {
        if let Some(id) = self.search_window_id {
            if self.windows.contains_key(&id) {
                log::warn!("[ORCHESTRATOR] Search window already exists and is open");
                return Task::none();
            }
        }

        let (id, task) = window::open(window::Settings {
            size: Size::new(640.0, 420.0),
            position: window::Position::Centered,
            resizable: false,
            ..Default::default()
        });

        self.search_window_id = Some(id);
        self.windows.insert(id, AppWindow::Search(SearchView::new()));
        log::info!("[ORCHESTRATOR] Search window created with ID: {:?}", id);
        task.discard()
    }

    fn handle_search_view_message(
        &mut self,
        window_id: Id,
        search_msg: SearchViewMessage,
    ) -> Task<OrchestratorMessage> {
        match search_msg {
            SearchViewMessage::Submit => {
                let query = match self.windows.get(&window_id) {
                    Some(AppWindow::Search(view)) => view.submittable_query(),
                    _ => None,
                };

                match query {
                    Some(query) => Task::done(OrchestratorMessage::StartSearch(query)),
                    None => {
                        log::debug!("[ORCHESTRATOR] Ignoring submit of blank query");
                        Task::none()
                    }
                }
            }
            SearchViewMessage::ToggleTheme => {
                self.settings.theme_mode = self.settings.theme_mode.toggled();
                log::info!("[ORCHESTRATOR] Theme switched to {}", self.settings.theme_mode);
                Task::none()
            }
            other => {
                if let Some(AppWindow::Search(view)) = self.windows.get_mut(&window_id) {
                    view.update(other);
                }
                Task::none()
            }
        }
    }

    fn handle_start_search(&mut self, query: String) -> Task<OrchestratorMessage> {
        let query = query.trim().to_string();
        if query.is_empty() {
            log::warn!("[ORCHESTRATOR] Refusing to search for a blank query");
            return Task::none();
        }

        log::info!("[ORCHESTRATOR] Opening results window for new search");
        self.status = global_constants::STATUS_SEARCHING.to_string();

        let (id, open_task) = window::open(window::Settings {
            size: Size::new(720.0, 760.0),
            position: window::Position::Centered,
            ..Default::default()
        });

        self.windows
            .insert(id, AppWindow::BookResults(BookResultsView::build(query)));

        let connectivity_checker = Arc::clone(&self.connectivity_checker);

        Task::batch(vec![
            open_task.discard(),
            Task::future(async move {
                let connected = connectivity_checker.is_connected().await;
                OrchestratorMessage::ConnectivityChecked(id, connected)
            }),
        ])
    }

    fn handle_connectivity_checked(
        &mut self,
        window_id: Id,
        connected: bool,
    ) -> Task<OrchestratorMessage> {
        let Some(AppWindow::BookResults(view)) = self.windows.get_mut(&window_id) else {
            log::info!(
                "[ORCHESTRATOR] Results window {:?} closed before the search started",
                window_id
            );
            return Task::none();
        };

        if !connected {
            log::warn!("[ORCHESTRATOR] No network connection, skipping search");
            view.show_no_connection();
            self.settle_status(global_constants::STATUS_NO_CONNECTION);
            return Task::none();
        }

        let query = view.query().to_string();
        let book_search_provider = Arc::clone(&self.book_search_provider);

        Task::future(async move {
            let books = book_search_provider.search_books(&query).await;
            OrchestratorMessage::SearchCompleted(window_id, books)
        })
    }

    fn handle_search_completed(
        &mut self,
        window_id: Id,
        books: Vec<Book>,
    ) -> Task<OrchestratorMessage> {
        let Some(AppWindow::BookResults(view)) = self.windows.get_mut(&window_id) else {
            log::info!(
                "[ORCHESTRATOR] Discarding {} books, window {:?} is gone",
                books.len(),
                window_id
            );
            return Task::none();
        };

        log::info!(
            "[ORCHESTRATOR] Search complete for window {:?}: {} books",
            window_id,
            books.len()
        );
        view.show_books(books);
        self.settle_status(global_constants::STATUS_READY);
        Task::none()
    }

    fn has_search_in_flight(&self) -> bool {
        self.windows.values().any(|window| {
            matches!(window, AppWindow::BookResults(view) if *view.state() == ResultsState::Loading)
        })
    }

    /// The status line stays on "Searching" while any results window is still loading.
    fn settle_status(&mut self, finished_status: &str) {
        let status = if self.has_search_in_flight() {
            global_constants::STATUS_SEARCHING
        } else {
            finished_status
        };
        self.status = status.to_string();
    }

    fn handle_book_results_message(
        &mut self,
        window_id: Id,
        results_msg: BookResultsMessage,
    ) -> Task<OrchestratorMessage> {
        match results_msg {
            BookResultsMessage::BookSelected(index) => {
                let website_url = match self.windows.get(&window_id) {
                    Some(AppWindow::BookResults(view)) => {
                        view.book_at(index).map(|book| book.website_url.clone())
                    }
                    _ => None,
                };

                match website_url {
                    Some(url) => {
                        if let Err(e) = self.browser_launcher.open_url(&url) {
                            log::error!("[ORCHESTRATOR] Failed to open book page: {:#}", e);
                        }
                    }
                    None => {
                        log::warn!("[ORCHESTRATOR] No book at index {} in {:?}", index, window_id);
                    }
                }
                Task::none()
            }
            BookResultsMessage::Close => {
                log::info!("[ORCHESTRATOR] Closing results window: {:?}", window_id);
                window::close(window_id)
            }
        }
    }

    fn handle_window_closed(&mut self, window_id: Id) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Window closed: {:?}", window_id);
        let closed_window = self.windows.remove(&window_id);

        if Some(window_id) == self.search_window_id {
            log::info!("[ORCHESTRATOR] Search window closed, exiting application");
            self.search_window_id = None;
            return iced::exit();
        }

        if let Some(AppWindow::BookResults(view)) = closed_window {
            if *view.state() == ResultsState::Loading && !self.has_search_in_flight() {
                log::info!("[ORCHESTRATOR] Last pending search was abandoned");
                self.status = global_constants::STATUS_READY.to_string();
            }
        }

        Task::none()
    }
}
