use std::sync::Arc;

use iced::window::Id;
use iced::{Element, Task};

use crate::adapters::{
    AssumeConnected, GoogleBooksSearchProvider, ReqwestHttpClient, SystemBrowserLauncher,
    TcpConnectivityChecker,
};
use crate::core::interfaces::adapters::ConnectivityChecker;
use crate::core::models::UserSettings;
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};

pub struct BookSearchApp {
    orchestrator: AppOrchestrator,
}

impl BookSearchApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("[APP] Failed to load settings: {}, using defaults", e);
            UserSettings::default()
        });

        let http_client =
            ReqwestHttpClient::build_or_fallback(settings.connect_timeout(), settings.read_timeout());

        let book_search_provider = Arc::new(GoogleBooksSearchProvider::new(
            Arc::new(http_client),
            settings.search_endpoint.clone(),
            settings.max_results,
            settings.thumbnail_fetch_concurrency,
        ));

        let connectivity_checker: Arc<dyn ConnectivityChecker> =
            match TcpConnectivityChecker::for_endpoint(
                &settings.search_endpoint,
                settings.connectivity_timeout(),
            ) {
                Ok(checker) => Arc::new(checker),
                Err(e) => {
                    log::warn!(
                        "[APP] Cannot probe search endpoint ({}), skipping connectivity checks",
                        e
                    );
                    Arc::new(AssumeConnected)
                }
            };

        let orchestrator = AppOrchestrator::build(
            book_search_provider,
            connectivity_checker,
            Arc::new(SystemBrowserLauncher::new()),
            settings,
        );

        (
            Self { orchestrator },
            Task::done(OrchestratorMessage::OpenSearchWindow),
        )
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view(window_id)
    }

    pub fn window_title(&self, window_id: Id) -> String {
        self.orchestrator.get_window_title(window_id)
    }

    pub fn handle_subscription(&self) -> iced::Subscription<OrchestratorMessage> {
        use iced::window;

        iced::event::listen_with(|event, _status, id| {
            if let iced::Event::Window(window::Event::Closed) = event {
                return Some(OrchestratorMessage::WindowClosed(id));
            }
            None
        })
    }
}
