use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length};

use crate::core::models::ThemeMode;
use crate::global_constants;
use crate::presentation::app_theme;

pub struct SearchView {
    query: String,
}

#[derive(Debug, Clone)]
pub enum SearchViewMessage {
    QueryChanged(String),
    Submit,
    ToggleTheme,
}

impl SearchView {
    pub fn new() -> Self {
        Self {
            query: String::new(),
        }
    }

    pub fn update(&mut self, message: SearchViewMessage) {
        if let SearchViewMessage::QueryChanged(query) = message {
            self.query = query;
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The trimmed query, if there is anything to search for.
    pub fn submittable_query(&self) -> Option<String> {
        let trimmed = self.query().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn render_ui<'a>(
        &'a self,
        status: &'a str,
        theme_mode: &ThemeMode,
    ) -> Element<'a, SearchViewMessage> {
        let logo_icon = text("📚").size(64);
        let title = text(global_constants::APPLICATION_TITLE).size(36);
        let subtitle = text("Find books by subject, title or author")
            .size(16)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(app_theme::muted_text_color()),
            });

        let header_section = column![logo_icon, title, subtitle]
            .spacing(8)
            .align_x(Alignment::Center);

        let search_input = text_input(global_constants::SEARCH_INPUT_PLACEHOLDER, self.query())
            .on_input(SearchViewMessage::QueryChanged)
            .on_submit(SearchViewMessage::Submit)
            .padding(12)
            .size(16)
            .width(Length::Fill);

        let search_btn = button(
            row![text("🔍").size(16), text("Search").size(16)]
                .spacing(8)
                .align_y(Alignment::Center),
        )
        .padding([12, 28])
        .style(|theme, status| app_theme::primary_button_style(theme, status))
        .on_press_maybe(self.submittable_query().map(|_| SearchViewMessage::Submit));

        let search_row = row![search_input, search_btn]
            .spacing(12)
            .align_y(Alignment::Center)
            .width(Length::Fill);

        let theme_btn = button(text(format!("Theme: {}", theme_mode)).size(13))
            .padding([8, 16])
            .style(|theme, status| app_theme::secondary_button_style(theme, status))
            .on_press(SearchViewMessage::ToggleTheme);

        let status_text = text(status)
            .size(13)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(app_theme::muted_text_color()),
            });

        let content = column![
            header_section,
            Space::new().height(Length::Fixed(32.0)),
            search_row,
            Space::new().height(Length::Fixed(16.0)),
            status_text,
            Space::new().height(Length::Fill),
            theme_btn,
        ]
        .spacing(4)
        .padding(32)
        .width(Length::Fill)
        .align_x(Alignment::Center);

        let theme_mode = theme_mode.clone();

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| app_theme::window_background_style(&theme_mode))
            .into()
    }
}
