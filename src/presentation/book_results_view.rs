use iced::widget::{button, column, container, image, row, scrollable, text, Column, Image, Space};
use iced::{Alignment, Element, Length};

use crate::core::models::{Book, ThemeMode};
use crate::global_constants;
use crate::presentation::app_theme;

const THUMBNAIL_WIDTH: f32 = 64.0;
const THUMBNAIL_HEIGHT: f32 = 96.0;
const RATING_BADGE_SIZE: f32 = 36.0;

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsState {
    Loading,
    NoConnection,
    Loaded,
}

pub struct BookResultsView {
    query: String,
    state: ResultsState,
    books: Vec<Book>,
}

#[derive(Debug, Clone)]
pub enum BookResultsMessage {
    BookSelected(usize),
    Close,
}

impl BookResultsView {
    pub fn build(query: String) -> Self {
        log::info!("[RESULTS_VIEW] Creating results view");

        Self {
            query,
            state: ResultsState::Loading,
            books: Vec::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &ResultsState {
        &self.state
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn book_at(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub fn show_no_connection(&mut self) {
        log::info!("[RESULTS_VIEW] Showing no connection message");
        self.books.clear();
        self.state = ResultsState::NoConnection;
    }

    pub fn show_books(&mut self, books: Vec<Book>) {
        log::info!("[RESULTS_VIEW] Showing {} books", books.len());
        self.books = books;
        self.state = ResultsState::Loaded;
    }

    pub fn render_ui(&self, theme_mode: &ThemeMode) -> Element<'_, BookResultsMessage> {
        let title = text(format!("Results for \"{}\"", self.query))
            .size(24)
            .width(Length::Fill);

        let close_btn = button(text("✖ Close").size(14))
            .padding([8, 16])
            .style(|theme, status| app_theme::secondary_button_style(theme, status))
            .on_press(BookResultsMessage::Close);

        let header = row![title, close_btn]
            .spacing(12)
            .align_y(Alignment::Center);

        let body: Element<'_, BookResultsMessage> = match self.state {
            ResultsState::Loading => self.render_message(global_constants::USER_MESSAGE_LOADING),
            ResultsState::NoConnection => {
                self.render_message(global_constants::USER_MESSAGE_NO_CONNECTION)
            }
            ResultsState::Loaded if self.books().is_empty() => {
                self.render_message(global_constants::USER_MESSAGE_NO_BOOKS)
            }
            ResultsState::Loaded => self.render_book_list(),
        };

        let content = column![header, body]
            .spacing(16)
            .padding(20)
            .width(Length::Fill)
            .height(Length::Fill);

        let theme_mode = theme_mode.clone();

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| app_theme::window_background_style(&theme_mode))
            .into()
    }

    fn render_message<'a>(&self, message: &'a str) -> Element<'a, BookResultsMessage> {
        container(text(message).size(18))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn render_book_list(&self) -> Element<'_, BookResultsMessage> {
        let rows = self
            .books()
            .iter()
            .enumerate()
            .map(|(index, book)| Self::render_book_row(index, book));

        scrollable(Column::with_children(rows).spacing(8).width(Length::Fill))
            .height(Length::Fill)
            .into()
    }

    fn render_book_row(index: usize, book: &Book) -> Element<'_, BookResultsMessage> {
        let thumbnail: Element<'_, BookResultsMessage> = match &book.thumbnail {
            Some(thumbnail) => {
                let cover: Image = image(thumbnail.image_handle.clone());
                cover
                    .width(Length::Fixed(THUMBNAIL_WIDTH))
                    .height(Length::Fixed(THUMBNAIL_HEIGHT))
                    .into()
            }
            None => container(Space::new())
                .width(Length::Fixed(THUMBNAIL_WIDTH))
                .height(Length::Fixed(THUMBNAIL_HEIGHT))
                .style(|_theme| app_theme::thumbnail_placeholder_style())
                .into(),
        };

        let details = column![
            text(&book.title).size(17),
            text(&book.author)
                .size(14)
                .style(|_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(app_theme::muted_text_color()),
                }),
            text(&book.published_date).size(13),
        ]
        .spacing(4)
        .width(Length::Fill);

        let rating_color = book.rating_color();
        let rating_badge = container(text(&book.rating).size(13))
            .width(Length::Fixed(RATING_BADGE_SIZE))
            .height(Length::Fixed(RATING_BADGE_SIZE))
            .center_x(Length::Fixed(RATING_BADGE_SIZE))
            .center_y(Length::Fixed(RATING_BADGE_SIZE))
            .style(move |_theme| app_theme::rating_badge_style(rating_color));

        let content = row![thumbnail, details, rating_badge]
            .spacing(16)
            .align_y(Alignment::Center);

        button(content)
            .width(Length::Fill)
            .padding(10)
            .style(app_theme::book_row_style)
            .on_press(BookResultsMessage::BookSelected(index))
            .into()
    }
}
