use std::collections::HashMap;

use iced::widget::{
    button, column, container, image, row, scrollable, text, text_input, Column, Row, Space,
};
use iced::{Alignment, Element, Length};

use crate::core::models::ImageResult;
use crate::global_constants;
use crate::presentation::app_theme;

#[derive(Debug, Clone)]
pub enum SearchGridMessage {
    QueryChanged(String),
    CopyImage(usize),
    CopyUrl(usize),
    OpenInBrowser(usize),
}

/// Splits results into rows of `columns` cells, keeping each cell's index
/// into the result set. The last row may be shorter.
pub fn grid_rows(results: &[ImageResult], columns: usize) -> Vec<Vec<(usize, &ImageResult)>> {
    let columns = columns.max(1);

    results
        .iter()
        .enumerate()
        .collect::<Vec<_>>()
        .chunks(columns)
        .map(|chunk| chunk.to_vec())
        .collect()
}

pub fn status_line(query: &str, result_count: usize, is_loading: bool) -> String {
    if is_loading {
        "Searching...".to_string()
    } else if query.trim().is_empty() {
        "Type to search for images".to_string()
    } else if result_count == 0 {
        "No images found".to_string()
    } else if result_count == 1 {
        "1 image".to_string()
    } else {
        format!("{} images", result_count)
    }
}

#[derive(Default)]
pub struct SearchGridView {
    thumbnails: HashMap<String, image::Handle>,
}

impl SearchGridView {
    pub fn build() -> Self {
        Self::default()
    }

    pub fn reset_thumbnails(&mut self) {
        self.thumbnails.clear();
    }

    pub fn store_thumbnail(&mut self, link: String, image_bytes: Vec<u8>) {
        log::debug!("[GRID_VIEW] Thumbnail ready for {}", link);
        self.thumbnails
            .insert(link, image::Handle::from_bytes(image_bytes));
    }

    pub fn has_thumbnail(&self, link: &str) -> bool {
        self.thumbnails.contains_key(link)
    }

    pub fn render_ui<'a>(
        &'a self,
        query: &'a str,
        results: &'a [ImageResult],
        is_loading: bool,
    ) -> Element<'a, SearchGridMessage> {
        let search_bar = text_input(global_constants::SEARCH_BAR_PLACEHOLDER, query)
            .on_input(SearchGridMessage::QueryChanged)
            .padding(12)
            .size(18)
            .width(Length::Fill);

        let status = text(status_line(query, results.len(), is_loading)).size(13);

        let rows = grid_rows(results, global_constants::GRID_COLUMN_COUNT)
            .into_iter()
            .map(|cells| self.render_row(cells));

        let grid = Column::with_children(rows).spacing(10).width(Length::Fill);

        column![search_bar, status, scrollable(grid).height(Length::Fill)]
            .spacing(12)
            .padding(15)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn render_row<'a>(&'a self, cells: Vec<(usize, &'a ImageResult)>) -> Element<'a, SearchGridMessage> {
        let filled = cells.len();

        let mut children: Vec<Element<'a, SearchGridMessage>> = cells
            .into_iter()
            .map(|(index, result)| self.render_cell(index, result))
            .collect();

        for _ in filled..global_constants::GRID_COLUMN_COUNT {
            children.push(
                container(Space::new())
                    .width(Length::FillPortion(1))
                    .into(),
            );
        }

        Row::with_children(children)
            .spacing(10)
            .width(Length::Fill)
            .into()
    }

    fn render_cell<'a>(&'a self, index: usize, result: &'a ImageResult) -> Element<'a, SearchGridMessage> {
        let preview: Element<'a, SearchGridMessage> = match self.thumbnails.get(&result.link) {
            Some(handle) => image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(global_constants::THUMBNAIL_HEIGHT))
                .into(),
            None => container(text("Loading image...").size(12))
                .width(Length::Fill)
                .height(Length::Fixed(global_constants::THUMBNAIL_HEIGHT))
                .align_x(Alignment::Center)
                .align_y(Alignment::Center)
                .into(),
        };

        let actions = row![
            button(text("Copy Image").size(12))
                .padding([4, 8])
                .style(app_theme::copy_button_style)
                .on_press(SearchGridMessage::CopyImage(index)),
            button(text("Copy URL").size(12))
                .padding([4, 8])
                .style(app_theme::secondary_button_style)
                .on_press(SearchGridMessage::CopyUrl(index)),
            button(text("Open").size(12))
                .padding([4, 8])
                .style(app_theme::secondary_button_style)
                .on_press(SearchGridMessage::OpenInBrowser(index)),
        ]
        .spacing(4);

        let content = column![
            preview,
            text(result.title.as_str()).size(14),
            text(result.display_link.as_str()).size(12),
            actions,
        ]
        .spacing(6);

        container(content)
            .padding(8)
            .width(Length::FillPortion(1))
            .style(app_theme::grid_cell_style)
            .into()
    }
}
