pub mod app_theme;
mod notification_toast;
mod search_grid_view;

pub use notification_toast::render_toast;
pub use search_grid_view::{grid_rows, status_line, SearchGridMessage, SearchGridView};
