use std::path::Path;

use crate::core::errors::PaletteResult;
use crate::core::models::Notification;

/// What the surrounding UI host provides to the palette.
pub trait HostCapabilities: Send + Sync {
    fn show_notification(&self, notification: Notification);

    fn copy_text(&self, text: &str) -> PaletteResult<()>;

    /// Places the file at `path` on the clipboard.
    fn copy_file(&self, path: &Path) -> PaletteResult<()>;

    fn open_url(&self, url: &str) -> PaletteResult<()>;

    fn close_main_window(&self);
}
