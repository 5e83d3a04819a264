use std::borrow::Cow;
use std::path::Path;
use std::sync::{Arc, Mutex};

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::core::errors::{PaletteError, PaletteResult};
use crate::core::interfaces::ports::HostCapabilities;
use crate::core::models::Notification;

/// Requests the desktop host cannot satisfy off the UI thread; they are
/// forwarded to the iced update loop in the order they were raised.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Notify(Notification),
    CloseMainWindow,
}

/// System clipboard shared by every action. The handle is kept alive because
/// on X11 and Wayland the contents vanish once it is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_clipboard<F>(&self, operation: F) -> PaletteResult<()>
    where
        F: FnOnce(&mut arboard::Clipboard) -> Result<(), arboard::Error>,
    {
        let mut guard = self
            .clipboard
            .lock()
            .map_err(|_| PaletteError::Clipboard("clipboard lock poisoned".to_string()))?;

        if guard.is_none() {
            log::debug!("[CLIPBOARD] Opening system clipboard");
            *guard = Some(arboard::Clipboard::new()?);
        }

        let clipboard = guard
            .as_mut()
            .ok_or_else(|| PaletteError::Clipboard("clipboard unavailable".to_string()))?;

        operation(clipboard)?;
        Ok(())
    }

    pub fn set_text(&self, text: &str) -> PaletteResult<()> {
        self.with_clipboard(|clipboard| clipboard.set_text(text))
    }

    /// Decodes the image file and places its pixels on the clipboard.
    pub fn set_image_file(&self, path: &Path) -> PaletteResult<()> {
        let rgba = decode_image_file(path)?;
        let (width, height) = rgba.dimensions();
        log::debug!("[CLIPBOARD] Setting {}x{} image from {:?}", width, height, path);

        let image_data = arboard::ImageData {
            width: width as usize,
            height: height as usize,
            bytes: Cow::Owned(rgba.into_raw()),
        };

        self.with_clipboard(|clipboard| clipboard.set_image(image_data))
    }
}

/// Reads an image file and decodes it by content. Downloaded files are
/// named after the link, so the extension may be missing or wrong.
fn decode_image_file(path: &Path) -> PaletteResult<image::RgbaImage> {
    let image_bytes = std::fs::read(path)?;
    let decoded = image::load_from_memory(&image_bytes).map_err(|e| {
        PaletteError::Clipboard(format!("Unsupported image file {:?}: {}", path, e))
    })?;

    Ok(decoded.to_rgba8())
}

pub struct DesktopHost {
    clipboard: Arc<SystemClipboard>,
    events: UnboundedSender<HostEvent>,
}

impl DesktopHost {
    /// Creates a host for one action together with the stream of UI events
    /// it raises. The stream ends when the host is dropped.
    pub fn build(clipboard: Arc<SystemClipboard>) -> (Self, UnboundedReceiver<HostEvent>) {
        let (events, receiver) = mpsc::unbounded();
        (Self { clipboard, events }, receiver)
    }

    fn send_event(&self, event: HostEvent) {
        if let Err(e) = self.events.unbounded_send(event) {
            log::debug!("[DESKTOP_HOST] UI no longer listening: {}", e);
        }
    }
}

impl HostCapabilities for DesktopHost {
    fn show_notification(&self, notification: Notification) {
        self.send_event(HostEvent::Notify(notification));
    }

    fn copy_text(&self, text: &str) -> PaletteResult<()> {
        self.clipboard.set_text(text)
    }

    fn copy_file(&self, path: &Path) -> PaletteResult<()> {
        self.clipboard.set_image_file(path)
    }

    fn open_url(&self, url: &str) -> PaletteResult<()> {
        open::that(url).map_err(|e| PaletteError::Browser(e.to_string()))
    }

    fn close_main_window(&self) {
        self.send_event(HostEvent::CloseMainWindow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn test_events_arrive_in_order_and_stream_ends_on_drop() {
        let (host, receiver) = DesktopHost::build(Arc::new(SystemClipboard::new()));

        host.show_notification(Notification::in_progress("working"));
        host.close_main_window();
        host.show_notification(Notification::success("done"));
        drop(host);

        let events: Vec<HostEvent> = receiver.collect().await;

        assert_eq!(
            events,
            vec![
                HostEvent::Notify(Notification::in_progress("working")),
                HostEvent::CloseMainWindow,
                HostEvent::Notify(Notification::success("done")),
            ]
        );
    }

    #[test]
    fn test_events_after_receiver_dropped_are_ignored() {
        let (host, receiver) = DesktopHost::build(Arc::new(SystemClipboard::new()));
        drop(receiver);

        host.close_main_window();
    }

    #[test]
    fn test_non_image_file_is_a_clipboard_error() {
        let path = std::env::temp_dir().join(format!("not-an-image-{}.png", uuid::Uuid::new_v4()));
        std::fs::write(&path, b"plain text").unwrap();

        let error = SystemClipboard::new().set_image_file(&path).unwrap_err();

        assert!(matches!(error, PaletteError::Clipboard(_)));
        std::fs::remove_file(&path).ok();
    }

    fn write_png(file_name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("image-search-decode-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(file_name);

        let mut pixels = image::RgbaImage::new(2, 2);
        pixels.put_pixel(1, 1, image::Rgba([255, 0, 0, 255]));
        pixels.save_with_format(&path, image::ImageFormat::Png).unwrap();
        path
    }

    #[test]
    fn test_decode_image_file_without_extension() {
        let path = write_png("3f0c2b1e-images");

        let decoded = decode_image_file(&path).unwrap();

        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.get_pixel(1, 1), &image::Rgba([255, 0, 0, 255]));
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_decode_image_file_with_mismatched_extension() {
        let path = write_png("3f0c2b1e-a.jpg");

        let decoded = decode_image_file(&path).unwrap();

        assert_eq!(decoded.dimensions(), (2, 2));
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_decode_missing_file_is_io_error() {
        let path = std::env::temp_dir().join(format!("missing-{}", uuid::Uuid::new_v4()));

        let error = decode_image_file(&path).unwrap_err();

        assert!(matches!(error, PaletteError::Io(_)));
    }
}
