use std::path::{Path, PathBuf};
use std::sync::Arc;

use uuid::Uuid;

use crate::core::errors::PaletteResult;
use crate::core::interfaces::adapters::ImageDownloader;
use crate::core::interfaces::ports::HostCapabilities;
use crate::core::models::{ImageResult, Notification};
use crate::global_constants;

/// Per-result actions offered in the grid. Each invocation is independent
/// and runs to completion; failures end in a single failure notification.
#[derive(Clone)]
pub struct ResultActions {
    image_downloader: Arc<dyn ImageDownloader>,
    temp_dir: PathBuf,
}

impl ResultActions {
    pub fn build(image_downloader: Arc<dyn ImageDownloader>) -> Self {
        Self::build_with_temp_dir(image_downloader, std::env::temp_dir())
    }

    pub fn build_with_temp_dir(image_downloader: Arc<dyn ImageDownloader>, temp_dir: PathBuf) -> Self {
        Self {
            image_downloader,
            temp_dir,
        }
    }

    pub async fn copy_image_to_clipboard(
        &self,
        host: &dyn HostCapabilities,
        result: &ImageResult,
    ) -> PaletteResult<PathBuf> {
        log::info!("[ACTIONS] Copying image to clipboard: {}", result.link);
        host.show_notification(Notification::in_progress(
            global_constants::TOAST_COPYING_IMAGE,
        ));

        match self.download_to_clipboard(host, &result.link).await {
            Ok(temp_file) => {
                host.close_main_window();
                host.show_notification(Notification::success(global_constants::TOAST_IMAGE_COPIED));
                log::info!("[ACTIONS] Image copied via {:?}", temp_file);
                Ok(temp_file)
            }
            Err(e) => {
                log::error!("[ACTIONS] Failed to copy image: {}", e);
                host.show_notification(Notification::failure(
                    global_constants::TOAST_COPY_IMAGE_FAILED,
                    &e,
                ));
                Err(e)
            }
        }
    }

    async fn download_to_clipboard(
        &self,
        host: &dyn HostCapabilities,
        link: &str,
    ) -> PaletteResult<PathBuf> {
        let image_bytes = self.image_downloader.fetch_image_bytes(link).await?;
        log::debug!("[ACTIONS] Downloaded {} bytes", image_bytes.len());

        let temp_file = self.temp_dir.join(build_temp_file_name(link));
        tokio::fs::write(&temp_file, &image_bytes).await?;
        log::debug!("[ACTIONS] Wrote image to {:?}", temp_file);

        host.copy_file(&temp_file)?;
        Ok(temp_file)
    }

    pub fn copy_url(&self, host: &dyn HostCapabilities, result: &ImageResult) -> PaletteResult<()> {
        log::info!("[ACTIONS] Copying image URL: {}", result.link);

        match host.copy_text(&result.link) {
            Ok(()) => {
                host.show_notification(Notification::success(global_constants::TOAST_URL_COPIED));
                Ok(())
            }
            Err(e) => {
                log::error!("[ACTIONS] Failed to copy URL: {}", e);
                host.show_notification(Notification::failure(
                    global_constants::TOAST_COPY_URL_FAILED,
                    &e,
                ));
                Err(e)
            }
        }
    }

    pub fn open_in_browser(
        &self,
        host: &dyn HostCapabilities,
        result: &ImageResult,
    ) -> PaletteResult<()> {
        log::info!("[ACTIONS] Opening image in browser: {}", result.link);

        host.open_url(&result.link).inspect_err(|e| {
            log::error!("[ACTIONS] Failed to open browser: {}", e);
            host.show_notification(Notification::failure(
                global_constants::TOAST_OPEN_BROWSER_FAILED,
                e,
            ));
        })
    }
}

/// `<uuid><last path segment>`, or `<uuid>.png` when the URL has no usable
/// last segment.
pub fn build_temp_file_name(link: &str) -> String {
    let file_segment = last_path_segment(link)
        .filter(|segment| !segment.is_empty())
        .unwrap_or_else(|| global_constants::DEFAULT_TEMP_FILE_EXTENSION.to_string());

    format!("{}{}", Uuid::new_v4(), file_segment)
}

fn last_path_segment(link: &str) -> Option<String> {
    match reqwest::Url::parse(link) {
        Ok(url) => url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .map(|segment| sanitize_segment(&urlencoding::decode(segment).unwrap_or_default())),
        Err(_) => link.rsplit('/').next().map(sanitize_segment),
    }
}

fn sanitize_segment(segment: &str) -> String {
    let file_name = Path::new(segment)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    file_name
        .chars()
        .map(|c| if c.is_control() || matches!(c, '\\' | ':') { '_' } else { c })
        .collect()
}
