use std::sync::Arc;
use std::time::Duration;

use iced::widget::{column, container, text};
use iced::window::{self, Id};
use iced::{Element, Length, Size, Task};

use crate::adapters::{GoogleCustomSearchProvider, HttpImageDownloader};
use crate::core::interfaces::adapters::ImageDownloader;
use crate::core::models::{ImageResult, Notification, SearchPreferences, ThemeMode};
use crate::core::orchestrators::{QueryDispatch, ResultActions, SearchCompletion, SearchController};
use crate::global_constants;
use crate::ports::{DesktopHost, HostEvent, SystemClipboard};
use crate::presentation::{app_theme, render_toast, SearchGridMessage, SearchGridView};

#[derive(Clone)]
pub enum PaletteMessage {
    Grid(SearchGridMessage),
    QueryDebounced(Option<String>),
    SearchCompleted(SearchCompletion),
    ThumbnailLoaded(String, Result<Vec<u8>, String>),
    Host(HostEvent),
    ActionFinished,
    HideToast(u64),
    WindowClosed(Id),
}

impl std::fmt::Debug for PaletteMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaletteMessage::Grid(msg) => write!(f, "Grid({:?})", msg),
            PaletteMessage::QueryDebounced(query) => write!(f, "QueryDebounced({:?})", query),
            PaletteMessage::SearchCompleted(completion) => write!(
                f,
                "SearchCompleted(generation={}, results={})",
                completion.generation,
                completion.results.len()
            ),
            PaletteMessage::ThumbnailLoaded(link, result) => {
                write!(f, "ThumbnailLoaded({}, ok={})", link, result.is_ok())
            }
            PaletteMessage::Host(event) => write!(f, "Host({:?})", event),
            PaletteMessage::ActionFinished => write!(f, "ActionFinished"),
            PaletteMessage::HideToast(generation) => write!(f, "HideToast({})", generation),
            PaletteMessage::WindowClosed(id) => write!(f, "WindowClosed({:?})", id),
        }
    }
}

pub struct PaletteApp {
    controller: Option<SearchController>,
    actions: ResultActions,
    image_downloader: Arc<dyn ImageDownloader>,
    clipboard: Arc<SystemClipboard>,
    grid_view: SearchGridView,
    toast: Option<Notification>,
    toast_generation: u64,
    main_window_id: Option<Id>,
    setup_error: Option<String>,
    theme_mode: ThemeMode,
}

impl PaletteApp {
    pub fn build() -> (Self, Task<PaletteMessage>) {
        log::info!("[APP] Initializing image search palette");

        let preferences = SearchPreferences::load().unwrap_or_else(|e| {
            log::warn!("[APP] Failed to load preferences: {}, using defaults", e);
            SearchPreferences::default()
        });

        let (controller, setup_error) = match preferences.credentials() {
            Ok(credentials) => {
                let search_provider = Arc::new(GoogleCustomSearchProvider::new(
                    credentials,
                    preferences.search_endpoint.clone(),
                ));
                (Some(SearchController::build(search_provider)), None)
            }
            Err(e) => {
                log::error!("[APP] Search is unavailable: {}", e);
                (None, Some(Self::describe_setup_error(&e.to_string())))
            }
        };

        let image_downloader: Arc<dyn ImageDownloader> = Arc::new(HttpImageDownloader::new());

        let (main_window_id, open_task) = window::open(window::Settings {
            size: Size::new(
                global_constants::MAIN_WINDOW_WIDTH,
                global_constants::MAIN_WINDOW_HEIGHT,
            ),
            position: window::Position::Centered,
            ..Default::default()
        });
        log::info!("[APP] Main window created with ID: {:?}", main_window_id);

        (
            Self {
                controller,
                actions: ResultActions::build(Arc::clone(&image_downloader)),
                image_downloader,
                clipboard: Arc::new(SystemClipboard::new()),
                grid_view: SearchGridView::build(),
                toast: None,
                toast_generation: 0,
                main_window_id: Some(main_window_id),
                setup_error,
                theme_mode: preferences.theme_mode,
            },
            open_task.discard(),
        )
    }

    fn describe_setup_error(reason: &str) -> String {
        let settings_location = SearchPreferences::get_settings_file_path()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|_| global_constants::SETTINGS_FILE_NAME.to_string());

        format!(
            "{}. Add api_key and cx_id to {} or set {} and {}, then restart.",
            reason,
            settings_location,
            global_constants::ENV_API_KEY,
            global_constants::ENV_CX_ID
        )
    }

    pub fn handle_update(&mut self, message: PaletteMessage) -> Task<PaletteMessage> {
        log::debug!("[APP] Received message: {:?}", message);

        match message {
            PaletteMessage::Grid(SearchGridMessage::QueryChanged(text)) => {
                self.handle_query_changed(text)
            }
            PaletteMessage::Grid(SearchGridMessage::CopyImage(index)) => {
                self.handle_copy_image(index)
            }
            PaletteMessage::Grid(SearchGridMessage::CopyUrl(index)) => self.handle_copy_url(index),
            PaletteMessage::Grid(SearchGridMessage::OpenInBrowser(index)) => {
                self.handle_open_in_browser(index)
            }
            PaletteMessage::QueryDebounced(Some(query)) => self.handle_query_debounced(query),
            PaletteMessage::QueryDebounced(None) => Task::none(),
            PaletteMessage::SearchCompleted(completion) => self.handle_search_completed(completion),
            PaletteMessage::ThumbnailLoaded(link, result) => {
                self.handle_thumbnail_loaded(link, result);
                Task::none()
            }
            PaletteMessage::Host(event) => self.handle_host_event(event),
            PaletteMessage::ActionFinished => Task::none(),
            PaletteMessage::HideToast(generation) => {
                if generation == self.toast_generation {
                    self.toast = None;
                }
                Task::none()
            }
            PaletteMessage::WindowClosed(id) => self.handle_window_closed(id),
        }
    }

    fn handle_query_changed(&mut self, text: String) -> Task<PaletteMessage> {
        let Some(controller) = self.controller.as_mut() else {
            return Task::none();
        };

        match controller.handle_query_changed(text) {
            QueryDispatch::Cleared => {
                self.grid_view.reset_thumbnails();
                Task::none()
            }
            QueryDispatch::Scheduled(tick) => {
                Task::future(async move { PaletteMessage::QueryDebounced(tick.await) })
            }
        }
    }

    fn handle_query_debounced(&mut self, query: String) -> Task<PaletteMessage> {
        let Some(controller) = self.controller.as_mut() else {
            return Task::none();
        };

        match controller.handle_debounce_elapsed(query) {
            Some(search) => {
                log::debug!("[APP] Search phase: {:?}", controller.phase());
                Task::future(async move { PaletteMessage::SearchCompleted(search.await) })
            }
            None => Task::none(),
        }
    }

    /// Fetches a thumbnail for each accepted result. Thumbnails only live in
    /// the view, so copying an image downloads it again.
    fn handle_search_completed(&mut self, completion: SearchCompletion) -> Task<PaletteMessage> {
        let Some(controller) = self.controller.as_mut() else {
            return Task::none();
        };

        if !controller.complete_search(completion) {
            return Task::none();
        }

        self.grid_view.reset_thumbnails();

        let thumbnail_tasks: Vec<Task<PaletteMessage>> = controller
            .results()
            .iter()
            .map(|result| {
                let link = result.link.clone();
                let image_downloader = Arc::clone(&self.image_downloader);
                Task::future(async move {
                    let outcome = image_downloader
                        .fetch_image_bytes(&link)
                        .await
                        .map_err(|e| e.to_string());
                    PaletteMessage::ThumbnailLoaded(link, outcome)
                })
            })
            .collect();

        Task::batch(thumbnail_tasks)
    }

    fn handle_thumbnail_loaded(&mut self, link: String, result: Result<Vec<u8>, String>) {
        let still_shown = self
            .controller
            .as_ref()
            .map(|controller| controller.results().iter().any(|r| r.link == link))
            .unwrap_or(false);

        if !still_shown || self.grid_view.has_thumbnail(&link) {
            return;
        }

        match result {
            Ok(image_bytes) => self.grid_view.store_thumbnail(link, image_bytes),
            Err(e) => log::debug!("[APP] Thumbnail for {} unavailable: {}", link, e),
        }
    }

    fn handle_copy_image(&mut self, index: usize) -> Task<PaletteMessage> {
        let Some(result) = self.selected_result(index) else {
            return Task::none();
        };

        let (host, host_events) = DesktopHost::build(Arc::clone(&self.clipboard));
        let actions = self.actions.clone();

        Task::batch(vec![
            Task::run(host_events, PaletteMessage::Host),
            Task::future(async move {
                let outcome = actions.copy_image_to_clipboard(&host, &result).await;
                log::debug!("[APP] Copy image finished, ok={}", outcome.is_ok());
                PaletteMessage::ActionFinished
            }),
        ])
    }

    fn handle_copy_url(&mut self, index: usize) -> Task<PaletteMessage> {
        let Some(result) = self.selected_result(index) else {
            return Task::none();
        };

        let (host, host_events) = DesktopHost::build(Arc::clone(&self.clipboard));
        if self.actions.copy_url(&host, &result).is_err() {
            log::debug!("[APP] Copy URL failed for result {}", index);
        }
        drop(host);

        Task::run(host_events, PaletteMessage::Host)
    }

    fn handle_open_in_browser(&mut self, index: usize) -> Task<PaletteMessage> {
        let Some(result) = self.selected_result(index) else {
            return Task::none();
        };

        let (host, host_events) = DesktopHost::build(Arc::clone(&self.clipboard));
        if self.actions.open_in_browser(&host, &result).is_err() {
            log::debug!("[APP] Open in browser failed for result {}", index);
        }
        drop(host);

        Task::run(host_events, PaletteMessage::Host)
    }

    fn selected_result(&self, index: usize) -> Option<ImageResult> {
        let result = self
            .controller
            .as_ref()
            .and_then(|controller| controller.result_at(index))
            .cloned();

        if result.is_none() {
            log::warn!("[APP] No result at index {}", index);
        }

        result
    }

    fn handle_host_event(&mut self, event: HostEvent) -> Task<PaletteMessage> {
        match event {
            HostEvent::Notify(notification) => {
                self.toast_generation += 1;
                let generation = self.toast_generation;
                let is_transient = notification.is_transient();
                self.toast = Some(notification);

                if !is_transient {
                    return Task::none();
                }

                Task::future(async move {
                    tokio::time::sleep(Duration::from_millis(
                        global_constants::TOAST_DISMISS_AFTER_MS,
                    ))
                    .await;
                    PaletteMessage::HideToast(generation)
                })
            }
            HostEvent::CloseMainWindow => match self.main_window_id {
                Some(id) => {
                    log::info!("[APP] Minimizing main window");
                    window::minimize(id, true)
                }
                None => Task::none(),
            },
        }
    }

    fn handle_window_closed(&mut self, id: Id) -> Task<PaletteMessage> {
        if self.main_window_id != Some(id) {
            return Task::none();
        }

        log::info!("[APP] Main window closed, exiting");
        self.main_window_id = None;
        if let Some(controller) = self.controller.as_mut() {
            controller.dispose();
        }

        iced::exit()
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, PaletteMessage> {
        if self.main_window_id != Some(window_id) {
            return text("Loading...").into();
        }

        let body: Element<'_, PaletteMessage> = match (&self.controller, &self.setup_error) {
            (Some(controller), _) => self
                .grid_view
                .render_ui(controller.query(), controller.results(), controller.is_loading())
                .map(PaletteMessage::Grid),
            (None, setup_error) => column![
                text(global_constants::APPLICATION_TITLE).size(28),
                text(setup_error.as_deref().unwrap_or("Search is unavailable")).size(16),
            ]
            .spacing(16)
            .padding(20)
            .into(),
        };

        let mut content = column![body].width(Length::Fill).height(Length::Fill);
        if let Some(notification) = &self.toast {
            content = content.push(container(render_toast(notification)).padding(10));
        }

        let theme = app_theme::get_theme(&self.theme_mode);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| {
                let palette = theme.palette();
                iced::widget::container::Style {
                    background: Some(iced::Background::Color(palette.background)),
                    text_color: Some(palette.text),
                    ..Default::default()
                }
            })
            .into()
    }

    pub fn handle_subscription(&self) -> iced::Subscription<PaletteMessage> {
        iced::event::listen_with(|event, _status, id| {
            if let iced::Event::Window(window::Event::Closed) = event {
                return Some(PaletteMessage::WindowClosed(id));
            }
            None
        })
    }
}
