pub const APPLICATION_NAME: &str = "image-search-palette";
pub const APPLICATION_TITLE: &str = "Image Search";

pub const DEFAULT_IMAGE_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";
pub const SEARCH_RESULT_COUNT: u32 = 10;
pub const SEARCH_DEBOUNCE_MS: u64 = 500;
pub const GRID_COLUMN_COUNT: usize = 4;

pub const DEFAULT_TEMP_FILE_EXTENSION: &str = ".png";

pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const ENV_API_KEY: &str = "IMAGE_SEARCH_API_KEY";
pub const ENV_CX_ID: &str = "IMAGE_SEARCH_CX_ID";

pub const SEARCH_BAR_PLACEHOLDER: &str = "Search for images...";

pub const TOAST_COPYING_IMAGE: &str = "Copying image to clipboard...";
pub const TOAST_IMAGE_COPIED: &str = "Image copied to clipboard";
pub const TOAST_COPY_IMAGE_FAILED: &str = "Error copying image to clipboard";
pub const TOAST_URL_COPIED: &str = "Copied image URL";
pub const TOAST_COPY_URL_FAILED: &str = "Error copying image URL";
pub const TOAST_OPEN_BROWSER_FAILED: &str = "Error opening image in browser";
pub const TOAST_DISMISS_AFTER_MS: u64 = 2000;

pub const MAIN_WINDOW_WIDTH: f32 = 960.0;
pub const MAIN_WINDOW_HEIGHT: f32 = 680.0;
pub const THUMBNAIL_HEIGHT: f32 = 150.0;
