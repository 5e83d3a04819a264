mod image_result;
mod notification;
mod search_preferences;

pub use image_result::{ImageResult, SearchResponse};
pub use notification::{Notification, NotificationStyle};
pub use search_preferences::{SearchCredentials, SearchPreferences, ThemeMode};
