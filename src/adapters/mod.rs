mod google_custom_search_provider;
mod http_image_downloader;

pub use google_custom_search_provider::GoogleCustomSearchProvider;
pub use http_image_downloader::HttpImageDownloader;
