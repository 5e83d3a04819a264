mod image_downloader;
mod image_search_provider;

pub use image_downloader::ImageDownloader;
pub use image_search_provider::ImageSearchProvider;
