mod desktop_host;

pub use desktop_host::{DesktopHost, HostEvent, SystemClipboard};
