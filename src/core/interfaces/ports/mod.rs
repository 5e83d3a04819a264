mod host_capabilities;

pub use host_capabilities::HostCapabilities;
