// Adapters layer: wrappers around external systems.

pub mod http;
