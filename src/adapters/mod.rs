// Adapters layer: concrete implementations for external systems (http listing, markup sinks).

pub mod http;
pub mod sink;
