// Adapters layer: concrete implementations of domain ports for external input shapes.

pub mod form;
