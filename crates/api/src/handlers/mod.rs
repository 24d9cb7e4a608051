//! HTTP request handlers, one module per resource.

pub mod batch;
pub mod orders;
pub mod printers;
pub mod rates;
pub mod settings;
