//! Catalog/Order Store

pub mod catalog;
pub mod errors;
pub mod models;
pub mod service;

pub use errors::StoreServiceError;
pub use service::*;
