pub mod catalog;
pub mod errors;
pub mod search;

pub use errors::{ServiceError, ServiceResult};
