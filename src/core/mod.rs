pub mod catalog;
pub mod engine;
pub mod message;
pub mod pricing;

pub use crate::domain::model::{Quote, Selection};
pub use crate::domain::ports::{LinkDispatcher, ProfileProvider};
pub use crate::utils::error::Result;
