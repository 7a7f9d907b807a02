pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use adapters::dispatch::SystemLinkDispatcher;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::enrollment::EnrollmentFlow;
pub use config::AppConfig;
pub use crate::core::{catalog::Catalog, engine::QuoteEngine};
pub use domain::model::{ContactInfo, EnrollmentEmail, Money, Quote, Selection};
pub use utils::error::{QuoteError, Result};
