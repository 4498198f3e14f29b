//! Common reusable UI components shared across pages

pub mod forecast_card;
pub mod message;

pub use forecast_card::ForecastCard;
pub use message::{ConfigErrorBanner, ErrorMessage};
