mod diet;
mod fetch_error;
pub mod fetcher_config;
mod js_error;
mod meal_key;
mod meal_selection;

pub use diet::*;
pub use fetch_error::FetchError;
pub use fetcher_config::FetcherConfig;
pub use js_error::JsError;
pub use meal_key::MealKey;
pub use meal_selection::MealSelection;
