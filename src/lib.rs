pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::calculator::{full_days_between, full_weeks_between};
pub use crate::domain::model::{TimePoint, TimeSpan};
pub use crate::utils::error::{Result, SpanError};
