pub mod calculator;

pub use crate::domain::model::{TimePoint, TimeSpan};
pub use crate::utils::error::Result;
