#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod adapter;
mod classifier;
mod editor;
mod error;
pub mod filter;
mod format;
pub mod generator;
pub mod level;
mod maxes;
mod name;
mod program;
mod service;
mod settings;
mod template;
mod validation;

pub use adapter::adapt_to_days;
pub use classifier::*;
pub use editor::*;
pub use error::*;
pub use filter::{exclude_accessories, filter_by_lift_type, is_exercise_for_lift_type};
pub use format::compact_week;
pub use generator::{GenerationOptions, generate, normalize_percent};
pub use level::{estimate_level, recommend_template};
pub use maxes::*;
pub use name::*;
pub use program::*;
pub use service::*;
pub use settings::*;
pub use template::*;
pub use validation::*;
