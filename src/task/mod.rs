//! Task store module
//!
//! Read-only access to a directory of markdown task files:
//! - One subdirectory per category (current, completed, projects)
//! - Parse task files into records
//! - Render listings and statistics for chat display

pub mod error;
pub mod format;
pub mod locale;
pub mod model;
pub mod parser;
pub mod scanner;
pub mod stats;

pub use error::TaskError;
pub use format::{format_category, format_stats, FormatMode};
pub use locale::{Labels, Locale, Messages};
pub use model::{Category, TaskRecord};
pub use parser::{parse_task, read_task};
pub use scanner::TaskRepository;
pub use stats::{compute_stats, Stats};
