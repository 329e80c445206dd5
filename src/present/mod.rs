//! Text helpers for showing catalog entries: durations, dates, icons, labels.

pub mod format;
pub mod timestamps;

pub use format::{format_duration, pick_icon, results_label, slugify};
pub use timestamps::format_updated;
