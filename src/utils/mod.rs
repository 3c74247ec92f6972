//! Utility module - terminal styling and progress bars

mod progress;
mod styling;

pub use progress::create_progress_bar;
pub use styling::{print_error, print_examples, print_info, print_success};
