pub mod copy;
pub mod reset;
pub mod template;

pub use copy::{CopyOutcome, copy_optional_dir};
pub use reset::reset_dir;
pub use template::render_template;
