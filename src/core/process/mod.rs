pub mod error;
pub mod runner;
pub mod spec;

pub use error::StepError;
pub use runner::{ProcessRunner, Runner};
pub use spec::CommandSpec;
