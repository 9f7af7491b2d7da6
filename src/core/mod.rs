pub mod fs;
pub mod plan;
pub mod process;
pub mod steps;
