//! Per-workflow step lists. Each function is pure: it only describes the
//! invocations and file operations, [`crate::core::steps::execute`] runs them.

pub mod assets;
pub mod ci;
pub mod readme;
pub mod serve;
pub mod web;

pub use assets::download_assets;
pub use ci::ci;
pub use readme::update_readme;
pub use serve::serve;
pub use web::web_bin;
