//! Application layer: the interactive exploration
//!
//! This layer drives the domain model from console input.

pub mod error;
pub mod error_ext;
pub mod explorer;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use explorer::{Choice, Ending, Exploration, Explorer};
