//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod list_name;
pub mod entry;

pub use validation::ValidationError;
pub use list_name::ListName;
pub use entry::FileEntry;
