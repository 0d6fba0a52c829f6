//! Services module
//!
//! Business logic services that coordinate between commands and repository.

pub mod export;
pub mod notebook;
pub mod roles;
pub mod stamps;

pub use export::ExportService;
pub use notebook::NotebookService;
pub use roles::{Principal, Role, RoleService};
pub use stamps::StampService;
