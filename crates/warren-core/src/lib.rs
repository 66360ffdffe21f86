//! Warren Core — domain models, repository traits, and the error
//! taxonomy shared by every crate in the workspace.

pub mod error;
pub mod models;
pub mod repository;

pub use error::{WarrenError, WarrenResult};
