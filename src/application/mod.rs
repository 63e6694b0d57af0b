// Application layer - validation and the three balance operations.
// Clients (CLI, tests) call RewardsService; it is the only path to the repository.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
