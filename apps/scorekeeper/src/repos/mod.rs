//! Persistence seams for the game flow.

pub mod games;
pub mod ids;

pub use games::GameStore;
pub use ids::{IdGenerator, UuidIdGenerator};
