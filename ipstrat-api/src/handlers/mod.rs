pub mod agents;
pub mod analyze;
pub mod chat;
pub mod health;
pub mod index;
