pub mod health;
pub mod protocols;
pub mod sessions;
