pub mod health;
pub mod mock;
