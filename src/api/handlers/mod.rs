pub mod availability;
pub mod experience;
pub mod health;
