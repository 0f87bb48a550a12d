pub mod bokun;
pub mod factory;
