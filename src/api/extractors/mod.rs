pub mod experience;
pub mod json;
