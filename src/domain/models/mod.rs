pub mod availability_rule;
pub mod experience;
pub mod lenient;
pub mod upstream;
