pub mod availability_service;
pub mod rule_merge;
