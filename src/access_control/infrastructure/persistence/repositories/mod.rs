pub mod casbin_rule_repository;
pub mod postgres;
