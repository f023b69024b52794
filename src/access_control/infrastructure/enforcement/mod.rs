pub mod casbin_enforcer_provider;
pub mod casbin_model;
