pub mod authority_id;
pub mod policy_grant;
pub mod policy_method;
pub mod policy_path;
