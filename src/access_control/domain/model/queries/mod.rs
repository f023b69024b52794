pub mod enforce_permission_query;
pub mod get_role_policies_query;
