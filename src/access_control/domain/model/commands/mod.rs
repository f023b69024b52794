pub mod clear_policies_command;
pub mod sync_role_policies_command;
pub mod update_api_policies_command;
pub mod update_role_policies_command;
