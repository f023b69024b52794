pub mod access_control_error_response_resource;
pub mod enforce_permission_request_resource;
pub mod update_role_policies_request_resource;
