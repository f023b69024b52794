pub mod create_api_endpoint_command;
pub mod delete_api_endpoint_command;
pub mod delete_api_endpoints_by_ids_command;
pub mod update_api_endpoint_command;
