pub mod api_catalog_command_service;
pub mod api_catalog_query_service;
