pub mod get_api_endpoint_by_id_query;
pub mod list_api_endpoints_query;
