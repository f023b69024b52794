pub mod api_endpoint_request_resource;
pub mod api_endpoint_resource;
pub mod error_response_resource;
pub mod list_api_endpoints_query_resource;
