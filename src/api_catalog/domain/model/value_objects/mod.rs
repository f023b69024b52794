pub mod api_endpoint_id;
pub mod api_group;
pub mod api_path;
pub mod http_method;
