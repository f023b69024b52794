pub mod api_endpoint;
