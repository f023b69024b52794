pub mod api_endpoint_repository;
pub mod postgres;
