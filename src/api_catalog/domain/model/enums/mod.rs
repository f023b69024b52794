pub mod api_catalog_domain_error;
pub mod api_endpoint_order_column;
