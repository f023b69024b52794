pub mod api_catalog_query_service_impl;
