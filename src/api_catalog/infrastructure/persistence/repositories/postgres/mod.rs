pub mod sqlx_api_endpoint_repository_impl;
