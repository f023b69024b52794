pub mod api_catalog_command_service_impl;
