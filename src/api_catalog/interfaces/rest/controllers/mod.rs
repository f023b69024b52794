pub mod api_catalog_rest_controller;
