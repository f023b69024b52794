use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    access_control::AccessControlServices,
    api_catalog::{
        application::{
            acl::access_control_facade_real_impl::AccessControlFacadeRealImpl,
            command_services::api_catalog_command_service_impl::ApiCatalogCommandServiceImpl,
            query_services::api_catalog_query_service_impl::ApiCatalogQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::sqlx_api_endpoint_repository_impl::SqlxApiEndpointRepositoryImpl,
        interfaces::rest::controllers::api_catalog_rest_controller::{
            ApiCatalogRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_api_catalog_router(pool: PgPool, access_control: &AccessControlServices) -> Router {
    let repository = Arc::new(SqlxApiEndpointRepositoryImpl::new(pool));
    let access_control_facade = Arc::new(AccessControlFacadeRealImpl::new(
        access_control.facade.clone(),
    ));

    let command_service = Arc::new(ApiCatalogCommandServiceImpl::new(
        repository.clone(),
        access_control_facade,
    ));
    let query_service = Arc::new(ApiCatalogQueryServiceImpl::new(repository));

    router(ApiCatalogRestControllerState {
        command_service,
        query_service,
    })
}
