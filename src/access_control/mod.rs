use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    access_control::{
        application::{
            acl::access_control_facade_impl::AccessControlFacadeImpl,
            command_services::access_control_command_service_impl::AccessControlCommandServiceImpl,
            query_services::access_control_query_service_impl::AccessControlQueryServiceImpl,
        },
        domain::services::{
            access_control_command_service::AccessControlCommandService,
            access_control_query_service::AccessControlQueryService,
        },
        infrastructure::{
            enforcement::casbin_enforcer_provider::CasbinEnforcerProvider,
            persistence::repositories::postgres::sqlx_casbin_rule_repository_impl::SqlxCasbinRuleRepositoryImpl,
        },
        interfaces::{
            acl::access_control_facade::AccessControlFacade,
            rest::controllers::access_control_rest_controller::{
                AccessControlRestControllerState, router,
            },
        },
    },
    config::app_config::AppConfig,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

/// Services of the access-control context. One instance per process: the
/// enforcer provider inside is the single shared enforcer.
#[derive(Clone)]
pub struct AccessControlServices {
    pub command_service: Arc<dyn AccessControlCommandService>,
    pub query_service: Arc<dyn AccessControlQueryService>,
    pub facade: Arc<dyn AccessControlFacade>,
}

pub fn build_access_control_services(pool: PgPool, config: &AppConfig) -> AccessControlServices {
    let rule_repository = Arc::new(SqlxCasbinRuleRepositoryImpl::new(pool));
    let enforcer_provider = Arc::new(CasbinEnforcerProvider::new_with_cache_ttl(
        rule_repository.clone(),
        config.casbin_cache_ttl(),
    ));

    let command_service: Arc<dyn AccessControlCommandService> = Arc::new(
        AccessControlCommandServiceImpl::new(rule_repository, enforcer_provider.clone()),
    );
    let query_service: Arc<dyn AccessControlQueryService> =
        Arc::new(AccessControlQueryServiceImpl::new(enforcer_provider));
    let facade: Arc<dyn AccessControlFacade> =
        Arc::new(AccessControlFacadeImpl::new(command_service.clone()));

    AccessControlServices {
        command_service,
        query_service,
        facade,
    }
}

pub fn build_access_control_router(services: &AccessControlServices) -> Router {
    router(AccessControlRestControllerState {
        command_service: services.command_service.clone(),
        query_service: services.query_service.clone(),
    })
}
