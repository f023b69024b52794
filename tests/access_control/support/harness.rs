use std::{sync::Arc, time::Duration};

use console_admin_api::access_control::{
    application::{
        acl::access_control_facade_impl::AccessControlFacadeImpl,
        command_services::access_control_command_service_impl::AccessControlCommandServiceImpl,
        query_services::access_control_query_service_impl::AccessControlQueryServiceImpl,
    },
    domain::services::access_control_command_service::AccessControlCommandService,
    infrastructure::enforcement::casbin_enforcer_provider::CasbinEnforcerProvider,
};

use super::fakes::FakeCasbinRuleRepository;

pub struct AccessControlTestHarness {
    pub rule_repository: Arc<FakeCasbinRuleRepository>,
    pub enforcer_provider: Arc<CasbinEnforcerProvider>,
    pub command_service: Arc<AccessControlCommandServiceImpl>,
    pub query_service: AccessControlQueryServiceImpl,
    pub facade: AccessControlFacadeImpl,
}

pub fn create_harness(rule_repository: FakeCasbinRuleRepository) -> AccessControlTestHarness {
    let rule_repository = Arc::new(rule_repository);
    let enforcer_provider = Arc::new(CasbinEnforcerProvider::new_with_cache_ttl(
        rule_repository.clone(),
        Duration::from_secs(60),
    ));

    let command_service = Arc::new(AccessControlCommandServiceImpl::new(
        rule_repository.clone(),
        enforcer_provider.clone(),
    ));
    let query_service = AccessControlQueryServiceImpl::new(enforcer_provider.clone());
    let facade_command_service: Arc<dyn AccessControlCommandService> = command_service.clone();
    let facade = AccessControlFacadeImpl::new(facade_command_service);

    AccessControlTestHarness {
        rule_repository,
        enforcer_provider,
        command_service,
        query_service,
        facade,
    }
}
