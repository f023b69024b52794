use std::sync::Arc;

use async_trait::async_trait;

use crate::access_control::{
    domain::{
        model::{
            enums::access_control_domain_error::AccessControlDomainError,
            queries::{
                enforce_permission_query::EnforcePermissionQuery,
                get_role_policies_query::GetRolePoliciesQuery,
            },
        },
        services::access_control_query_service::{
            AccessControlQueryService, EnforcementDecision, RolePolicy,
        },
    },
    infrastructure::enforcement::casbin_enforcer_provider::CasbinEnforcerProvider,
};

pub struct AccessControlQueryServiceImpl {
    enforcer_provider: Arc<CasbinEnforcerProvider>,
}

impl AccessControlQueryServiceImpl {
    pub fn new(enforcer_provider: Arc<CasbinEnforcerProvider>) -> Self {
        Self { enforcer_provider }
    }
}

#[async_trait]
impl AccessControlQueryService for AccessControlQueryServiceImpl {
    async fn handle_get_role_policies(
        &self,
        query: GetRolePoliciesQuery,
    ) -> Result<Vec<RolePolicy>, AccessControlDomainError> {
        // Field 0 is the subject column.
        let rules = self
            .enforcer_provider
            .filtered_policy(0, vec![query.authority_id().as_subject()])
            .await?;

        Ok(rules
            .into_iter()
            .filter_map(|rule| match rule.as_slice() {
                [_, path, method, ..] => Some(RolePolicy {
                    path: path.clone(),
                    method: method.clone(),
                }),
                _ => None,
            })
            .collect())
    }

    async fn handle_enforce(
        &self,
        query: EnforcePermissionQuery,
    ) -> Result<EnforcementDecision, AccessControlDomainError> {
        let (allowed, cached) = self
            .enforcer_provider
            .enforce(
                &query.authority_id().as_subject(),
                query.path().value(),
                query.method().value(),
            )
            .await?;

        Ok(EnforcementDecision { allowed, cached })
    }
}
