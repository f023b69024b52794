use async_trait::async_trait;

use crate::access_control::domain::model::{
    enums::access_control_domain_error::AccessControlDomainError,
    queries::{
        enforce_permission_query::EnforcePermissionQuery,
        get_role_policies_query::GetRolePoliciesQuery,
    },
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RolePolicy {
    pub path: String,
    pub method: String,
}

#[derive(Clone, Debug)]
pub struct EnforcementDecision {
    pub allowed: bool,
    pub cached: bool,
}

#[async_trait]
pub trait AccessControlQueryService: Send + Sync {
    async fn handle_get_role_policies(
        &self,
        query: GetRolePoliciesQuery,
    ) -> Result<Vec<RolePolicy>, AccessControlDomainError>;

    async fn handle_enforce(
        &self,
        query: EnforcePermissionQuery,
    ) -> Result<EnforcementDecision, AccessControlDomainError>;
}
