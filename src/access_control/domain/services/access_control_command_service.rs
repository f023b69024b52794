use async_trait::async_trait;

use crate::access_control::domain::model::{
    commands::{
        clear_policies_command::ClearPoliciesCommand,
        sync_role_policies_command::SyncRolePoliciesCommand,
        update_api_policies_command::UpdateApiPoliciesCommand,
        update_role_policies_command::UpdateRolePoliciesCommand,
    },
    entities::policy_rule::PolicyRule,
    enums::access_control_domain_error::AccessControlDomainError,
    value_objects::authority_id::AuthorityId,
};

/// Mutations of the policy store.
///
/// `handle_update_role_policies`, `handle_update_api_policies`,
/// `handle_clear_policies` and `handle_reload_policies` leave the enforcer in
/// sync with the store. The remaining store-only operations do not; callers
/// finish a batch of them with `handle_reload_policies`.
#[async_trait]
pub trait AccessControlCommandService: Send + Sync {
    async fn handle_update_role_policies(
        &self,
        command: UpdateRolePoliciesCommand,
    ) -> Result<(), AccessControlDomainError>;

    async fn handle_update_api_policies(
        &self,
        command: UpdateApiPoliciesCommand,
    ) -> Result<(), AccessControlDomainError>;

    async fn handle_clear_policies(
        &self,
        command: ClearPoliciesCommand,
    ) -> Result<bool, AccessControlDomainError>;

    async fn handle_remove_role_policies(
        &self,
        authority_id: &AuthorityId,
    ) -> Result<u64, AccessControlDomainError>;

    async fn handle_add_policies(
        &self,
        rules: Vec<PolicyRule>,
    ) -> Result<(), AccessControlDomainError>;

    async fn handle_sync_role_policies(
        &self,
        command: SyncRolePoliciesCommand,
    ) -> Result<(), AccessControlDomainError>;

    async fn handle_reload_policies(&self) -> Result<(), AccessControlDomainError>;
}
