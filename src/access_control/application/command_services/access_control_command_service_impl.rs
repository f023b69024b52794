use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::access_control::{
    domain::{
        model::{
            commands::{
                clear_policies_command::ClearPoliciesCommand,
                sync_role_policies_command::SyncRolePoliciesCommand,
                update_api_policies_command::UpdateApiPoliciesCommand,
                update_role_policies_command::UpdateRolePoliciesCommand,
            },
            entities::policy_rule::{PolicyRule, deduplicate_rules},
            enums::access_control_domain_error::AccessControlDomainError,
            value_objects::authority_id::AuthorityId,
        },
        services::access_control_command_service::AccessControlCommandService,
    },
    infrastructure::{
        enforcement::casbin_enforcer_provider::CasbinEnforcerProvider,
        persistence::repositories::casbin_rule_repository::{
            CasbinRuleRecord, CasbinRuleRepository, POLICY_PTYPE,
        },
    },
};

pub struct AccessControlCommandServiceImpl {
    rule_repository: Arc<dyn CasbinRuleRepository>,
    enforcer_provider: Arc<CasbinEnforcerProvider>,
}

impl AccessControlCommandServiceImpl {
    pub fn new(
        rule_repository: Arc<dyn CasbinRuleRepository>,
        enforcer_provider: Arc<CasbinEnforcerProvider>,
    ) -> Self {
        Self {
            rule_repository,
            enforcer_provider,
        }
    }

    fn to_records(rules: &[PolicyRule]) -> Vec<CasbinRuleRecord> {
        rules.iter().map(CasbinRuleRecord::policy).collect()
    }
}

#[async_trait]
impl AccessControlCommandService for AccessControlCommandServiceImpl {
    async fn handle_update_role_policies(
        &self,
        command: UpdateRolePoliciesCommand,
    ) -> Result<(), AccessControlDomainError> {
        let subject = command.authority_id().as_subject();
        let rules = command.deduplicated_rules();

        let inserted = self
            .rule_repository
            .replace_subject_rules(&subject, &Self::to_records(&rules))
            .await?;

        self.enforcer_provider.reload().await?;

        if (inserted as usize) < rules.len() {
            warn!(
                authority_id = %subject,
                expected = rules.len(),
                inserted,
                "role policy replacement inserted fewer rules than requested"
            );
            return Err(AccessControlDomainError::PolicyInsertRejected);
        }

        info!(authority_id = %subject, rules = rules.len(), "role policies replaced");
        Ok(())
    }

    async fn handle_update_api_policies(
        &self,
        command: UpdateApiPoliciesCommand,
    ) -> Result<(), AccessControlDomainError> {
        if command.is_noop() {
            return Ok(());
        }

        let updated = self
            .rule_repository
            .update_object_action(
                command.old_path().value(),
                command.old_method().value(),
                command.new_path().value(),
                command.new_method().value(),
            )
            .await?;

        self.enforcer_provider.reload().await?;

        info!(
            old_path = command.old_path().value(),
            new_path = command.new_path().value(),
            updated,
            "api policies rewritten"
        );
        Ok(())
    }

    async fn handle_clear_policies(
        &self,
        command: ClearPoliciesCommand,
    ) -> Result<bool, AccessControlDomainError> {
        let removed = self
            .rule_repository
            .remove_filtered(POLICY_PTYPE, command.field_index(), command.field_values())
            .await?;

        self.enforcer_provider.reload().await?;

        Ok(removed > 0)
    }

    async fn handle_remove_role_policies(
        &self,
        authority_id: &AuthorityId,
    ) -> Result<u64, AccessControlDomainError> {
        self.rule_repository
            .remove_filtered(POLICY_PTYPE, 0, &[authority_id.as_subject()])
            .await
    }

    async fn handle_add_policies(
        &self,
        rules: Vec<PolicyRule>,
    ) -> Result<(), AccessControlDomainError> {
        let rules = deduplicate_rules(rules);
        self.rule_repository
            .insert_rules(&Self::to_records(&rules))
            .await?;
        Ok(())
    }

    async fn handle_sync_role_policies(
        &self,
        command: SyncRolePoliciesCommand,
    ) -> Result<(), AccessControlDomainError> {
        self.rule_repository
            .replace_subject_rules(
                &command.authority_id().as_subject(),
                &Self::to_records(command.rules()),
            )
            .await?;
        Ok(())
    }

    async fn handle_reload_policies(&self) -> Result<(), AccessControlDomainError> {
        self.enforcer_provider.reload().await
    }
}
