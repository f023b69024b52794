use crate::access_control::domain::model::{
    entities::policy_rule::{PolicyRule, deduplicate_rules},
    enums::access_control_domain_error::AccessControlDomainError,
    value_objects::{authority_id::AuthorityId, policy_grant::PolicyGrant},
};

#[derive(Clone, Debug)]
pub struct UpdateRolePoliciesCommand {
    authority_id: AuthorityId,
    grants: Vec<PolicyGrant>,
}

pub struct PolicyGrantParts {
    pub path: String,
    pub method: String,
}

impl UpdateRolePoliciesCommand {
    pub fn new(
        authority_id: u64,
        grants: Vec<PolicyGrantParts>,
    ) -> Result<Self, AccessControlDomainError> {
        let grants = grants
            .into_iter()
            .map(|grant| PolicyGrant::new(grant.path, grant.method))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            authority_id: AuthorityId::new(authority_id)?,
            grants,
        })
    }

    pub fn authority_id(&self) -> &AuthorityId {
        &self.authority_id
    }
    pub fn grants(&self) -> &[PolicyGrant] {
        &self.grants
    }

    pub fn deduplicated_rules(&self) -> Vec<PolicyRule> {
        deduplicate_rules(
            self.grants
                .iter()
                .map(|grant| PolicyRule::for_grant(&self.authority_id, grant)),
        )
    }
}
