use crate::access_control::domain::model::{
    entities::policy_rule::{PolicyRule, deduplicate_rules},
    enums::access_control_domain_error::AccessControlDomainError,
    value_objects::authority_id::AuthorityId,
};

/// Store-only replacement of a role's rows. The enforcer is not reloaded.
#[derive(Clone, Debug)]
pub struct SyncRolePoliciesCommand {
    authority_id: AuthorityId,
    rules: Vec<PolicyRule>,
}

impl SyncRolePoliciesCommand {
    pub fn new(
        authority_id: u64,
        rules: Vec<[String; 3]>,
    ) -> Result<Self, AccessControlDomainError> {
        let authority_id = AuthorityId::new(authority_id)?;
        let expected_subject = authority_id.as_subject();
        let rules = rules
            .into_iter()
            .map(|[subject, object, action]| {
                if subject.trim().is_empty() || object.trim().is_empty() || action.trim().is_empty()
                {
                    return Err(AccessControlDomainError::InvalidPolicyFilter);
                }
                // Only rows of the synced role are deleted, so only its rows may be inserted.
                if subject != expected_subject {
                    return Err(AccessControlDomainError::PolicySubjectMismatch);
                }
                Ok(PolicyRule::new(subject, object, action))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            authority_id,
            rules: deduplicate_rules(rules),
        })
    }

    pub fn authority_id(&self) -> &AuthorityId {
        &self.authority_id
    }
    pub fn rules(&self) -> &[PolicyRule] {
        &self.rules
    }
}
