use std::collections::HashSet;

use crate::access_control::domain::model::value_objects::{
    authority_id::AuthorityId, policy_grant::PolicyGrant,
};

/// A `p` rule as evaluated by the enforcer: subject, object, action.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PolicyRule {
    pub subject: String,
    pub object: String,
    pub action: String,
}

impl PolicyRule {
    pub fn new(subject: String, object: String, action: String) -> Self {
        Self {
            subject,
            object,
            action,
        }
    }

    pub fn for_grant(authority_id: &AuthorityId, grant: &PolicyGrant) -> Self {
        Self::new(
            authority_id.as_subject(),
            grant.path().value().to_string(),
            grant.method().value().to_string(),
        )
    }

    pub fn to_policy_vec(&self) -> Vec<String> {
        vec![
            self.subject.clone(),
            self.object.clone(),
            self.action.clone(),
        ]
    }
}

/// Drops repeated rules, keeping the first occurrence of each.
pub fn deduplicate_rules(rules: impl IntoIterator<Item = PolicyRule>) -> Vec<PolicyRule> {
    let mut seen = HashSet::new();
    rules
        .into_iter()
        .filter(|rule| seen.insert(rule.clone()))
        .collect()
}
