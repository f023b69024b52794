use async_trait::async_trait;

use crate::access_control::domain::model::{
    entities::policy_rule::PolicyRule, enums::access_control_domain_error::AccessControlDomainError,
};

pub const POLICY_PTYPE: &str = "p";

/// One row of the generic `casbin_rule` table.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CasbinRuleRecord {
    pub ptype: String,
    pub v0: String,
    pub v1: String,
    pub v2: String,
    pub v3: String,
    pub v4: String,
    pub v5: String,
}

impl CasbinRuleRecord {
    pub fn policy(rule: &PolicyRule) -> Self {
        Self {
            ptype: POLICY_PTYPE.to_string(),
            v0: rule.subject.clone(),
            v1: rule.object.clone(),
            v2: rule.action.clone(),
            ..Default::default()
        }
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(&self.v0),
            1 => Some(&self.v1),
            2 => Some(&self.v2),
            3 => Some(&self.v3),
            4 => Some(&self.v4),
            5 => Some(&self.v5),
            _ => None,
        }
    }

    /// Positional match where an empty filter value is a wildcard.
    pub fn matches_filter(&self, ptype: &str, field_index: usize, field_values: &[String]) -> bool {
        self.ptype == ptype
            && field_values
                .iter()
                .enumerate()
                .filter(|(_, value)| !value.is_empty())
                .all(|(offset, value)| self.value(field_index + offset) == Some(value.as_str()))
    }

    pub fn to_policy_rule(&self) -> Option<PolicyRule> {
        if self.ptype != POLICY_PTYPE {
            return None;
        }
        Some(PolicyRule::new(
            self.v0.clone(),
            self.v1.clone(),
            self.v2.clone(),
        ))
    }
}

#[async_trait]
pub trait CasbinRuleRepository: Send + Sync {
    async fn load_all(&self) -> Result<Vec<CasbinRuleRecord>, AccessControlDomainError>;

    async fn insert_rules(
        &self,
        rules: &[CasbinRuleRecord],
    ) -> Result<u64, AccessControlDomainError>;

    async fn remove_filtered(
        &self,
        ptype: &str,
        field_index: usize,
        field_values: &[String],
    ) -> Result<u64, AccessControlDomainError>;

    /// Deletes every `p` row of `subject` and inserts `rules` in one transaction.
    async fn replace_subject_rules(
        &self,
        subject: &str,
        rules: &[CasbinRuleRecord],
    ) -> Result<u64, AccessControlDomainError>;

    async fn update_object_action(
        &self,
        old_object: &str,
        old_action: &str,
        new_object: &str,
        new_action: &str,
    ) -> Result<u64, AccessControlDomainError>;
}
