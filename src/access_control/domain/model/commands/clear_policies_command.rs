use crate::access_control::domain::model::enums::access_control_domain_error::AccessControlDomainError;

/// Number of positional value columns (`v0`..`v5`) in the rule table.
pub const POLICY_VALUE_COLUMNS: usize = 6;

/// Positional filter over `p` rules. An empty value matches anything in its
/// column; at least one value must be non-empty.
#[derive(Clone, Debug)]
pub struct ClearPoliciesCommand {
    field_index: usize,
    field_values: Vec<String>,
}

impl ClearPoliciesCommand {
    pub fn new(
        field_index: usize,
        field_values: Vec<String>,
    ) -> Result<Self, AccessControlDomainError> {
        if field_values.is_empty()
            || field_index + field_values.len() > POLICY_VALUE_COLUMNS
            || field_values.iter().all(|value| value.is_empty())
        {
            return Err(AccessControlDomainError::InvalidPolicyFilter);
        }

        Ok(Self {
            field_index,
            field_values,
        })
    }

    pub fn field_index(&self) -> usize {
        self.field_index
    }
    pub fn field_values(&self) -> &[String] {
        &self.field_values
    }
}
