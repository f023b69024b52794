use crate::access_control::domain::model::enums::access_control_domain_error::AccessControlDomainError;

// Compared verbatim by the matcher (`r.act == p.act`), so no case folding here.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PolicyMethod(String);

impl PolicyMethod {
    pub fn new(value: String) -> Result<Self, AccessControlDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(AccessControlDomainError::InvalidPolicyMethod);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
