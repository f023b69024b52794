use std::str::FromStr;

use crate::access_control::domain::model::enums::access_control_domain_error::AccessControlDomainError;

/// Role identifier stored in the `v0` column of policy rows.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AuthorityId(u64);

impl AuthorityId {
    pub fn new(value: u64) -> Result<Self, AccessControlDomainError> {
        if value == 0 {
            return Err(AccessControlDomainError::InvalidAuthorityId);
        }
        Ok(Self(value))
    }

    pub fn as_subject(&self) -> String {
        self.0.to_string()
    }
}

impl FromStr for AuthorityId {
    type Err = AccessControlDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parsed = value
            .trim()
            .parse::<u64>()
            .map_err(|_| AccessControlDomainError::InvalidAuthorityId)?;
        Self::new(parsed)
    }
}
