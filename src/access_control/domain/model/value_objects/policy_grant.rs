use crate::access_control::domain::model::{
    enums::access_control_domain_error::AccessControlDomainError,
    value_objects::{policy_method::PolicyMethod, policy_path::PolicyPath},
};

/// A (path, method) pair granted to a role.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PolicyGrant {
    path: PolicyPath,
    method: PolicyMethod,
}

impl PolicyGrant {
    pub fn new(path: String, method: String) -> Result<Self, AccessControlDomainError> {
        Ok(Self {
            path: PolicyPath::new(path)?,
            method: PolicyMethod::new(method)?,
        })
    }

    pub fn path(&self) -> &PolicyPath {
        &self.path
    }
    pub fn method(&self) -> &PolicyMethod {
        &self.method
    }
}
