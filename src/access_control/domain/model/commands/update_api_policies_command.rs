use crate::access_control::domain::model::{
    enums::access_control_domain_error::AccessControlDomainError,
    value_objects::{policy_method::PolicyMethod, policy_path::PolicyPath},
};

/// Rewrites the object/action of every rule that references the old pair.
#[derive(Clone, Debug)]
pub struct UpdateApiPoliciesCommand {
    old_path: PolicyPath,
    new_path: PolicyPath,
    old_method: PolicyMethod,
    new_method: PolicyMethod,
}

impl UpdateApiPoliciesCommand {
    pub fn new(
        old_path: String,
        new_path: String,
        old_method: String,
        new_method: String,
    ) -> Result<Self, AccessControlDomainError> {
        Ok(Self {
            old_path: PolicyPath::new(old_path)?,
            new_path: PolicyPath::new(new_path)?,
            old_method: PolicyMethod::new(old_method)?,
            new_method: PolicyMethod::new(new_method)?,
        })
    }

    pub fn old_path(&self) -> &PolicyPath {
        &self.old_path
    }
    pub fn new_path(&self) -> &PolicyPath {
        &self.new_path
    }
    pub fn old_method(&self) -> &PolicyMethod {
        &self.old_method
    }
    pub fn new_method(&self) -> &PolicyMethod {
        &self.new_method
    }

    pub fn is_noop(&self) -> bool {
        self.old_path == self.new_path && self.old_method == self.new_method
    }
}
