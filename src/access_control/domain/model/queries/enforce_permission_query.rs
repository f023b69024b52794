use crate::access_control::domain::model::{
    enums::access_control_domain_error::AccessControlDomainError,
    value_objects::{authority_id::AuthorityId, policy_method::PolicyMethod, policy_path::PolicyPath},
};

#[derive(Clone, Debug)]
pub struct EnforcePermissionQuery {
    authority_id: AuthorityId,
    path: PolicyPath,
    method: PolicyMethod,
}

impl EnforcePermissionQuery {
    pub fn new(
        authority_id: u64,
        path: String,
        method: String,
    ) -> Result<Self, AccessControlDomainError> {
        Ok(Self {
            authority_id: AuthorityId::new(authority_id)?,
            path: PolicyPath::new(path)?,
            method: PolicyMethod::new(method)?,
        })
    }

    pub fn authority_id(&self) -> &AuthorityId {
        &self.authority_id
    }
    pub fn path(&self) -> &PolicyPath {
        &self.path
    }
    pub fn method(&self) -> &PolicyMethod {
        &self.method
    }
}
