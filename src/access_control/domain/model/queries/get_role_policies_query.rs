use crate::access_control::domain::model::{
    enums::access_control_domain_error::AccessControlDomainError,
    value_objects::authority_id::AuthorityId,
};

#[derive(Clone, Debug)]
pub struct GetRolePoliciesQuery {
    authority_id: AuthorityId,
}

impl GetRolePoliciesQuery {
    pub fn new(authority_id: u64) -> Result<Self, AccessControlDomainError> {
        Ok(Self {
            authority_id: AuthorityId::new(authority_id)?,
        })
    }

    pub fn authority_id(&self) -> &AuthorityId {
        &self.authority_id
    }
}
