use crate::api_catalog::domain::model::{
    enums::api_catalog_domain_error::ApiCatalogDomainError,
    value_objects::api_endpoint_id::ApiEndpointId,
};

#[derive(Clone, Debug)]
pub struct DeleteApiEndpointCommand {
    id: ApiEndpointId,
}

impl DeleteApiEndpointCommand {
    pub fn new(id: i64) -> Result<Self, ApiCatalogDomainError> {
        Ok(Self {
            id: ApiEndpointId::new(id)?,
        })
    }

    pub fn id(&self) -> ApiEndpointId {
        self.id
    }
}
