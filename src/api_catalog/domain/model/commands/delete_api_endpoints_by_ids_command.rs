use crate::api_catalog::domain::model::{
    enums::api_catalog_domain_error::ApiCatalogDomainError,
    value_objects::api_endpoint_id::ApiEndpointId,
};

#[derive(Clone, Debug)]
pub struct DeleteApiEndpointsByIdsCommand {
    ids: Vec<ApiEndpointId>,
}

impl DeleteApiEndpointsByIdsCommand {
    pub fn new(ids: Vec<i64>) -> Result<Self, ApiCatalogDomainError> {
        if ids.is_empty() {
            return Err(ApiCatalogDomainError::InvalidIdList);
        }

        let mut ids = ids
            .into_iter()
            .map(ApiEndpointId::new)
            .collect::<Result<Vec<_>, _>>()?;
        ids.sort();
        ids.dedup();

        Ok(Self { ids })
    }

    pub fn ids(&self) -> &[ApiEndpointId] {
        &self.ids
    }
}
