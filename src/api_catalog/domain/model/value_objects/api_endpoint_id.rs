use crate::api_catalog::domain::model::enums::api_catalog_domain_error::ApiCatalogDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ApiEndpointId(i64);

impl ApiEndpointId {
    pub fn new(value: i64) -> Result<Self, ApiCatalogDomainError> {
        if value <= 0 {
            return Err(ApiCatalogDomainError::InvalidApiId);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
