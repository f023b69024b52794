use crate::api_catalog::domain::model::enums::api_catalog_domain_error::ApiCatalogDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ApiGroup(String);

impl ApiGroup {
    pub fn new(value: String) -> Result<Self, ApiCatalogDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ApiCatalogDomainError::InvalidApiGroup);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
