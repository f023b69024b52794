use crate::api_catalog::domain::model::enums::api_catalog_domain_error::ApiCatalogDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ApiPath(String);

impl ApiPath {
    pub fn new(value: String) -> Result<Self, ApiCatalogDomainError> {
        let trimmed = value.trim();
        if !trimmed.starts_with('/') || trimmed.chars().any(char::is_whitespace) {
            return Err(ApiCatalogDomainError::InvalidApiPath);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Wraps a value already persisted in `sys_apis` without re-validating it.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
