use crate::api_catalog::domain::model::enums::api_catalog_domain_error::ApiCatalogDomainError;

const ALLOWED_METHODS: [&str; 7] = ["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"];

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct HttpMethod(String);

impl HttpMethod {
    pub fn new(value: String) -> Result<Self, ApiCatalogDomainError> {
        let normalized = value.trim().to_uppercase();
        if !ALLOWED_METHODS.contains(&normalized.as_str()) {
            return Err(ApiCatalogDomainError::InvalidHttpMethod);
        }
        Ok(Self(normalized))
    }

    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
