use std::str::FromStr;

use super::api_catalog_domain_error::ApiCatalogDomainError;

/// Columns a listing may be sorted by. Anything else is rejected before it
/// can reach the SQL text.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ApiEndpointOrderColumn {
    Id,
    Path,
    #[default]
    ApiGroup,
    Description,
    Method,
}

impl ApiEndpointOrderColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Path => "path",
            Self::ApiGroup => "api_group",
            Self::Description => "description",
            Self::Method => "method",
        }
    }
}

impl FromStr for ApiEndpointOrderColumn {
    type Err = ApiCatalogDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "id" => Ok(Self::Id),
            "path" => Ok(Self::Path),
            "api_group" => Ok(Self::ApiGroup),
            "description" => Ok(Self::Description),
            "method" => Ok(Self::Method),
            other => Err(ApiCatalogDomainError::InvalidOrderColumn(other.to_string())),
        }
    }
}
