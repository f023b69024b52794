use crate::api_catalog::domain::model::{
    entities::api_endpoint::ApiEndpointDraft,
    enums::api_catalog_domain_error::ApiCatalogDomainError,
    value_objects::{
        api_endpoint_id::ApiEndpointId, api_group::ApiGroup, api_path::ApiPath,
        http_method::HttpMethod,
    },
};

#[derive(Clone, Debug)]
pub struct UpdateApiEndpointCommand {
    id: ApiEndpointId,
    draft: ApiEndpointDraft,
}

pub struct UpdateApiEndpointCommandParts {
    pub id: i64,
    pub path: String,
    pub method: String,
    pub api_group: String,
    pub description: String,
}

impl UpdateApiEndpointCommand {
    pub fn new(parts: UpdateApiEndpointCommandParts) -> Result<Self, ApiCatalogDomainError> {
        Ok(Self {
            id: ApiEndpointId::new(parts.id)?,
            draft: ApiEndpointDraft {
                path: ApiPath::new(parts.path)?,
                method: HttpMethod::new(parts.method)?,
                api_group: ApiGroup::new(parts.api_group)?,
                description: parts.description.trim().to_string(),
            },
        })
    }

    pub fn id(&self) -> ApiEndpointId {
        self.id
    }
    pub fn draft(&self) -> &ApiEndpointDraft {
        &self.draft
    }
}
