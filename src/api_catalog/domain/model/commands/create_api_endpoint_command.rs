use crate::api_catalog::domain::model::{
    entities::api_endpoint::ApiEndpointDraft,
    enums::api_catalog_domain_error::ApiCatalogDomainError,
    value_objects::{api_group::ApiGroup, api_path::ApiPath, http_method::HttpMethod},
};

#[derive(Clone, Debug)]
pub struct CreateApiEndpointCommand {
    draft: ApiEndpointDraft,
}

impl CreateApiEndpointCommand {
    pub fn new(
        path: String,
        method: String,
        api_group: String,
        description: String,
    ) -> Result<Self, ApiCatalogDomainError> {
        Ok(Self {
            draft: ApiEndpointDraft {
                path: ApiPath::new(path)?,
                method: HttpMethod::new(method)?,
                api_group: ApiGroup::new(api_group)?,
                description: description.trim().to_string(),
            },
        })
    }

    pub fn draft(&self) -> &ApiEndpointDraft {
        &self.draft
    }
}
