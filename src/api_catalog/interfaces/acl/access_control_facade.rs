use async_trait::async_trait;

use crate::api_catalog::domain::model::{
    enums::api_catalog_domain_error::ApiCatalogDomainError,
    value_objects::{api_path::ApiPath, http_method::HttpMethod},
};

#[derive(Clone, Debug)]
pub struct ApiRouteChange {
    pub old_path: ApiPath,
    pub new_path: ApiPath,
    pub old_method: HttpMethod,
    pub new_method: HttpMethod,
}

#[async_trait]
pub trait AccessControlFacade: Send + Sync {
    /// Drops every policy rule that grants `method` on `path`.
    async fn clear_api_policies(
        &self,
        path: &ApiPath,
        method: &HttpMethod,
    ) -> Result<bool, ApiCatalogDomainError>;

    async fn move_api_policies(&self, change: ApiRouteChange)
    -> Result<(), ApiCatalogDomainError>;
}
