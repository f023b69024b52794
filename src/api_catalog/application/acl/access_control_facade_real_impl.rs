use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    access_control::interfaces::acl::access_control_facade::{
        AccessControlFacade as AccessControlBcFacade, ApiPolicyRenameRequest,
    },
    api_catalog::{
        domain::model::{
            enums::api_catalog_domain_error::ApiCatalogDomainError,
            value_objects::{api_path::ApiPath, http_method::HttpMethod},
        },
        interfaces::acl::access_control_facade::{AccessControlFacade, ApiRouteChange},
    },
};

pub struct AccessControlFacadeRealImpl {
    facade: Arc<dyn AccessControlBcFacade>,
}

impl AccessControlFacadeRealImpl {
    pub fn new(facade: Arc<dyn AccessControlBcFacade>) -> Self {
        Self { facade }
    }
}

#[async_trait]
impl AccessControlFacade for AccessControlFacadeRealImpl {
    async fn clear_api_policies(
        &self,
        path: &ApiPath,
        method: &HttpMethod,
    ) -> Result<bool, ApiCatalogDomainError> {
        self.facade
            .clear_api_policies(path.value().to_string(), method.value().to_string())
            .await
            .map_err(|e| ApiCatalogDomainError::InfrastructureError(e.to_string()))
    }

    async fn move_api_policies(
        &self,
        change: ApiRouteChange,
    ) -> Result<(), ApiCatalogDomainError> {
        self.facade
            .rename_api_policies(ApiPolicyRenameRequest {
                old_path: change.old_path.value().to_string(),
                new_path: change.new_path.value().to_string(),
                old_method: change.old_method.value().to_string(),
                new_method: change.new_method.value().to_string(),
            })
            .await
            .map_err(|e| ApiCatalogDomainError::InfrastructureError(e.to_string()))
    }
}
