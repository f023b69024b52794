use async_trait::async_trait;

use crate::api_catalog::domain::model::{
    commands::{
        create_api_endpoint_command::CreateApiEndpointCommand,
        delete_api_endpoint_command::DeleteApiEndpointCommand,
        delete_api_endpoints_by_ids_command::DeleteApiEndpointsByIdsCommand,
        update_api_endpoint_command::UpdateApiEndpointCommand,
    },
    entities::api_endpoint::ApiEndpoint,
    enums::api_catalog_domain_error::ApiCatalogDomainError,
};

#[async_trait]
pub trait ApiCatalogCommandService: Send + Sync {
    async fn handle_create(
        &self,
        command: CreateApiEndpointCommand,
    ) -> Result<ApiEndpoint, ApiCatalogDomainError>;

    async fn handle_delete(
        &self,
        command: DeleteApiEndpointCommand,
    ) -> Result<(), ApiCatalogDomainError>;

    async fn handle_update(
        &self,
        command: UpdateApiEndpointCommand,
    ) -> Result<ApiEndpoint, ApiCatalogDomainError>;

    /// Returns the number of records actually deleted.
    async fn handle_delete_by_ids(
        &self,
        command: DeleteApiEndpointsByIdsCommand,
    ) -> Result<usize, ApiCatalogDomainError>;
}
