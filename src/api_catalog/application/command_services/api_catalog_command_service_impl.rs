use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::api_catalog::{
    domain::{
        model::{
            commands::{
                create_api_endpoint_command::CreateApiEndpointCommand,
                delete_api_endpoint_command::DeleteApiEndpointCommand,
                delete_api_endpoints_by_ids_command::DeleteApiEndpointsByIdsCommand,
                update_api_endpoint_command::UpdateApiEndpointCommand,
            },
            entities::api_endpoint::ApiEndpoint,
            enums::api_catalog_domain_error::ApiCatalogDomainError,
        },
        services::api_catalog_command_service::ApiCatalogCommandService,
    },
    infrastructure::persistence::repositories::api_endpoint_repository::ApiEndpointRepository,
    interfaces::acl::access_control_facade::{AccessControlFacade, ApiRouteChange},
};

pub struct ApiCatalogCommandServiceImpl {
    repository: Arc<dyn ApiEndpointRepository>,
    access_control_facade: Arc<dyn AccessControlFacade>,
}

impl ApiCatalogCommandServiceImpl {
    pub fn new(
        repository: Arc<dyn ApiEndpointRepository>,
        access_control_facade: Arc<dyn AccessControlFacade>,
    ) -> Self {
        Self {
            repository,
            access_control_facade,
        }
    }

    /// Policy cleanup after a delete never fails the delete itself.
    async fn clear_policies_best_effort(&self, endpoint: &ApiEndpoint) {
        if let Err(error) = self
            .access_control_facade
            .clear_api_policies(endpoint.path(), endpoint.method())
            .await
        {
            warn!(
                api_id = endpoint.id().value(),
                path = endpoint.path().value(),
                method = endpoint.method().value(),
                error = %error,
                "failed to clear policies of deleted api"
            );
        }
    }
}

#[async_trait]
impl ApiCatalogCommandService for ApiCatalogCommandServiceImpl {
    async fn handle_create(
        &self,
        command: CreateApiEndpointCommand,
    ) -> Result<ApiEndpoint, ApiCatalogDomainError> {
        let draft = command.draft();
        if self
            .repository
            .find_by_route(&draft.path, &draft.method)
            .await?
            .is_some()
        {
            return Err(ApiCatalogDomainError::ApiAlreadyExists);
        }

        let endpoint = self.repository.insert(draft).await?;
        info!(
            api_id = endpoint.id().value(),
            path = endpoint.path().value(),
            method = endpoint.method().value(),
            "api created"
        );

        Ok(endpoint)
    }

    async fn handle_delete(
        &self,
        command: DeleteApiEndpointCommand,
    ) -> Result<(), ApiCatalogDomainError> {
        let endpoint = self
            .repository
            .find_by_id(command.id())
            .await?
            .ok_or(ApiCatalogDomainError::ApiNotFound)?;

        if !self.repository.delete(endpoint.id()).await? {
            return Err(ApiCatalogDomainError::ApiNotFound);
        }

        self.clear_policies_best_effort(&endpoint).await;
        Ok(())
    }

    async fn handle_update(
        &self,
        command: UpdateApiEndpointCommand,
    ) -> Result<ApiEndpoint, ApiCatalogDomainError> {
        let mut endpoint = self
            .repository
            .find_by_id(command.id())
            .await?
            .ok_or(ApiCatalogDomainError::ApiNotFound)?;

        let draft = command.draft().clone();
        let route_changed = !endpoint.same_route(&draft.path, &draft.method);

        if route_changed {
            let owner = self
                .repository
                .find_by_route(&draft.path, &draft.method)
                .await?;
            if owner.is_some_and(|other| other.id() != endpoint.id()) {
                return Err(ApiCatalogDomainError::ApiAlreadyExists);
            }
        }

        // Rules follow the route before the record moves; a failure here aborts the update.
        self.access_control_facade
            .move_api_policies(ApiRouteChange {
                old_path: endpoint.path().clone(),
                new_path: draft.path.clone(),
                old_method: endpoint.method().clone(),
                new_method: draft.method.clone(),
            })
            .await?;

        endpoint.apply(draft, Utc::now());
        self.repository.save(&endpoint).await?;

        Ok(endpoint)
    }

    async fn handle_delete_by_ids(
        &self,
        command: DeleteApiEndpointsByIdsCommand,
    ) -> Result<usize, ApiCatalogDomainError> {
        let deleted = self.repository.delete_by_ids(command.ids()).await?;

        for endpoint in &deleted {
            self.clear_policies_best_effort(endpoint).await;
        }

        info!(
            requested = command.ids().len(),
            deleted = deleted.len(),
            "apis deleted by ids"
        );
        Ok(deleted.len())
    }
}
