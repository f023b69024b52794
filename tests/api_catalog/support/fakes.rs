use std::{collections::BTreeMap, sync::Mutex};

use async_trait::async_trait;
use chrono::Utc;
use console_admin_api::api_catalog::{
    domain::model::{
        entities::api_endpoint::{ApiEndpoint, ApiEndpointDraft},
        enums::{
            api_catalog_domain_error::ApiCatalogDomainError,
            api_endpoint_order_column::ApiEndpointOrderColumn,
        },
        queries::list_api_endpoints_query::ListApiEndpointsQuery,
        value_objects::{api_endpoint_id::ApiEndpointId, api_path::ApiPath, http_method::HttpMethod},
    },
    infrastructure::persistence::repositories::api_endpoint_repository::ApiEndpointRepository,
    interfaces::acl::access_control_facade::{AccessControlFacade, ApiRouteChange},
};

#[derive(Default)]
struct FakeApiEndpointRepositoryState {
    entries: BTreeMap<i64, ApiEndpoint>,
    next_id: i64,
    saved_ids: Vec<i64>,
}

pub struct FakeApiEndpointRepository {
    state: Mutex<FakeApiEndpointRepositoryState>,
}

impl FakeApiEndpointRepository {
    pub fn with_entries(entries: Vec<ApiEndpoint>) -> Self {
        let mut map = BTreeMap::new();
        for endpoint in entries {
            map.insert(endpoint.id().value(), endpoint);
        }
        let next_id = map.keys().max().copied().unwrap_or(0) + 1;

        Self {
            state: Mutex::new(FakeApiEndpointRepositoryState {
                entries: map,
                next_id,
                saved_ids: Vec::new(),
            }),
        }
    }

    pub fn get(&self, id: i64) -> Option<ApiEndpoint> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .entries
            .get(&id)
            .cloned()
    }

    pub fn ids(&self) -> Vec<i64> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .entries
            .keys()
            .copied()
            .collect()
    }

    pub fn saved_ids(&self) -> Vec<i64> {
        self.state.lock().expect("mutex poisoned").saved_ids.clone()
    }
}

fn sort_key(endpoint: &ApiEndpoint, column: ApiEndpointOrderColumn) -> String {
    match column {
        ApiEndpointOrderColumn::Id => format!("{:020}", endpoint.id().value()),
        ApiEndpointOrderColumn::Path => endpoint.path().value().to_string(),
        ApiEndpointOrderColumn::ApiGroup => endpoint.api_group().value().to_string(),
        ApiEndpointOrderColumn::Description => endpoint.description().to_string(),
        ApiEndpointOrderColumn::Method => endpoint.method().value().to_string(),
    }
}

#[async_trait]
impl ApiEndpointRepository for FakeApiEndpointRepository {
    async fn insert(&self, draft: &ApiEndpointDraft) -> Result<ApiEndpoint, ApiCatalogDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        let id = state.next_id;
        state.next_id += 1;

        let now = Utc::now();
        let endpoint = ApiEndpoint::restore(ApiEndpointId::new(id)?, draft.clone(), now, now);
        state.entries.insert(id, endpoint.clone());
        Ok(endpoint)
    }

    async fn find_by_id(
        &self,
        id: ApiEndpointId,
    ) -> Result<Option<ApiEndpoint>, ApiCatalogDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state.entries.get(&id.value()).cloned())
    }

    async fn find_by_route(
        &self,
        path: &ApiPath,
        method: &HttpMethod,
    ) -> Result<Option<ApiEndpoint>, ApiCatalogDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .entries
            .values()
            .find(|endpoint| endpoint.same_route(path, method))
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<ApiEndpoint>, ApiCatalogDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state.entries.values().cloned().collect())
    }

    async fn list_page(
        &self,
        query: &ListApiEndpointsQuery,
    ) -> Result<(Vec<ApiEndpoint>, i64), ApiCatalogDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        let mut matches = state
            .entries
            .values()
            .filter(|endpoint| {
                query
                    .path_contains()
                    .is_none_or(|needle| endpoint.path().value().contains(needle))
                    && query
                        .description_contains()
                        .is_none_or(|needle| endpoint.description().contains(needle))
                    && query.method().is_none_or(|method| endpoint.method() == method)
                    && query
                        .api_group()
                        .is_none_or(|group| endpoint.api_group().value() == group)
            })
            .cloned()
            .collect::<Vec<_>>();

        matches.sort_by_key(|endpoint| sort_key(endpoint, query.order_by()));
        if query.order_desc() {
            matches.reverse();
        }

        let total = matches.len() as i64;
        let items = matches
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.limit() as usize)
            .collect();

        Ok((items, total))
    }

    async fn save(&self, endpoint: &ApiEndpoint) -> Result<(), ApiCatalogDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        let id = endpoint.id().value();
        if !state.entries.contains_key(&id) {
            return Err(ApiCatalogDomainError::ApiNotFound);
        }
        state.saved_ids.push(id);
        state.entries.insert(id, endpoint.clone());
        Ok(())
    }

    async fn delete(&self, id: ApiEndpointId) -> Result<bool, ApiCatalogDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Ok(state.entries.remove(&id.value()).is_some())
    }

    async fn delete_by_ids(
        &self,
        ids: &[ApiEndpointId],
    ) -> Result<Vec<ApiEndpoint>, ApiCatalogDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Ok(ids
            .iter()
            .filter_map(|id| state.entries.remove(&id.value()))
            .collect())
    }
}

#[derive(Default)]
struct FakeAccessControlFacadeState {
    cleared_routes: Vec<(String, String)>,
    moved_routes: Vec<(String, String, String, String)>,
    clear_should_fail: bool,
    move_should_fail: bool,
}

pub struct FakeAccessControlFacade {
    state: Mutex<FakeAccessControlFacadeState>,
}

impl FakeAccessControlFacade {
    pub fn new(clear_should_fail: bool, move_should_fail: bool) -> Self {
        Self {
            state: Mutex::new(FakeAccessControlFacadeState {
                clear_should_fail,
                move_should_fail,
                ..FakeAccessControlFacadeState::default()
            }),
        }
    }

    pub fn cleared_routes(&self) -> Vec<(String, String)> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .cleared_routes
            .clone()
    }

    /// `(old_path, new_path, old_method, new_method)` per call.
    pub fn moved_routes(&self) -> Vec<(String, String, String, String)> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .moved_routes
            .clone()
    }
}

#[async_trait]
impl AccessControlFacade for FakeAccessControlFacade {
    async fn clear_api_policies(
        &self,
        path: &ApiPath,
        method: &HttpMethod,
    ) -> Result<bool, ApiCatalogDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state
            .cleared_routes
            .push((path.value().to_string(), method.value().to_string()));

        if state.clear_should_fail {
            return Err(ApiCatalogDomainError::InfrastructureError(
                "casbin_rule unavailable".to_string(),
            ));
        }
        Ok(true)
    }

    async fn move_api_policies(
        &self,
        change: ApiRouteChange,
    ) -> Result<(), ApiCatalogDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.moved_routes.push((
            change.old_path.value().to_string(),
            change.new_path.value().to_string(),
            change.old_method.value().to_string(),
            change.new_method.value().to_string(),
        ));

        if state.move_should_fail {
            return Err(ApiCatalogDomainError::InfrastructureError(
                "casbin_rule unavailable".to_string(),
            ));
        }
        Ok(())
    }
}
