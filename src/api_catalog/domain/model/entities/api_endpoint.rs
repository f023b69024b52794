use chrono::{DateTime, Utc};

use crate::api_catalog::domain::model::value_objects::{
    api_endpoint_id::ApiEndpointId, api_group::ApiGroup, api_path::ApiPath,
    http_method::HttpMethod,
};

/// Fields of an endpoint record that callers may set.
#[derive(Clone, Debug)]
pub struct ApiEndpointDraft {
    pub path: ApiPath,
    pub method: HttpMethod,
    pub api_group: ApiGroup,
    pub description: String,
}

#[derive(Clone, Debug)]
pub struct ApiEndpoint {
    id: ApiEndpointId,
    path: ApiPath,
    method: HttpMethod,
    api_group: ApiGroup,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ApiEndpoint {
    pub fn restore(
        id: ApiEndpointId,
        draft: ApiEndpointDraft,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            path: draft.path,
            method: draft.method,
            api_group: draft.api_group,
            description: draft.description,
            created_at,
            updated_at,
        }
    }

    pub fn apply(&mut self, draft: ApiEndpointDraft, updated_at: DateTime<Utc>) {
        self.path = draft.path;
        self.method = draft.method;
        self.api_group = draft.api_group;
        self.description = draft.description;
        self.updated_at = updated_at;
    }

    pub fn same_route(&self, path: &ApiPath, method: &HttpMethod) -> bool {
        &self.path == path && &self.method == method
    }

    pub fn id(&self) -> ApiEndpointId {
        self.id
    }
    pub fn path(&self) -> &ApiPath {
        &self.path
    }
    pub fn method(&self) -> &HttpMethod {
        &self.method
    }
    pub fn api_group(&self) -> &ApiGroup {
        &self.api_group
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
