use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListApiEndpointsQueryResource {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    /// Substring match on the path.
    pub path: Option<String>,
    /// Substring match on the description.
    pub description: Option<String>,
    pub method: Option<String>,
    pub api_group: Option<String>,
    /// One of `id`, `path`, `api_group`, `description`, `method`.
    pub order_key: Option<String>,
    pub desc: Option<bool>,
}
