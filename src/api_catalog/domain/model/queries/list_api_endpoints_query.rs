use crate::api_catalog::domain::model::{
    enums::{
        api_catalog_domain_error::ApiCatalogDomainError,
        api_endpoint_order_column::ApiEndpointOrderColumn,
    },
    value_objects::http_method::HttpMethod,
};

pub const MAX_PAGE_SIZE: i64 = 500;

#[derive(Clone, Debug)]
pub struct ListApiEndpointsQuery {
    path_contains: Option<String>,
    description_contains: Option<String>,
    method: Option<HttpMethod>,
    api_group: Option<String>,
    page: i64,
    page_size: i64,
    order_by: ApiEndpointOrderColumn,
    order_desc: bool,
}

pub struct ListApiEndpointsQueryParts {
    pub path: Option<String>,
    pub description: Option<String>,
    pub method: Option<String>,
    pub api_group: Option<String>,
    pub page: i64,
    pub page_size: i64,
    pub order_by: Option<String>,
    pub order_desc: bool,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ListApiEndpointsQuery {
    pub fn new(parts: ListApiEndpointsQueryParts) -> Result<Self, ApiCatalogDomainError> {
        if parts.page < 1 || parts.page_size < 1 || parts.page_size > MAX_PAGE_SIZE {
            return Err(ApiCatalogDomainError::InvalidPagination);
        }
        // The offset must fit in a BIGINT.
        if parts.page_size.checked_mul(parts.page - 1).is_none() {
            return Err(ApiCatalogDomainError::InvalidPagination);
        }

        // Without an explicit column the listing is grouped ascending.
        let (order_by, order_desc) = match non_blank(parts.order_by) {
            Some(column) => (column.parse::<ApiEndpointOrderColumn>()?, parts.order_desc),
            None => (ApiEndpointOrderColumn::default(), false),
        };

        Ok(Self {
            path_contains: non_blank(parts.path),
            description_contains: non_blank(parts.description),
            method: non_blank(parts.method).map(HttpMethod::new).transpose()?,
            api_group: non_blank(parts.api_group),
            page: parts.page,
            page_size: parts.page_size,
            order_by,
            order_desc,
        })
    }

    pub fn path_contains(&self) -> Option<&str> {
        self.path_contains.as_deref()
    }
    pub fn description_contains(&self) -> Option<&str> {
        self.description_contains.as_deref()
    }
    pub fn method(&self) -> Option<&HttpMethod> {
        self.method.as_ref()
    }
    pub fn api_group(&self) -> Option<&str> {
        self.api_group.as_deref()
    }
    pub fn page(&self) -> i64 {
        self.page
    }
    pub fn page_size(&self) -> i64 {
        self.page_size
    }
    pub fn limit(&self) -> i64 {
        self.page_size
    }
    pub fn offset(&self) -> i64 {
        self.page_size * (self.page - 1)
    }
    pub fn order_by(&self) -> ApiEndpointOrderColumn {
        self.order_by
    }
    pub fn order_desc(&self) -> bool {
        self.order_desc
    }
}
