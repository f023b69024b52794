use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::api_catalog::{
    domain::model::{
        entities::api_endpoint::{ApiEndpoint, ApiEndpointDraft},
        enums::api_catalog_domain_error::ApiCatalogDomainError,
        queries::list_api_endpoints_query::ListApiEndpointsQuery,
        value_objects::{
            api_endpoint_id::ApiEndpointId, api_group::ApiGroup, api_path::ApiPath,
            http_method::HttpMethod,
        },
    },
    infrastructure::persistence::repositories::api_endpoint_repository::ApiEndpointRepository,
};

const SELECT_COLUMNS: &str = "id, path, method, api_group, description, created_at, updated_at";

#[derive(Debug, FromRow)]
struct ApiEndpointRow {
    id: i64,
    path: String,
    method: String,
    api_group: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ApiEndpointRow {
    /// Stored rows skip request validation; legacy methods and paths must still load.
    fn into_entity(self) -> Result<ApiEndpoint, ApiCatalogDomainError> {
        Ok(ApiEndpoint::restore(
            ApiEndpointId::new(self.id)?,
            ApiEndpointDraft {
                path: ApiPath::from_stored(self.path),
                method: HttpMethod::from_stored(self.method),
                api_group: ApiGroup::from_stored(self.api_group),
                description: self.description,
            },
            self.created_at,
            self.updated_at,
        ))
    }
}

pub struct SqlxApiEndpointRepositoryImpl {
    pool: PgPool,
}

impl SqlxApiEndpointRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &ListApiEndpointsQuery) {
        builder.push(" WHERE 1 = 1");

        if let Some(path) = query.path_contains() {
            builder.push(" AND path LIKE ");
            builder.push_bind(format!("%{path}%"));
        }
        if let Some(description) = query.description_contains() {
            builder.push(" AND description LIKE ");
            builder.push_bind(format!("%{description}%"));
        }
        if let Some(method) = query.method() {
            builder.push(" AND method = ");
            builder.push_bind(method.value().to_string());
        }
        if let Some(api_group) = query.api_group() {
            builder.push(" AND api_group = ");
            builder.push_bind(api_group.to_string());
        }
    }
}

#[async_trait]
impl ApiEndpointRepository for SqlxApiEndpointRepositoryImpl {
    async fn insert(&self, draft: &ApiEndpointDraft) -> Result<ApiEndpoint, ApiCatalogDomainError> {
        let statement = format!(
            r#"
            INSERT INTO sys_apis (path, method, api_group, description)
            VALUES ($1, $2, $3, $4)
            RETURNING {SELECT_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, ApiEndpointRow>(&statement)
            .bind(draft.path.value())
            .bind(draft.method.value())
            .bind(draft.api_group.value())
            .bind(&draft.description)
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)?;

        row.into_entity()
    }

    async fn find_by_id(
        &self,
        id: ApiEndpointId,
    ) -> Result<Option<ApiEndpoint>, ApiCatalogDomainError> {
        let statement = format!("SELECT {SELECT_COLUMNS} FROM sys_apis WHERE id = $1");

        let maybe_row = sqlx::query_as::<_, ApiEndpointRow>(&statement)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(ApiEndpointRow::into_entity).transpose()
    }

    async fn find_by_route(
        &self,
        path: &ApiPath,
        method: &HttpMethod,
    ) -> Result<Option<ApiEndpoint>, ApiCatalogDomainError> {
        let statement = format!(
            "SELECT {SELECT_COLUMNS} FROM sys_apis WHERE path = $1 AND method = $2 LIMIT 1"
        );

        let maybe_row = sqlx::query_as::<_, ApiEndpointRow>(&statement)
            .bind(path.value())
            .bind(method.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(ApiEndpointRow::into_entity).transpose()
    }

    async fn list_all(&self) -> Result<Vec<ApiEndpoint>, ApiCatalogDomainError> {
        let statement = format!("SELECT {SELECT_COLUMNS} FROM sys_apis ORDER BY id");

        let rows = sqlx::query_as::<_, ApiEndpointRow>(&statement)
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(ApiEndpointRow::into_entity).collect()
    }

    async fn list_page(
        &self,
        query: &ListApiEndpointsQuery,
    ) -> Result<(Vec<ApiEndpoint>, i64), ApiCatalogDomainError> {
        let mut count_builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM sys_apis");
        Self::push_filters(&mut count_builder, query);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_infra_error)?;

        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT {SELECT_COLUMNS} FROM sys_apis"));
        Self::push_filters(&mut builder, query);

        // The column comes from a closed enum, never from request text.
        builder.push(format!(" ORDER BY {} ", query.order_by().as_str()));
        builder.push(if query.order_desc() { "DESC" } else { "ASC" });
        builder.push(", id ASC");
        builder.push(" LIMIT ");
        builder.push_bind(query.limit());
        builder.push(" OFFSET ");
        builder.push_bind(query.offset());

        let rows = builder
            .build_query_as::<ApiEndpointRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        let items = rows
            .into_iter()
            .map(ApiEndpointRow::into_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((items, total))
    }

    async fn save(&self, endpoint: &ApiEndpoint) -> Result<(), ApiCatalogDomainError> {
        let statement = r#"
            UPDATE sys_apis
            SET path = $2,
                method = $3,
                api_group = $4,
                description = $5,
                updated_at = $6
            WHERE id = $1
        "#;

        let result = sqlx::query(statement)
            .bind(endpoint.id().value())
            .bind(endpoint.path().value())
            .bind(endpoint.method().value())
            .bind(endpoint.api_group().value())
            .bind(endpoint.description())
            .bind(endpoint.updated_at())
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(ApiCatalogDomainError::ApiNotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: ApiEndpointId) -> Result<bool, ApiCatalogDomainError> {
        let result = sqlx::query("DELETE FROM sys_apis WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_ids(
        &self,
        ids: &[ApiEndpointId],
    ) -> Result<Vec<ApiEndpoint>, ApiCatalogDomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let statement =
            format!("DELETE FROM sys_apis WHERE id = ANY($1) RETURNING {SELECT_COLUMNS}");
        let raw_ids = ids.iter().map(ApiEndpointId::value).collect::<Vec<_>>();

        let rows = sqlx::query_as::<_, ApiEndpointRow>(&statement)
            .bind(raw_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(ApiEndpointRow::into_entity).collect()
    }
}

fn map_infra_error(error: sqlx::Error) -> ApiCatalogDomainError {
    ApiCatalogDomainError::InfrastructureError(error.to_string())
}

fn map_write_error(error: sqlx::Error) -> ApiCatalogDomainError {
    match &error {
        sqlx::Error::Database(database_error) if database_error.is_unique_violation() => {
            ApiCatalogDomainError::ApiAlreadyExists
        }
        _ => map_infra_error(error),
    }
}
