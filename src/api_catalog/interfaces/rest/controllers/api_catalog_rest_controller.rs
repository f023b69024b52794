use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use validator::Validate;

use crate::api_catalog::{
    domain::{
        model::{
            commands::{
                create_api_endpoint_command::CreateApiEndpointCommand,
                delete_api_endpoint_command::DeleteApiEndpointCommand,
                delete_api_endpoints_by_ids_command::DeleteApiEndpointsByIdsCommand,
                update_api_endpoint_command::{
                    UpdateApiEndpointCommand, UpdateApiEndpointCommandParts,
                },
            },
            enums::api_catalog_domain_error::ApiCatalogDomainError,
            queries::{
                get_api_endpoint_by_id_query::GetApiEndpointByIdQuery,
                list_api_endpoints_query::{ListApiEndpointsQuery, ListApiEndpointsQueryParts},
            },
        },
        services::{
            api_catalog_command_service::ApiCatalogCommandService,
            api_catalog_query_service::ApiCatalogQueryService,
        },
    },
    interfaces::rest::resources::{
        api_endpoint_request_resource::{
            ApiEndpointRequestResource, DeleteApiEndpointsByIdsRequestResource,
        },
        api_endpoint_resource::{ApiEndpointPageResource, ApiEndpointResource},
        error_response_resource::ErrorResponseResource,
        list_api_endpoints_query_resource::{
            DEFAULT_PAGE, DEFAULT_PAGE_SIZE, ListApiEndpointsQueryResource,
        },
    },
};

type ErrorResponse = (StatusCode, Json<ErrorResponseResource>);

#[derive(Clone)]
pub struct ApiCatalogRestControllerState {
    pub command_service: Arc<dyn ApiCatalogCommandService>,
    pub query_service: Arc<dyn ApiCatalogQueryService>,
}

pub fn router(state: ApiCatalogRestControllerState) -> Router {
    Router::new()
        .route(
            "/api-catalog/apis",
            post(create_api_endpoint).get(list_api_endpoints),
        )
        .route("/api-catalog/apis/all", get(list_all_api_endpoints))
        .route(
            "/api-catalog/apis/delete-by-ids",
            post(delete_api_endpoints_by_ids),
        )
        .route(
            "/api-catalog/apis/:id",
            get(get_api_endpoint)
                .put(update_api_endpoint)
                .delete(delete_api_endpoint),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api-catalog/apis",
    tag = "api-catalog",
    request_body = ApiEndpointRequestResource,
    responses(
        (status = 201, description = "Api created", body = ApiEndpointResource),
        (status = 400, description = "Invalid payload", body = ErrorResponseResource),
        (status = 409, description = "Path and method already registered", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn create_api_endpoint(
    State(state): State<ApiCatalogRestControllerState>,
    Json(request): Json<ApiEndpointRequestResource>,
) -> Result<(StatusCode, Json<ApiEndpointResource>), ErrorResponse> {
    if let Err(validation_error) = request.validate() {
        return Err(bad_request(validation_error.to_string()));
    }

    let command = CreateApiEndpointCommand::new(
        request.path,
        request.method,
        request.api_group,
        request.description,
    )
    .map_err(map_domain_error)?;

    let created = state
        .command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(ApiEndpointResource::from(&created))))
}

#[utoipa::path(
    get,
    path = "/api-catalog/apis",
    tag = "api-catalog",
    params(ListApiEndpointsQueryResource),
    responses(
        (status = 200, description = "One page of apis", body = ApiEndpointPageResource),
        (status = 400, description = "Invalid pagination, filter or order column", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn list_api_endpoints(
    State(state): State<ApiCatalogRestControllerState>,
    Query(params): Query<ListApiEndpointsQueryResource>,
) -> Result<Json<ApiEndpointPageResource>, ErrorResponse> {
    let query = ListApiEndpointsQuery::new(ListApiEndpointsQueryParts {
        path: params.path,
        description: params.description,
        method: params.method,
        api_group: params.api_group,
        page: params.page.unwrap_or(DEFAULT_PAGE),
        page_size: params.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        order_by: params.order_key,
        order_desc: params.desc.unwrap_or(false),
    })
    .map_err(map_domain_error)?;

    let page = state
        .query_service
        .handle_list(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ApiEndpointPageResource {
        items: page.items.iter().map(ApiEndpointResource::from).collect(),
        total: page.total,
        page: page.page,
        page_size: page.page_size,
    }))
}

#[utoipa::path(
    get,
    path = "/api-catalog/apis/all",
    tag = "api-catalog",
    responses(
        (status = 200, description = "Every registered api", body = [ApiEndpointResource]),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn list_all_api_endpoints(
    State(state): State<ApiCatalogRestControllerState>,
) -> Result<Json<Vec<ApiEndpointResource>>, ErrorResponse> {
    let endpoints = state
        .query_service
        .handle_get_all()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        endpoints.iter().map(ApiEndpointResource::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api-catalog/apis/{id}",
    tag = "api-catalog",
    params(("id" = i64, Path, description = "Api identifier")),
    responses(
        (status = 200, description = "Api found", body = ApiEndpointResource),
        (status = 400, description = "Invalid id", body = ErrorResponseResource),
        (status = 404, description = "Api not found", body = ErrorResponseResource)
    )
)]
pub async fn get_api_endpoint(
    State(state): State<ApiCatalogRestControllerState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiEndpointResource>, ErrorResponse> {
    let query = GetApiEndpointByIdQuery::new(id).map_err(map_domain_error)?;

    let endpoint = state
        .query_service
        .handle_get_by_id(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ApiEndpointResource::from(&endpoint)))
}

#[utoipa::path(
    put,
    path = "/api-catalog/apis/{id}",
    tag = "api-catalog",
    params(("id" = i64, Path, description = "Api identifier")),
    request_body = ApiEndpointRequestResource,
    responses(
        (status = 200, description = "Api updated", body = ApiEndpointResource),
        (status = 400, description = "Invalid payload", body = ErrorResponseResource),
        (status = 404, description = "Api not found", body = ErrorResponseResource),
        (status = 409, description = "Path and method owned by another api", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn update_api_endpoint(
    State(state): State<ApiCatalogRestControllerState>,
    Path(id): Path<i64>,
    Json(request): Json<ApiEndpointRequestResource>,
) -> Result<Json<ApiEndpointResource>, ErrorResponse> {
    if let Err(validation_error) = request.validate() {
        return Err(bad_request(validation_error.to_string()));
    }

    let command = UpdateApiEndpointCommand::new(UpdateApiEndpointCommandParts {
        id,
        path: request.path,
        method: request.method,
        api_group: request.api_group,
        description: request.description,
    })
    .map_err(map_domain_error)?;

    let updated = state
        .command_service
        .handle_update(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ApiEndpointResource::from(&updated)))
}

#[utoipa::path(
    delete,
    path = "/api-catalog/apis/{id}",
    tag = "api-catalog",
    params(("id" = i64, Path, description = "Api identifier")),
    responses(
        (status = 204, description = "Api deleted"),
        (status = 400, description = "Invalid id", body = ErrorResponseResource),
        (status = 404, description = "Api not found", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn delete_api_endpoint(
    State(state): State<ApiCatalogRestControllerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ErrorResponse> {
    let command = DeleteApiEndpointCommand::new(id).map_err(map_domain_error)?;

    state
        .command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api-catalog/apis/delete-by-ids",
    tag = "api-catalog",
    request_body = DeleteApiEndpointsByIdsRequestResource,
    responses(
        (status = 204, description = "Listed apis deleted"),
        (status = 400, description = "Empty or invalid id list", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn delete_api_endpoints_by_ids(
    State(state): State<ApiCatalogRestControllerState>,
    Json(request): Json<DeleteApiEndpointsByIdsRequestResource>,
) -> Result<StatusCode, ErrorResponse> {
    if let Err(validation_error) = request.validate() {
        return Err(bad_request(validation_error.to_string()));
    }

    let command = DeleteApiEndpointsByIdsCommand::new(request.ids).map_err(map_domain_error)?;

    state
        .command_service
        .handle_delete_by_ids(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

fn bad_request(message: String) -> ErrorResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponseResource { message }),
    )
}

fn map_domain_error(error: ApiCatalogDomainError) -> ErrorResponse {
    let status = match error {
        ApiCatalogDomainError::InvalidApiId
        | ApiCatalogDomainError::InvalidApiPath
        | ApiCatalogDomainError::InvalidHttpMethod
        | ApiCatalogDomainError::InvalidApiGroup
        | ApiCatalogDomainError::InvalidPagination
        | ApiCatalogDomainError::InvalidIdList
        | ApiCatalogDomainError::InvalidOrderColumn(_) => StatusCode::BAD_REQUEST,
        ApiCatalogDomainError::ApiAlreadyExists => StatusCode::CONFLICT,
        ApiCatalogDomainError::ApiNotFound => StatusCode::NOT_FOUND,
        ApiCatalogDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
