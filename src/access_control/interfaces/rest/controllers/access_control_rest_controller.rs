use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use validator::Validate;

use crate::access_control::{
    domain::{
        model::{
            commands::update_role_policies_command::{
                PolicyGrantParts, UpdateRolePoliciesCommand,
            },
            enums::access_control_domain_error::AccessControlDomainError,
            queries::{
                enforce_permission_query::EnforcePermissionQuery,
                get_role_policies_query::GetRolePoliciesQuery,
            },
        },
        services::{
            access_control_command_service::AccessControlCommandService,
            access_control_query_service::AccessControlQueryService,
        },
    },
    interfaces::rest::resources::{
        access_control_error_response_resource::AccessControlErrorResponseResource,
        enforce_permission_request_resource::{
            EnforcePermissionRequestResource, EnforcePermissionResponseResource,
        },
        update_role_policies_request_resource::{
            PolicyGrantResource, RolePoliciesResource, UpdateRolePoliciesRequestResource,
        },
    },
};

type ErrorResponse = (StatusCode, Json<AccessControlErrorResponseResource>);

#[derive(Clone)]
pub struct AccessControlRestControllerState {
    pub command_service: Arc<dyn AccessControlCommandService>,
    pub query_service: Arc<dyn AccessControlQueryService>,
}

pub fn router(state: AccessControlRestControllerState) -> Router {
    Router::new()
        .route(
            "/access-control/authorities/:authority_id/policies",
            get(get_role_policies).put(update_role_policies),
        )
        .route("/access-control/policies/reload", post(reload_policies))
        .route(
            "/access-control/permissions/enforce",
            post(enforce_permission),
        )
        .with_state(state)
}

#[utoipa::path(
    put,
    path = "/access-control/authorities/{authority_id}/policies",
    tag = "access-control",
    params(("authority_id" = u64, Path, description = "Role identifier")),
    request_body = UpdateRolePoliciesRequestResource,
    responses(
        (status = 204, description = "Role policies replaced"),
        (status = 400, description = "Invalid request", body = AccessControlErrorResponseResource),
        (status = 409, description = "Rules rejected by the store", body = AccessControlErrorResponseResource),
        (status = 503, description = "Enforcer unavailable", body = AccessControlErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = AccessControlErrorResponseResource)
    )
)]
pub async fn update_role_policies(
    State(state): State<AccessControlRestControllerState>,
    Path(authority_id): Path<u64>,
    Json(request): Json<UpdateRolePoliciesRequestResource>,
) -> Result<StatusCode, ErrorResponse> {
    if let Err(validation_error) = request.validate() {
        return Err(validation_failure(validation_error));
    }

    let command = UpdateRolePoliciesCommand::new(
        authority_id,
        request
            .policies
            .into_iter()
            .map(|grant| PolicyGrantParts {
                path: grant.path,
                method: grant.method,
            })
            .collect(),
    )
    .map_err(map_domain_error)?;

    state
        .command_service
        .handle_update_role_policies(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/access-control/authorities/{authority_id}/policies",
    tag = "access-control",
    params(("authority_id" = u64, Path, description = "Role identifier")),
    responses(
        (status = 200, description = "Policies granted to the role", body = RolePoliciesResource),
        (status = 400, description = "Invalid authority id", body = AccessControlErrorResponseResource),
        (status = 503, description = "Enforcer unavailable", body = AccessControlErrorResponseResource)
    )
)]
pub async fn get_role_policies(
    State(state): State<AccessControlRestControllerState>,
    Path(authority_id): Path<u64>,
) -> Result<Json<RolePoliciesResource>, ErrorResponse> {
    let query = GetRolePoliciesQuery::new(authority_id).map_err(map_domain_error)?;

    let policies = state
        .query_service
        .handle_get_role_policies(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(RolePoliciesResource {
        authority_id,
        policies: policies
            .into_iter()
            .map(|policy| PolicyGrantResource {
                path: policy.path,
                method: policy.method,
            })
            .collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/access-control/policies/reload",
    tag = "access-control",
    responses(
        (status = 204, description = "Enforcer reloaded from the rule table"),
        (status = 503, description = "Enforcer unavailable", body = AccessControlErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = AccessControlErrorResponseResource)
    )
)]
pub async fn reload_policies(
    State(state): State<AccessControlRestControllerState>,
) -> Result<StatusCode, ErrorResponse> {
    state
        .command_service
        .handle_reload_policies()
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/access-control/permissions/enforce",
    tag = "access-control",
    request_body = EnforcePermissionRequestResource,
    responses(
        (status = 200, description = "Enforcement decision", body = EnforcePermissionResponseResource),
        (status = 400, description = "Invalid request", body = AccessControlErrorResponseResource),
        (status = 503, description = "Enforcer unavailable", body = AccessControlErrorResponseResource)
    )
)]
pub async fn enforce_permission(
    State(state): State<AccessControlRestControllerState>,
    Json(request): Json<EnforcePermissionRequestResource>,
) -> Result<Json<EnforcePermissionResponseResource>, ErrorResponse> {
    if let Err(validation_error) = request.validate() {
        return Err(validation_failure(validation_error));
    }

    let query = EnforcePermissionQuery::new(request.authority_id, request.path, request.method)
        .map_err(map_domain_error)?;

    let decision = state
        .query_service
        .handle_enforce(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(EnforcePermissionResponseResource {
        allowed: decision.allowed,
        cached: decision.cached,
    }))
}

fn validation_failure(error: validator::ValidationErrors) -> ErrorResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(AccessControlErrorResponseResource {
            code: "invalid_request".to_string(),
            message: error.to_string(),
        }),
    )
}

fn map_domain_error(error: AccessControlDomainError) -> ErrorResponse {
    let (status, code) = match error {
        AccessControlDomainError::InvalidAuthorityId
        | AccessControlDomainError::InvalidPolicyPath
        | AccessControlDomainError::InvalidPolicyMethod
        | AccessControlDomainError::InvalidPolicyFilter
        | AccessControlDomainError::PolicySubjectMismatch => {
            (StatusCode::BAD_REQUEST, "invalid_request")
        }
        AccessControlDomainError::PolicyInsertRejected => {
            (StatusCode::CONFLICT, "policy_insert_rejected")
        }
        AccessControlDomainError::EnforcerUnavailable => {
            (StatusCode::SERVICE_UNAVAILABLE, "enforcer_unavailable")
        }
        AccessControlDomainError::InfrastructureError(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
        }
    };

    (
        status,
        Json(AccessControlErrorResponseResource {
            code: code.to_string(),
            message: error.to_string(),
        }),
    )
}
