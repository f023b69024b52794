use axum::Router;
use console_admin_api::{
    access_control::{
        build_access_control_router, build_access_control_services,
        interfaces::rest::resources::{
            access_control_error_response_resource::AccessControlErrorResponseResource,
            enforce_permission_request_resource::{
                EnforcePermissionRequestResource, EnforcePermissionResponseResource,
            },
            update_role_policies_request_resource::{
                PolicyGrantResource, RolePoliciesResource, UpdateRolePoliciesRequestResource,
            },
        },
    },
    api_catalog::{
        build_api_catalog_router,
        interfaces::rest::resources::{
            api_endpoint_request_resource::{
                ApiEndpointRequestResource, DeleteApiEndpointsByIdsRequestResource,
            },
            api_endpoint_resource::{ApiEndpointPageResource, ApiEndpointResource},
            error_response_resource::ErrorResponseResource,
        },
    },
    config::{app_config::AppConfig, telemetry::init_tracing},
};
use dotenvy::dotenv;
use sqlx::{PgPool, migrate};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        console_admin_api::api_catalog::interfaces::rest::controllers::api_catalog_rest_controller::create_api_endpoint,
        console_admin_api::api_catalog::interfaces::rest::controllers::api_catalog_rest_controller::list_api_endpoints,
        console_admin_api::api_catalog::interfaces::rest::controllers::api_catalog_rest_controller::list_all_api_endpoints,
        console_admin_api::api_catalog::interfaces::rest::controllers::api_catalog_rest_controller::get_api_endpoint,
        console_admin_api::api_catalog::interfaces::rest::controllers::api_catalog_rest_controller::update_api_endpoint,
        console_admin_api::api_catalog::interfaces::rest::controllers::api_catalog_rest_controller::delete_api_endpoint,
        console_admin_api::api_catalog::interfaces::rest::controllers::api_catalog_rest_controller::delete_api_endpoints_by_ids,
        console_admin_api::access_control::interfaces::rest::controllers::access_control_rest_controller::update_role_policies,
        console_admin_api::access_control::interfaces::rest::controllers::access_control_rest_controller::get_role_policies,
        console_admin_api::access_control::interfaces::rest::controllers::access_control_rest_controller::reload_policies,
        console_admin_api::access_control::interfaces::rest::controllers::access_control_rest_controller::enforce_permission
    ),
    components(
        schemas(
            ApiEndpointRequestResource,
            DeleteApiEndpointsByIdsRequestResource,
            ApiEndpointResource,
            ApiEndpointPageResource,
            ErrorResponseResource,
            PolicyGrantResource,
            UpdateRolePoliciesRequestResource,
            RolePoliciesResource,
            EnforcePermissionRequestResource,
            EnforcePermissionResponseResource,
            AccessControlErrorResponseResource
        )
    ),
    tags(
        (name = "api-catalog", description = "Api endpoint metadata bounded context"),
        (name = "access-control", description = "Casbin role policy bounded context")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env();

    let pool = PgPool::connect(&config.database_url())
        .await
        .expect("failed to connect to postgres");

    migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let access_control_services = build_access_control_services(pool.clone(), &config);
    let access_control_router = build_access_control_router(&access_control_services);
    let api_catalog_router = build_api_catalog_router(pool, &access_control_services);

    let app = Router::new()
        .merge(api_catalog_router)
        .merge(access_control_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!(%addr, "server listening");
    info!(
        "swagger ui available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
