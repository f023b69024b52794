use console_admin_api::access_control::domain::{
    model::{
        enums::access_control_domain_error::AccessControlDomainError,
        queries::{
            enforce_permission_query::EnforcePermissionQuery,
            get_role_policies_query::GetRolePoliciesQuery,
        },
    },
    services::{
        access_control_command_service::AccessControlCommandService,
        access_control_query_service::{AccessControlQueryService, RolePolicy},
    },
};

use crate::support::{
    ADMIN_AUTHORITY, EDITOR_AUTHORITY, FakeCasbinRuleRepository, create_harness, policy_record,
};

fn enforce_query(authority_id: u64, path: &str, method: &str) -> EnforcePermissionQuery {
    EnforcePermissionQuery::new(authority_id, path.to_string(), method.to_string())
        .expect("valid query")
}

#[tokio::test]
async fn handle_get_role_policies_returns_path_method_pairs() {
    let harness = create_harness(FakeCasbinRuleRepository::with_records(vec![
        policy_record(ADMIN_AUTHORITY, "/api/createApi", "POST"),
        policy_record(ADMIN_AUTHORITY, "/api/getApiList", "POST"),
        policy_record(EDITOR_AUTHORITY, "/menu/getMenu", "POST"),
    ]));

    let mut policies = harness
        .query_service
        .handle_get_role_policies(GetRolePoliciesQuery::new(ADMIN_AUTHORITY).expect("valid query"))
        .await
        .expect("policies");
    policies.sort_by(|a, b| a.path.cmp(&b.path));

    assert_eq!(
        policies,
        vec![
            RolePolicy {
                path: "/api/createApi".to_string(),
                method: "POST".to_string(),
            },
            RolePolicy {
                path: "/api/getApiList".to_string(),
                method: "POST".to_string(),
            },
        ]
    );
    assert!(harness.enforcer_provider.is_initialized());
}

#[tokio::test]
async fn handle_enforce_matches_path_patterns_and_caches_decisions() {
    let harness = create_harness(FakeCasbinRuleRepository::with_records(vec![policy_record(
        ADMIN_AUTHORITY,
        "/user/:id",
        "DELETE",
    )]));

    let first = harness
        .query_service
        .handle_enforce(enforce_query(ADMIN_AUTHORITY, "/user/17", "DELETE"))
        .await
        .expect("decision");
    let second = harness
        .query_service
        .handle_enforce(enforce_query(ADMIN_AUTHORITY, "/user/17", "DELETE"))
        .await
        .expect("decision");
    let other_role = harness
        .query_service
        .handle_enforce(enforce_query(EDITOR_AUTHORITY, "/user/17", "DELETE"))
        .await
        .expect("decision");

    assert!(first.allowed && !first.cached);
    assert!(second.allowed && second.cached);
    assert!(!other_role.allowed);
}

#[tokio::test]
async fn reload_invalidates_cached_decisions() {
    let harness = create_harness(FakeCasbinRuleRepository::with_records(vec![]));

    let denied = harness
        .query_service
        .handle_enforce(enforce_query(ADMIN_AUTHORITY, "/api/createApi", "POST"))
        .await
        .expect("decision");
    assert!(!denied.allowed);

    harness
        .rule_repository
        .push(policy_record(ADMIN_AUTHORITY, "/api/createApi", "POST"));
    harness
        .command_service
        .handle_reload_policies()
        .await
        .expect("reloaded");

    let allowed = harness
        .query_service
        .handle_enforce(enforce_query(ADMIN_AUTHORITY, "/api/createApi", "POST"))
        .await
        .expect("decision");
    assert!(allowed.allowed);
    assert!(!allowed.cached);
}

#[tokio::test]
async fn enforcer_starts_empty_when_store_is_unreachable() {
    let harness = create_harness(FakeCasbinRuleRepository::failing_loads());

    let decision = harness
        .query_service
        .handle_enforce(enforce_query(ADMIN_AUTHORITY, "/api/createApi", "POST"))
        .await
        .expect("decision");
    assert!(!decision.allowed);

    let reload = harness.command_service.handle_reload_policies().await;
    assert!(matches!(
        reload,
        Err(AccessControlDomainError::InfrastructureError(_))
    ));
}

#[test]
fn queries_reject_zero_authority() {
    assert!(matches!(
        GetRolePoliciesQuery::new(0),
        Err(AccessControlDomainError::InvalidAuthorityId)
    ));
}
