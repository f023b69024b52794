use std::time::Duration;

use console_admin_api::access_control::{
    domain::{
        model::{
            commands::{
                sync_role_policies_command::SyncRolePoliciesCommand,
                update_api_policies_command::UpdateApiPoliciesCommand,
            },
            entities::policy_rule::PolicyRule,
            enums::access_control_domain_error::AccessControlDomainError,
            queries::enforce_permission_query::EnforcePermissionQuery,
            value_objects::authority_id::AuthorityId,
        },
        services::{
            access_control_command_service::AccessControlCommandService,
            access_control_query_service::AccessControlQueryService,
        },
    },
    interfaces::acl::access_control_facade::{AccessControlFacade, ApiPolicyRenameRequest},
};

use crate::support::{
    ADMIN_AUTHORITY, EDITOR_AUTHORITY, FakeCasbinRuleRepository, create_harness, grant,
    policy_record, update_role_command,
};

fn enforce_query(authority_id: u64, path: &str, method: &str) -> EnforcePermissionQuery {
    EnforcePermissionQuery::new(authority_id, path.to_string(), method.to_string())
        .expect("valid query")
}

#[tokio::test]
async fn handle_update_role_policies_replaces_rules_of_that_role_only() {
    let harness = create_harness(FakeCasbinRuleRepository::with_records(vec![
        policy_record(ADMIN_AUTHORITY, "/api/old", "GET"),
        policy_record(EDITOR_AUTHORITY, "/api/getApiList", "POST"),
    ]));

    harness
        .command_service
        .handle_update_role_policies(update_role_command(
            ADMIN_AUTHORITY,
            vec![
                grant("/api/createApi", "POST"),
                grant("/api/getApiById/:id", "GET"),
                grant("/api/createApi", "POST"),
            ],
        ))
        .await
        .expect("policies replaced");

    let records = harness.rule_repository.records();
    assert_eq!(records.len(), 3);
    assert!(records.contains(&policy_record(EDITOR_AUTHORITY, "/api/getApiList", "POST")));
    assert!(!records.contains(&policy_record(ADMIN_AUTHORITY, "/api/old", "GET")));

    let decision = harness
        .query_service
        .handle_enforce(enforce_query(ADMIN_AUTHORITY, "/api/getApiById/5", "GET"))
        .await
        .expect("decision");
    assert!(decision.allowed);
}

#[tokio::test]
async fn handle_update_role_policies_is_idempotent() {
    let harness = create_harness(FakeCasbinRuleRepository::with_records(vec![]));
    let grants = || {
        vec![
            grant("/menu/getMenu", "POST"),
            grant("/menu/getMenu", "POST"),
            grant("/user/:id", "DELETE"),
        ]
    };

    harness
        .command_service
        .handle_update_role_policies(update_role_command(ADMIN_AUTHORITY, grants()))
        .await
        .expect("first replacement");
    let first = harness.rule_repository.records();

    harness
        .command_service
        .handle_update_role_policies(update_role_command(ADMIN_AUTHORITY, grants()))
        .await
        .expect("second replacement");

    assert_eq!(first.len(), 2);
    assert_eq!(harness.rule_repository.records(), first);
}

#[tokio::test]
async fn handle_update_role_policies_fails_when_store_drops_rules() {
    let harness = create_harness(FakeCasbinRuleRepository::with_insert_limit(vec![], 1));

    let result = harness
        .command_service
        .handle_update_role_policies(update_role_command(
            ADMIN_AUTHORITY,
            vec![grant("/a", "GET"), grant("/b", "GET")],
        ))
        .await;

    assert!(matches!(
        result,
        Err(AccessControlDomainError::PolicyInsertRejected)
    ));
}

#[tokio::test]
async fn handle_update_role_policies_accepts_empty_set_as_revocation() {
    let harness = create_harness(FakeCasbinRuleRepository::with_records(vec![policy_record(
        ADMIN_AUTHORITY,
        "/api/createApi",
        "POST",
    )]));

    harness
        .command_service
        .handle_update_role_policies(update_role_command(ADMIN_AUTHORITY, vec![]))
        .await
        .expect("policies revoked");

    assert!(harness.rule_repository.records().is_empty());
}

#[tokio::test]
async fn handle_update_api_policies_rewrites_every_role_and_reloads() {
    let harness = create_harness(FakeCasbinRuleRepository::with_records(vec![
        policy_record(ADMIN_AUTHORITY, "/api/list", "GET"),
        policy_record(EDITOR_AUTHORITY, "/api/list", "GET"),
        policy_record(EDITOR_AUTHORITY, "/api/list", "POST"),
    ]));

    harness
        .command_service
        .handle_update_api_policies(
            UpdateApiPoliciesCommand::new(
                "/api/list".to_string(),
                "/api/search".to_string(),
                "GET".to_string(),
                "POST".to_string(),
            )
            .expect("valid command"),
        )
        .await
        .expect("policies rewritten");

    let records = harness.rule_repository.records();
    assert!(records.contains(&policy_record(ADMIN_AUTHORITY, "/api/search", "POST")));
    assert!(records.contains(&policy_record(EDITOR_AUTHORITY, "/api/search", "POST")));
    assert!(records.contains(&policy_record(EDITOR_AUTHORITY, "/api/list", "POST")));

    let decision = harness
        .query_service
        .handle_enforce(enforce_query(ADMIN_AUTHORITY, "/api/search", "POST"))
        .await
        .expect("decision");
    assert!(decision.allowed);
}

#[tokio::test]
async fn handle_update_api_policies_skips_store_when_route_is_unchanged() {
    let harness = create_harness(FakeCasbinRuleRepository::with_records(vec![]));

    harness
        .facade
        .rename_api_policies(ApiPolicyRenameRequest {
            old_path: "/api/list".to_string(),
            new_path: "/api/list".to_string(),
            old_method: "GET".to_string(),
            new_method: "GET".to_string(),
        })
        .await
        .expect("noop rename");

    assert_eq!(harness.rule_repository.update_calls(), 0);
}

#[tokio::test]
async fn facade_clear_reports_whether_rules_were_removed() {
    let harness = create_harness(FakeCasbinRuleRepository::with_records(vec![
        policy_record(ADMIN_AUTHORITY, "/api/deleteApi", "POST"),
        policy_record(EDITOR_AUTHORITY, "/api/deleteApi", "POST"),
        policy_record(EDITOR_AUTHORITY, "/api/deleteApi", "GET"),
    ]));

    let removed = harness
        .facade
        .clear_api_policies("/api/deleteApi".to_string(), "POST".to_string())
        .await
        .expect("cleared");
    let removed_again = harness
        .facade
        .clear_api_policies("/api/deleteApi".to_string(), "POST".to_string())
        .await
        .expect("cleared");

    assert!(removed);
    assert!(!removed_again);
    assert_eq!(
        harness.rule_repository.records(),
        vec![policy_record(EDITOR_AUTHORITY, "/api/deleteApi", "GET")]
    );
}

#[tokio::test]
async fn store_only_operations_wait_for_reload() {
    let harness = create_harness(FakeCasbinRuleRepository::with_records(vec![policy_record(
        ADMIN_AUTHORITY,
        "/user/list",
        "GET",
    )]));
    let authority = AuthorityId::new(ADMIN_AUTHORITY).expect("valid authority");

    let before = harness
        .query_service
        .handle_enforce(enforce_query(ADMIN_AUTHORITY, "/user/list", "GET"))
        .await
        .expect("decision");
    assert!(before.allowed);

    let removed = harness
        .command_service
        .handle_remove_role_policies(&authority)
        .await
        .expect("removed");
    harness
        .command_service
        .handle_add_policies(vec![
            PolicyRule::new("888".into(), "/user/create".into(), "POST".into()),
            PolicyRule::new("888".into(), "/user/create".into(), "POST".into()),
        ])
        .await
        .expect("added");

    assert_eq!(removed, 1);
    assert_eq!(
        harness.rule_repository.records(),
        vec![policy_record(ADMIN_AUTHORITY, "/user/create", "POST")]
    );

    let stale = harness
        .query_service
        .handle_enforce(enforce_query(ADMIN_AUTHORITY, "/user/list", "GET"))
        .await
        .expect("decision");
    assert!(stale.allowed);

    harness
        .command_service
        .handle_reload_policies()
        .await
        .expect("reloaded");

    let fresh = harness
        .query_service
        .handle_enforce(enforce_query(ADMIN_AUTHORITY, "/user/list", "GET"))
        .await
        .expect("decision");
    assert!(!fresh.allowed);
    assert!(!fresh.cached);
}

#[tokio::test]
async fn handle_sync_role_policies_replaces_rules_in_store() {
    let harness = create_harness(FakeCasbinRuleRepository::with_records(vec![
        policy_record(EDITOR_AUTHORITY, "/menu/a", "GET"),
        policy_record(ADMIN_AUTHORITY, "/menu/a", "GET"),
    ]));

    harness
        .command_service
        .handle_sync_role_policies(
            SyncRolePoliciesCommand::new(
                EDITOR_AUTHORITY,
                vec![
                    ["9528".into(), "/menu/b".into(), "GET".into()],
                    ["9528".into(), "/menu/b".into(), "GET".into()],
                ],
            )
            .expect("valid command"),
        )
        .await
        .expect("synced");

    assert_eq!(
        harness.rule_repository.records(),
        vec![
            policy_record(ADMIN_AUTHORITY, "/menu/a", "GET"),
            policy_record(EDITOR_AUTHORITY, "/menu/b", "GET"),
        ]
    );
}

#[tokio::test]
async fn overlapping_reloads_leave_enforcer_on_latest_store_contents() {
    let harness = create_harness(FakeCasbinRuleRepository::with_records(vec![policy_record(
        ADMIN_AUTHORITY,
        "/old",
        "GET",
    )]));
    harness
        .command_service
        .handle_reload_policies()
        .await
        .expect("initial reload");

    harness
        .rule_repository
        .delay_next_load(Duration::from_millis(300));
    let slow_provider = harness.enforcer_provider.clone();
    let slow_reload = tokio::spawn(async move { slow_provider.reload().await });
    tokio::time::sleep(Duration::from_millis(50)).await;

    harness
        .rule_repository
        .replace_records(vec![policy_record(ADMIN_AUTHORITY, "/new", "GET")]);
    harness
        .enforcer_provider
        .reload()
        .await
        .expect("second reload");
    slow_reload
        .await
        .expect("reload task joins")
        .expect("first reload");

    let policy = harness
        .enforcer_provider
        .filtered_policy(0, vec![ADMIN_AUTHORITY.to_string()])
        .await
        .expect("policy");
    assert_eq!(
        policy,
        vec![vec![
            ADMIN_AUTHORITY.to_string(),
            "/new".to_string(),
            "GET".to_string(),
        ]]
    );
}
