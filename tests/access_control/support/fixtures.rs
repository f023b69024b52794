use console_admin_api::access_control::{
    domain::model::{
        commands::update_role_policies_command::{PolicyGrantParts, UpdateRolePoliciesCommand},
        entities::policy_rule::PolicyRule,
    },
    infrastructure::persistence::repositories::casbin_rule_repository::CasbinRuleRecord,
};

pub const ADMIN_AUTHORITY: u64 = 888;
pub const EDITOR_AUTHORITY: u64 = 9528;

pub fn grant(path: &str, method: &str) -> PolicyGrantParts {
    PolicyGrantParts {
        path: path.to_string(),
        method: method.to_string(),
    }
}

pub fn policy_record(authority_id: u64, path: &str, method: &str) -> CasbinRuleRecord {
    CasbinRuleRecord::policy(&PolicyRule::new(
        authority_id.to_string(),
        path.to_string(),
        method.to_string(),
    ))
}

pub fn update_role_command(
    authority_id: u64,
    grants: Vec<PolicyGrantParts>,
) -> UpdateRolePoliciesCommand {
    UpdateRolePoliciesCommand::new(authority_id, grants).expect("valid update command")
}
