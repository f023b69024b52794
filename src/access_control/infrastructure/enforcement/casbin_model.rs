use casbin::{CoreApi, DefaultModel, Enforcer, MemoryAdapter, MgmtApi};

use crate::access_control::domain::model::entities::policy_rule::PolicyRule;

/// Role/object/action triple, `keyMatch2` path patterns, allow-only effect.
pub const MODEL_CONF: &str = r#"
[request_definition]
r = sub, obj, act

[policy_definition]
p = sub, obj, act

[role_definition]
g = _, _

[policy_effect]
e = some(where (p.eft == allow))

[matchers]
m = r.sub == p.sub && keyMatch2(r.obj,p.obj) && r.act == p.act
"#;

/// Compiles `model_conf` and loads `rules` into an in-memory enforcer.
/// Persistence is handled by the rule repository, never by the adapter.
pub async fn build_enforcer(model_conf: &str, rules: &[PolicyRule]) -> casbin::Result<Enforcer> {
    let model = DefaultModel::from_str(model_conf).await?;
    let adapter = MemoryAdapter::default();
    let mut enforcer = Enforcer::new(model, adapter).await?;

    if !rules.is_empty() {
        enforcer
            .add_policies(rules.iter().map(PolicyRule::to_policy_vec).collect())
            .await?;
    }

    Ok(enforcer)
}
