pub mod sqlx_casbin_rule_repository_impl;
