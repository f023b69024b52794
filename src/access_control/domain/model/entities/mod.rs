pub mod policy_rule;
