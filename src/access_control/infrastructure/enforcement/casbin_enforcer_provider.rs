//! Process-wide casbin enforcer.
//!
//! The enforcer is built lazily on first use and at most once. A failed
//! build is logged and leaves the slot empty; every later enforcer-backed
//! call then reports [`AccessControlDomainError::EnforcerUnavailable`].
//!
//! The rule repository is the source of truth. The enforcer holds an
//! in-memory copy that is only refreshed by [`CasbinEnforcerProvider::reload`],
//! which also drops every memoized decision.
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use casbin::{CoreApi, Enforcer, MgmtApi};
use tokio::sync::{OnceCell, RwLock};
use tracing::{debug, error, info, warn};

use crate::access_control::{
    domain::model::{
        entities::policy_rule::{PolicyRule, deduplicate_rules},
        enums::access_control_domain_error::AccessControlDomainError,
    },
    infrastructure::{
        enforcement::casbin_model::{MODEL_CONF, build_enforcer},
        persistence::repositories::casbin_rule_repository::{
            CasbinRuleRecord, CasbinRuleRepository,
        },
    },
};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct DecisionCacheKey {
    subject: String,
    object: String,
    action: String,
}

#[derive(Clone, Copy, Debug)]
struct DecisionCacheEntry {
    allowed: bool,
    expires_at: Instant,
}

pub struct CasbinEnforcerProvider {
    rule_repository: Arc<dyn CasbinRuleRepository>,
    enforcer: OnceCell<Option<RwLock<Enforcer>>>,
    decision_cache: RwLock<HashMap<DecisionCacheKey, DecisionCacheEntry>>,
    cache_ttl: Duration,
    model_conf: &'static str,
}

impl CasbinEnforcerProvider {
    pub fn new_with_cache_ttl(
        rule_repository: Arc<dyn CasbinRuleRepository>,
        cache_ttl: Duration,
    ) -> Self {
        Self::with_model(rule_repository, cache_ttl, MODEL_CONF)
    }

    pub(crate) fn with_model(
        rule_repository: Arc<dyn CasbinRuleRepository>,
        cache_ttl: Duration,
        model_conf: &'static str,
    ) -> Self {
        Self {
            rule_repository,
            enforcer: OnceCell::new(),
            decision_cache: RwLock::new(HashMap::new()),
            cache_ttl,
            model_conf,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.enforcer.initialized()
    }

    async fn enforcer(&self) -> Result<&RwLock<Enforcer>, AccessControlDomainError> {
        self.enforcer
            .get_or_init(|| self.initialize())
            .await
            .as_ref()
            .ok_or(AccessControlDomainError::EnforcerUnavailable)
    }

    async fn initialize(&self) -> Option<RwLock<Enforcer>> {
        // A store failure at startup yields an empty enforcer, not a missing one.
        let rules = match self.load_rules().await {
            Ok(rules) => rules,
            Err(error) => {
                warn!(error = %error, "failed to load casbin rules; starting with an empty policy");
                Vec::new()
            }
        };

        match build_enforcer(self.model_conf, &rules).await {
            Ok(enforcer) => {
                info!(rules = rules.len(), "casbin enforcer initialized");
                Some(RwLock::new(enforcer))
            }
            Err(error) => {
                error!(error = %error, "failed to build casbin enforcer from model");
                None
            }
        }
    }

    async fn load_rules(&self) -> Result<Vec<PolicyRule>, AccessControlDomainError> {
        let records = self.rule_repository.load_all().await?;
        Ok(deduplicate_rules(
            records.iter().filter_map(CasbinRuleRecord::to_policy_rule),
        ))
    }

    /// Replaces the in-memory policy with the current store contents.
    pub async fn reload(&self) -> Result<(), AccessControlDomainError> {
        let enforcer = self.enforcer().await?;

        // Held from the store read to the swap so overlapping reloads apply in order.
        let mut guard = enforcer.write().await;
        let rules = self.load_rules().await?;
        let rebuilt = build_enforcer(self.model_conf, &rules)
            .await
            .map_err(map_casbin_error)?;

        *guard = rebuilt;
        self.decision_cache.write().await.clear();
        drop(guard);

        debug!(rules = rules.len(), "casbin policy reloaded");
        Ok(())
    }

    pub async fn filtered_policy(
        &self,
        field_index: usize,
        field_values: Vec<String>,
    ) -> Result<Vec<Vec<String>>, AccessControlDomainError> {
        let enforcer = self.enforcer().await?;
        let guard = enforcer.read().await;
        Ok(guard.get_filtered_policy(field_index, field_values))
    }

    /// Returns `(allowed, served_from_cache)`.
    pub async fn enforce(
        &self,
        subject: &str,
        object: &str,
        action: &str,
    ) -> Result<(bool, bool), AccessControlDomainError> {
        let enforcer = self.enforcer().await?;
        let key = DecisionCacheKey {
            subject: subject.to_string(),
            object: object.to_string(),
            action: action.to_string(),
        };

        if let Some(allowed) = self.load_cached_decision(&key).await {
            return Ok((allowed, true));
        }

        // Must be cached under the read guard: reload clears under the write guard.
        let guard = enforcer.read().await;
        let allowed = guard
            .enforce((subject, object, action))
            .map_err(map_casbin_error)?;
        self.cache_decision(key, allowed).await;
        drop(guard);

        Ok((allowed, false))
    }

    async fn load_cached_decision(&self, key: &DecisionCacheKey) -> Option<bool> {
        let read_guard = self.decision_cache.read().await;
        read_guard.get(key).and_then(|entry| {
            if entry.expires_at > Instant::now() {
                Some(entry.allowed)
            } else {
                None
            }
        })
    }

    async fn cache_decision(&self, key: DecisionCacheKey, allowed: bool) {
        let mut write_guard = self.decision_cache.write().await;
        write_guard.insert(
            key,
            DecisionCacheEntry {
                allowed,
                expires_at: Instant::now() + self.cache_ttl,
            },
        );
    }
}

fn map_casbin_error(error: casbin::Error) -> AccessControlDomainError {
    AccessControlDomainError::InfrastructureError(error.to_string())
}
