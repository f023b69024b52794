use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use tracing::debug;

use crate::access_control::{
    domain::model::enums::access_control_domain_error::AccessControlDomainError,
    infrastructure::persistence::repositories::casbin_rule_repository::{
        CasbinRuleRecord, CasbinRuleRepository, POLICY_PTYPE,
    },
};

const VALUE_COLUMNS: [&str; 6] = ["v0", "v1", "v2", "v3", "v4", "v5"];

pub struct SqlxCasbinRuleRepositoryImpl {
    pool: PgPool,
}

impl SqlxCasbinRuleRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: sqlx::postgres::PgRow) -> Result<CasbinRuleRecord, AccessControlDomainError> {
        Ok(CasbinRuleRecord {
            ptype: row.try_get("ptype").map_err(map_infra_error)?,
            v0: row.try_get("v0").map_err(map_infra_error)?,
            v1: row.try_get("v1").map_err(map_infra_error)?,
            v2: row.try_get("v2").map_err(map_infra_error)?,
            v3: row.try_get("v3").map_err(map_infra_error)?,
            v4: row.try_get("v4").map_err(map_infra_error)?,
            v5: row.try_get("v5").map_err(map_infra_error)?,
        })
    }

    fn insert_builder(rules: &[CasbinRuleRecord]) -> QueryBuilder<'static, Postgres> {
        let mut builder =
            QueryBuilder::new("INSERT INTO casbin_rule (ptype, v0, v1, v2, v3, v4, v5) ");
        builder.push_values(rules.iter().cloned(), |mut row, rule| {
            row.push_bind(rule.ptype)
                .push_bind(rule.v0)
                .push_bind(rule.v1)
                .push_bind(rule.v2)
                .push_bind(rule.v3)
                .push_bind(rule.v4)
                .push_bind(rule.v5);
        });
        builder
    }
}

#[async_trait]
impl CasbinRuleRepository for SqlxCasbinRuleRepositoryImpl {
    async fn load_all(&self) -> Result<Vec<CasbinRuleRecord>, AccessControlDomainError> {
        let statement = r#"
            SELECT ptype, v0, v1, v2, v3, v4, v5
            FROM casbin_rule
            ORDER BY id
        "#;

        let rows = sqlx::query(statement)
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_record).collect()
    }

    async fn insert_rules(
        &self,
        rules: &[CasbinRuleRecord],
    ) -> Result<u64, AccessControlDomainError> {
        if rules.is_empty() {
            return Ok(0);
        }

        let result = Self::insert_builder(rules)
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected())
    }

    async fn remove_filtered(
        &self,
        ptype: &str,
        field_index: usize,
        field_values: &[String],
    ) -> Result<u64, AccessControlDomainError> {
        let mut builder = QueryBuilder::<Postgres>::new("DELETE FROM casbin_rule WHERE ptype = ");
        builder.push_bind(ptype.to_string());

        for (offset, value) in field_values.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let column = VALUE_COLUMNS
                .get(field_index + offset)
                .ok_or(AccessControlDomainError::InvalidPolicyFilter)?;
            builder.push(format!(" AND {column} = "));
            builder.push_bind(value.clone());
        }

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        debug!(
            ptype,
            field_index,
            removed = result.rows_affected(),
            "removed filtered casbin rules"
        );
        Ok(result.rows_affected())
    }

    async fn replace_subject_rules(
        &self,
        subject: &str,
        rules: &[CasbinRuleRecord],
    ) -> Result<u64, AccessControlDomainError> {
        let mut transaction = self.pool.begin().await.map_err(map_infra_error)?;

        sqlx::query("DELETE FROM casbin_rule WHERE ptype = $1 AND v0 = $2")
            .bind(POLICY_PTYPE)
            .bind(subject)
            .execute(&mut *transaction)
            .await
            .map_err(map_infra_error)?;

        let inserted = if rules.is_empty() {
            0
        } else {
            Self::insert_builder(rules)
                .build()
                .execute(&mut *transaction)
                .await
                .map_err(map_infra_error)?
                .rows_affected()
        };

        transaction.commit().await.map_err(map_infra_error)?;

        Ok(inserted)
    }

    async fn update_object_action(
        &self,
        old_object: &str,
        old_action: &str,
        new_object: &str,
        new_action: &str,
    ) -> Result<u64, AccessControlDomainError> {
        let statement = r#"
            UPDATE casbin_rule
            SET v1 = $1, v2 = $2
            WHERE v1 = $3 AND v2 = $4
        "#;

        let result = sqlx::query(statement)
            .bind(new_object)
            .bind(new_action)
            .bind(old_object)
            .bind(old_action)
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected())
    }
}

fn map_infra_error(error: sqlx::Error) -> AccessControlDomainError {
    AccessControlDomainError::InfrastructureError(error.to_string())
}
