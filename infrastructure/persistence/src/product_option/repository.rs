use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product_option::model::{ProductOption, ProductOptionChanges};
use business::domain::product_option::repository::ProductOptionRepository;

use crate::db::database_error;

use super::entity::ProductOptionEntity;

pub struct ProductOptionRepositoryPostgres {
    pool: PgPool,
}

impl ProductOptionRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductOptionRepository for ProductOptionRepositoryPostgres {
    async fn get_all_by_product_id(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<ProductOption>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductOptionEntity>(
            "SELECT id, product_id, name, description FROM product_option WHERE product_id = $1",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("product_option.get_all_by_product_id", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(
        &self,
        id: Uuid,
        product_id: Uuid,
    ) -> Result<Option<ProductOption>, RepositoryError> {
        // Scoping by the pair makes an option unreachable through the wrong
        // parent, it simply matches no row.
        let entity = sqlx::query_as::<_, ProductOptionEntity>(
            "SELECT id, product_id, name, description FROM product_option WHERE id = $1 AND product_id = $2",
        )
        .bind(id)
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("product_option.get_by_id", e))?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn insert(&self, option: &ProductOption) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO product_option (id, product_id, name, description)
            VALUES ($1, $2, $3, $4)"#,
        )
        .bind(option.id)
        .bind(option.product_id)
        .bind(&option.name)
        .bind(&option.description)
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("product_option.insert", e))?;

        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        product_id: Uuid,
        changes: &ProductOptionChanges,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"UPDATE product_option SET
                name = COALESCE($3, name),
                description = COALESCE($4, description)
            WHERE id = $1 AND product_id = $2"#,
        )
        .bind(id)
        .bind(product_id)
        .bind(changes.name.as_deref())
        .bind(changes.description.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("product_option.update", e))?;

        Ok(())
    }

    async fn delete(&self, id: Uuid, product_id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM product_option WHERE id = $1 AND product_id = $2")
            .bind(id)
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("product_option.delete", e))?;

        Ok(())
    }
}
