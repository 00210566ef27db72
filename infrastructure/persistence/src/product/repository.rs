use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductChanges};
use business::domain::product::repository::ProductRepository;

use crate::db::database_error;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, delivery_price FROM product",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("product.get_all", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, delivery_price FROM product WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("product.get_by_id", e))?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, delivery_price FROM product WHERE name LIKE $1",
        )
        .bind(format!("%{name}%"))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("product.search_by_name", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM product WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| database_error("product.exists", e))?;

        Ok(exists.0)
    }

    async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO product (id, name, description, price, delivery_price)
            VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price)
        .bind(&product.delivery_price)
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("product.insert", e))?;

        Ok(())
    }

    async fn update(&self, id: Uuid, changes: &ProductChanges) -> Result<(), RepositoryError> {
        // COALESCE keeps the stored value wherever the caller sent nothing,
        // merging in one statement instead of read-then-write.
        sqlx::query(
            r#"UPDATE product SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                delivery_price = COALESCE($5, delivery_price)
            WHERE id = $1"#,
        )
        .bind(id)
        .bind(changes.name.as_deref())
        .bind(changes.description.as_deref())
        .bind(changes.price.as_ref())
        .bind(changes.delivery_price.as_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("product.update", e))?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("product.delete", e))?;

        Ok(())
    }
}
