//! Product catalog service

use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::Product;
use shared::validation::{validate_name, validate_price, validate_sku};

/// Product service for catalog management
#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

/// Input for creating a product
#[derive(Debug, Deserialize)]
pub struct CreateProductInput {
    pub sku: String,
    pub name: String,
    pub uom: String,
    pub price: Decimal,
}

/// Input for updating a product (full replacement, matching the edit form)
#[derive(Debug, Deserialize)]
pub struct UpdateProductInput {
    pub sku: String,
    pub name: String,
    pub uom: String,
    pub price: Decimal,
}

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List all products
    pub async fn list_products(&self) -> AppResult<Vec<Product>> {
        let products = sqlx::query_as::<_, ProductRow>(
            "SELECT id, sku, name, uom, price, created_at, updated_at FROM products ORDER BY sku",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(products.into_iter().map(Into::into).collect())
    }

    /// Create a product
    pub async fn create_product(&self, input: CreateProductInput) -> AppResult<Product> {
        Self::validate(&input.sku, &input.name, input.price)?;

        let product = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (sku, name, uom, price)
            VALUES ($1, $2, $3, $4)
            RETURNING id, sku, name, uom, price, created_at, updated_at
            "#,
        )
        .bind(&input.sku)
        .bind(&input.name)
        .bind(&input.uom)
        .bind(input.price)
        .fetch_one(&self.db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "sku"))?;

        Ok(product.into())
    }

    /// Update a product
    pub async fn update_product(
        &self,
        product_id: Uuid,
        input: UpdateProductInput,
    ) -> AppResult<Product> {
        Self::validate(&input.sku, &input.name, input.price)?;

        let product = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products
            SET sku = $1, name = $2, uom = $3, price = $4, updated_at = now()
            WHERE id = $5
            RETURNING id, sku, name, uom, price, created_at, updated_at
            "#,
        )
        .bind(&input.sku)
        .bind(&input.name)
        .bind(&input.uom)
        .bind(input.price)
        .bind(product_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "sku"))?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        Ok(product.into())
    }

    /// Delete a product
    pub async fn delete_product(&self, product_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Product".to_string()));
        }
        Ok(())
    }

    fn validate(sku: &str, name: &str, price: Decimal) -> AppResult<()> {
        validate_sku(sku).map_err(|msg| AppError::Validation {
            field: "sku".to_string(),
            message: msg.to_string(),
        })?;
        validate_name(name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
        })?;
        validate_price(price).map_err(|msg| AppError::Validation {
            field: "price".to_string(),
            message: msg.to_string(),
        })?;
        Ok(())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    sku: String,
    name: String,
    uom: String,
    price: Decimal,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            sku: row.sku,
            name: row.name,
            uom: row.uom,
            price: row.price,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
