use crate::db::{is_unique_violation, StoreError};
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Item>, String> {
    tracing::info!("Fetch item {}", id);
    sqlx::query_as::<_, models::Item>(r#"SELECT * FROM item WHERE id=$1 LIMIT 1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch item, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn fetch_by_name(pool: &PgPool, name: &str) -> Result<Option<models::Item>, String> {
    let query_span = tracing::info_span!("Fetch item by name.");
    sqlx::query_as::<_, models::Item>(r#"SELECT * FROM item WHERE name=$1 LIMIT 1"#)
        .bind(name)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch item by name, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Item>, String> {
    let query_span = tracing::info_span!("Fetch all items.");
    sqlx::query_as::<_, models::Item>(r#"SELECT * FROM item ORDER BY id"#)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch items, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn insert(pool: &PgPool, mut item: models::Item) -> Result<models::Item, StoreError> {
    let query_span = tracing::info_span!("Saving new item into the database");
    sqlx::query_as::<_, (i32, chrono::DateTime<chrono::Utc>)>(
        r#"
        INSERT INTO item (name, email, password, role, created_at, updated_at)
        VALUES ($1, $2, $3, $4, NOW(), NOW())
        RETURNING id, created_at
        "#,
    )
    .bind(&item.name)
    .bind(&item.email)
    .bind(&item.password)
    .bind(&item.role)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(move |(id, created_at)| {
        item.id = id;
        item.created_at = created_at;
        item.updated_at = created_at;
        item
    })
    .map_err(|e| {
        if is_unique_violation(&e) {
            tracing::info!("Item name already taken: {:?}", e);
            return StoreError::Conflict("Name already registered".to_string());
        }
        tracing::error!("Failed to execute query: {:?}", e);
        StoreError::Internal("Failed to insert".to_string())
    })
}

/// `NotFound` when the row went away since it was fetched.
pub async fn update(pool: &PgPool, item: models::Item) -> Result<models::Item, StoreError> {
    let query_span = tracing::info_span!("Updating item");
    sqlx::query_as::<_, models::Item>(
        r#"
        UPDATE item
        SET
            name=$2,
            email=$3,
            password=$4,
            role=$5,
            updated_at=NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(item.id)
    .bind(&item.name)
    .bind(&item.email)
    .bind(&item.password)
    .bind(&item.role)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        if is_unique_violation(&err) {
            tracing::info!("Item name already taken: {:?}", err);
            return StoreError::Conflict("Name already registered".to_string());
        }
        tracing::error!("Failed to execute query: {:?}", err);
        StoreError::Internal("Failed to update".to_string())
    })?
    .map(|item| {
        tracing::info!("Item {} has been saved", item.id);
        item
    })
    .ok_or_else(|| StoreError::NotFound("Item not found".to_string()))
}

/// Succeeds whether or not the row existed. Owned inversiones go with it.
#[tracing::instrument(name = "Delete item.", skip(pool))]
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    sqlx::query::<sqlx::Postgres>("DELETE FROM item WHERE id = $1;")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete item: {:?}", err);
            "Failed to delete item".to_string()
        })
}
