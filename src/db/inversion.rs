use crate::db::StoreError;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Inversion>, String> {
    tracing::info!("Fetch inversion {}", id);
    sqlx::query_as::<_, models::Inversion>(r#"SELECT * FROM inversion WHERE id=$1 LIMIT 1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch inversion, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

/// `None` lists every owner's rows.
pub async fn fetch_by_owner(
    pool: &PgPool,
    owner_id: Option<i32>,
) -> Result<Vec<models::Inversion>, String> {
    let query_span = tracing::info_span!("Fetch inversiones by owner.", ?owner_id);
    sqlx::query_as::<_, models::Inversion>(
        r#"
        SELECT
            *
        FROM inversion
        WHERE $1::integer IS NULL OR owner_id=$1
        ORDER BY id
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch inversiones, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(
    pool: &PgPool,
    inversion: models::Inversion,
) -> Result<models::Inversion, String> {
    let query_span = tracing::info_span!("Saving user's inversion into the database");
    sqlx::query_as::<_, models::Inversion>(
        r#"
        INSERT INTO inversion (owner_id, investment_type, amount, created_at, updated_at)
        VALUES ($1, $2, $3, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(inversion.owner_id)
    .bind(&inversion.investment_type)
    .bind(inversion.amount)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to insert".to_string()
    })
}

/// `NotFound` when the row went away since it was fetched.
pub async fn update(
    pool: &PgPool,
    inversion: models::Inversion,
) -> Result<models::Inversion, StoreError> {
    let query_span = tracing::info_span!("Updating user inversion");
    sqlx::query_as::<_, models::Inversion>(
        r#"
        UPDATE inversion
        SET
            investment_type=$2,
            amount=$3,
            updated_at=NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(inversion.id)
    .bind(&inversion.investment_type)
    .bind(inversion.amount)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        StoreError::Internal("Failed to update".to_string())
    })?
    .map(|inversion| {
        tracing::info!("Inversion {} has been saved", inversion.id);
        inversion
    })
    .ok_or_else(|| StoreError::NotFound("Inversion not found".to_string()))
}

/// Succeeds whether or not the row existed.
#[tracing::instrument(name = "Delete inversion of a user.", skip(pool))]
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    sqlx::query::<sqlx::Postgres>("DELETE FROM inversion WHERE id = $1;")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete inversion: {:?}", err);
            "Failed to delete inversion".to_string()
        })
}
