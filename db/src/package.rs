use common::error::{AppError, Res};
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{dtos::package::PackageWrite, models::package::VendorPackage};

pub async fn list_packages_by_vendor<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    vendor_id: Uuid,
) -> Res<Vec<VendorPackage>> {
    sqlx::query_as::<_, VendorPackage>(
        "SELECT * FROM vendor_packages WHERE vendor_id = $1 ORDER BY sort_order, created_at",
    )
    .bind(vendor_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn insert_package<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    vendor_id: Uuid,
    data: PackageWrite,
) -> Res<VendorPackage> {
    sqlx::query_as::<_, VendorPackage>(
        r#"
        INSERT INTO vendor_packages (vendor_id, name, description, price_cents, features, sort_order)
        VALUES ($1, $2, $3, $4, $5,
                (SELECT COALESCE(MAX(sort_order) + 1, 0) FROM vendor_packages WHERE vendor_id = $1))
        RETURNING *
        "#,
    )
    .bind(vendor_id)
    .bind(data.name)
    .bind(data.description)
    .bind(data.price_cents)
    .bind(data.features)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn update_package<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    package_id: Uuid,
    vendor_id: Uuid,
    data: PackageWrite,
) -> Res<VendorPackage> {
    sqlx::query_as::<_, VendorPackage>(
        r#"
        UPDATE vendor_packages
        SET name = $1, description = $2, price_cents = $3, features = $4, updated_at = now()
        WHERE id = $5 AND vendor_id = $6
        RETURNING *
        "#,
    )
    .bind(data.name)
    .bind(data.description)
    .bind(data.price_cents)
    .bind(data.features)
    .bind(package_id)
    .bind(vendor_id)
    .fetch_optional(executor)
    .await?
    .ok_or_else(|| AppError::NotFound("Package not found".to_string()))
}

pub async fn delete_package<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    package_id: Uuid,
    vendor_id: Uuid,
) -> Res<()> {
    let result = sqlx::query("DELETE FROM vendor_packages WHERE id = $1 AND vendor_id = $2")
        .bind(package_id)
        .bind(vendor_id)
        .execute(executor)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Package not found".to_string()));
    }
    Ok(())
}

/// Rewrites sort_order from the given id sequence in one transaction.
/// Every id must belong to the vendor and the sequence must cover all of
/// its packages, otherwise nothing is changed.
pub async fn reorder_packages(pool: &PgPool, vendor_id: Uuid, ordered_ids: &[Uuid]) -> Res<()> {
    let mut tx = pool.begin().await?;

    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM vendor_packages WHERE vendor_id = $1")
            .bind(vendor_id)
            .fetch_one(&mut *tx)
            .await?;
    if count != ordered_ids.len() as i64 {
        return Err(AppError::BadRequest(
            "Ordering must include every package exactly once".to_string(),
        ));
    }

    for (position, package_id) in ordered_ids.iter().enumerate() {
        let result = sqlx::query(
            "UPDATE vendor_packages SET sort_order = $1, updated_at = now() WHERE id = $2 AND vendor_id = $3",
        )
        .bind(position as i32)
        .bind(package_id)
        .bind(vendor_id)
        .execute(&mut *tx)
        .await?;
        if result.rows_affected() != 1 {
            return Err(AppError::BadRequest(format!(
                "Package {} does not belong to this vendor",
                package_id
            )));
        }
    }

    tx.commit().await?;
    Ok(())
}
