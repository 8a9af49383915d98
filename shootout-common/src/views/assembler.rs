//! View assembly: detail record + owning product + jacks

use super::{ProductFields, ProductView};
use crate::db::{find_all_details, find_detail, find_jacks_by_product, find_product, DetailRecord};
use crate::{Error, Result};
use sqlx::SqlitePool;
use tracing::warn;

/// Join a detail record with its product and the product's jacks
///
/// A detail without a product row is corrupt data and fails the request.
pub async fn assemble<D: DetailRecord>(
    pool: &SqlitePool,
    detail: D,
) -> Result<ProductView<D::Payload>> {
    let product_id = detail.product_id();

    let product = find_product(pool, product_id).await?.ok_or_else(|| {
        Error::Internal(format!(
            "{} row {} has no matching product",
            D::TABLE,
            product_id
        ))
    })?;

    if product.product_type_id != D::KIND.id() {
        warn!(
            "Product {} is typed '{}' but has a {} row",
            product_id,
            product.product_type,
            D::TABLE
        );
    }

    let jacks = find_jacks_by_product(pool, product_id).await?;

    Ok(ProductView {
        product: ProductFields::from(product),
        detail: detail.into_payload(),
        jacks,
    })
}

/// Assemble each record in order
pub async fn assemble_all<D: DetailRecord>(
    pool: &SqlitePool,
    details: Vec<D>,
) -> Result<Vec<ProductView<D::Payload>>> {
    let mut views = Vec::with_capacity(details.len());
    for detail in details {
        views.push(assemble(pool, detail).await?);
    }
    Ok(views)
}

/// View of one product by id, `None` when it has no detail of type `D`
pub async fn find_view<D: DetailRecord>(
    pool: &SqlitePool,
    product_id: i64,
) -> Result<Option<ProductView<D::Payload>>> {
    match find_detail::<D>(pool, product_id).await? {
        Some(detail) => Ok(Some(assemble(pool, detail).await?)),
        None => Ok(None),
    }
}

/// Views of every product with a detail of type `D`, ordered by id
pub async fn list_views<D: DetailRecord>(pool: &SqlitePool) -> Result<Vec<ProductView<D::Payload>>> {
    let details = find_all_details::<D>(pool).await?;
    assemble_all(pool, details).await
}
