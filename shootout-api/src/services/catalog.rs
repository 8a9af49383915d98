//! Catalog queries behind the list/get endpoints
//!
//! Views of a single detail type go straight through `find_view`/`list_views`;
//! the functions here cover filters and cross-table summaries.

use shootout_common::db::{
    count_products_by_manufacturer, find_all_manufacturers, find_all_product_types,
    find_all_products, find_jacks_by_product, find_manufacturer, find_pedals_by_effect_type,
    find_product, find_products_by_manufacturer, find_products_by_type, find_utilities_by_type,
    search_manufacturers_by_name, Jack, Manufacturer, PedalDetail, ProductKind, ProductType,
    UtilityDetail,
};
use shootout_common::views::{
    assemble_all, list_views, ManufacturerView, PedalView, ProductDetailView, ProductSummary,
    UtilityView,
};
use shootout_common::Result;
use sqlx::SqlitePool;
use tracing::debug;

/// Treat blank filter strings as absent
fn non_blank(filter: Option<&str>) -> Option<&str> {
    filter.map(str::trim).filter(|s| !s.is_empty())
}

async fn with_count(pool: &SqlitePool, manufacturer: Manufacturer) -> Result<ManufacturerView> {
    let count = count_products_by_manufacturer(pool, manufacturer.id).await?;
    Ok(ManufacturerView::new(manufacturer, count))
}

/// All manufacturers, or those whose name contains `search`
pub async fn list_manufacturers(
    pool: &SqlitePool,
    search: Option<&str>,
) -> Result<Vec<ManufacturerView>> {
    let manufacturers = match non_blank(search) {
        Some(term) => search_manufacturers_by_name(pool, term).await?,
        None => find_all_manufacturers(pool).await?,
    };

    let mut views = Vec::with_capacity(manufacturers.len());
    for manufacturer in manufacturers {
        views.push(with_count(pool, manufacturer).await?);
    }
    Ok(views)
}

pub async fn get_manufacturer(pool: &SqlitePool, id: i64) -> Result<Option<ManufacturerView>> {
    match find_manufacturer(pool, id).await? {
        Some(manufacturer) => Ok(Some(with_count(pool, manufacturer).await?)),
        None => Ok(None),
    }
}

pub async fn list_manufacturer_products(
    pool: &SqlitePool,
    manufacturer_id: i64,
) -> Result<Vec<ProductSummary>> {
    let products = find_products_by_manufacturer(pool, manufacturer_id).await?;
    Ok(products.iter().map(ProductSummary::from).collect())
}

/// All products, optionally limited to one product type id
///
/// An id outside the fixed product type set matches nothing.
pub async fn list_products(pool: &SqlitePool, type_id: Option<i64>) -> Result<Vec<ProductSummary>> {
    let products = match type_id {
        Some(type_id) => match ProductKind::from_id(type_id) {
            Ok(kind) => find_products_by_type(pool, kind.id()).await?,
            Err(e) => {
                debug!("{}", e);
                Vec::new()
            }
        },
        None => find_all_products(pool).await?,
    };
    Ok(products.iter().map(ProductSummary::from).collect())
}

pub async fn get_product(pool: &SqlitePool, id: i64) -> Result<Option<ProductDetailView>> {
    let Some(product) = find_product(pool, id).await? else {
        return Ok(None);
    };
    let jacks = find_jacks_by_product(pool, id).await?;
    Ok(Some(ProductDetailView::new(product, jacks)))
}

/// Jacks of a product; unknown ids give an empty list
pub async fn list_product_jacks(pool: &SqlitePool, product_id: i64) -> Result<Vec<Jack>> {
    find_jacks_by_product(pool, product_id).await
}

pub async fn list_product_types(pool: &SqlitePool) -> Result<Vec<ProductType>> {
    find_all_product_types(pool).await
}

/// Pedal views, optionally limited to one effect type
pub async fn list_pedals(pool: &SqlitePool, effect_type: Option<&str>) -> Result<Vec<PedalView>> {
    match non_blank(effect_type) {
        Some(effect_type) => {
            let details = find_pedals_by_effect_type(pool, effect_type).await?;
            assemble_all(pool, details).await
        }
        None => list_views::<PedalDetail>(pool).await,
    }
}

/// Utility views, optionally limited to one utility type
pub async fn list_utilities(
    pool: &SqlitePool,
    utility_type: Option<&str>,
) -> Result<Vec<UtilityView>> {
    match non_blank(utility_type) {
        Some(utility_type) => {
            let details = find_utilities_by_type(pool, utility_type).await?;
            assemble_all(pool, details).await
        }
        None => list_views::<UtilityDetail>(pool).await,
    }
}
