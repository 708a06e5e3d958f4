//! Sample catalog data for local development.

use shopfront_core::NewProduct;
use sqlx::SqlitePool;

use crate::products::insert_product;
use crate::DbError;

fn sample(
    name: &str,
    description: &str,
    price: f64,
    image_url: &str,
    category: &str,
    stock: i64,
    supplier: &str,
    shipping_cost: f64,
) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: description.to_string(),
        price,
        image_url: Some(image_url.to_string()),
        category: Some(category.to_string()),
        stock,
        supplier_url: Some(format!(
            "https://suppliers.example.com/{}",
            supplier.to_lowercase().replace(' ', "-")
        )),
        supplier_name: Some(supplier.to_string()),
        shipping_cost,
    }
}

/// A small fixed catalog covering every view: several categories, several
/// suppliers, and a mix of free and paid shipping so the supplier page shows
/// products the public listings hide.
#[must_use]
pub fn sample_products() -> Vec<NewProduct> {
    vec![
        sample(
            "Eco-Friendly Water Bottle",
            "Stylish 500ml insulated water bottle made from recycled materials. \
             Keeps drinks cold for 24 hours or hot for 12 hours.",
            24.99,
            "https://images.unsplash.com/photo-1602143407151-7111542de6e8",
            "Eco-Friendly",
            100,
            "GreenWares Co",
            0.0,
        ),
        sample(
            "Smart LED Strip Lights",
            "10m RGB LED strip with app control, music sync, and voice control \
             compatibility. Perfect for room ambiance.",
            29.99,
            "https://images.unsplash.com/photo-1586902197503-e71026292412",
            "Tech Accessories",
            75,
            "BrightSpark Supply",
            4.99,
        ),
        sample(
            "Collapsible Storage Boxes (Set of 3)",
            "Space-saving fabric storage boxes with lids. Perfect for organizing \
             closets, toys, or office supplies.",
            34.99,
            "https://images.unsplash.com/photo-1584269600464-37b1b58a9fe7",
            "Home Organization",
            50,
            "GreenWares Co",
            0.0,
        ),
        sample(
            "Resistance Bands Set",
            "5-piece exercise bands set with different resistance levels. \
             Includes carry bag and workout guide.",
            19.99,
            "https://images.unsplash.com/photo-1598632640487-6ea4a5e8d6c0",
            "Wellness & Fitness",
            120,
            "FitKit Traders",
            3.50,
        ),
        sample(
            "Interactive Cat Toy",
            "Battery-operated moving toy that keeps cats entertained. Features \
             random movement patterns and LED light.",
            22.99,
            "https://images.unsplash.com/photo-1587300003388-59208cc962cb",
            "Pet Accessories",
            60,
            "FitKit Traders",
            0.0,
        ),
        sample(
            "Bamboo Desk Organizer",
            "Sustainable bamboo desk organizer with multiple compartments for \
             stationery and devices.",
            39.99,
            "https://images.unsplash.com/photo-1591637333184-19aa5d6f9f6c",
            "Home Organization",
            45,
            "GreenWares Co",
            0.0,
        ),
    ]
}

/// Insert the sample catalog.
///
/// Inserts are not deduplicated; running the command twice doubles the
/// catalog. Returns the number of rows inserted.
///
/// # Errors
///
/// Returns [`DbError`] if any insert fails.
pub async fn seed_catalog(pool: &SqlitePool) -> Result<usize, DbError> {
    let drafts = sample_products();
    let mut count = 0usize;

    for draft in &drafts {
        let row = insert_product(pool, draft).await?;
        tracing::debug!(id = row.id, name = %row.name, "seeded product");
        count += 1;
    }

    Ok(count)
}
