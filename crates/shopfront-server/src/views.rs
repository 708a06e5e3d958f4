//! Pure rendering of pre-fetched catalog data into HTML pages.
//!
//! No store access happens here: every function takes an explicit view model
//! and returns a complete document as a `String`. All interpolated text is
//! escaped.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use shopfront_db::ProductRow;

/// Product grid for the home page and category pages.
pub struct ListingView<'a> {
    pub heading: &'a str,
    pub products: &'a [ProductRow],
    /// Distinct category labels for the navigation strip.
    pub categories: &'a [String],
}

pub struct DetailView<'a> {
    pub product: &'a ProductRow,
}

/// Supplier name mapped to that supplier's full product set.
pub struct SupplierView<'a> {
    pub groups: &'a BTreeMap<String, Vec<ProductRow>>,
}

pub struct AdminFormView<'a> {
    /// Rendered as an error banner above the form when present.
    pub error: Option<&'a str>,
}

pub fn render_listing(view: &ListingView<'_>) -> String {
    let mut body = String::new();
    let _ = write!(body, "<h1>{}</h1>", escape_html(view.heading));
    body.push_str(&category_nav(view.categories));

    if view.products.is_empty() {
        body.push_str("<p class=\"empty\">No products yet.</p>");
    } else {
        body.push_str("<ul class=\"grid\">");
        for product in view.products {
            body.push_str(&product_card(product));
        }
        body.push_str("</ul>");
    }

    page(view.heading, &body)
}

pub fn render_detail(view: &DetailView<'_>) -> String {
    let p = view.product;
    let mut body = String::new();

    let _ = write!(body, "<article class=\"detail\"><h1>{}</h1>", escape_html(&p.name));
    if let Some(image_url) = &p.image_url {
        let _ = write!(
            body,
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(image_url),
            escape_html(&p.name)
        );
    }
    let _ = write!(body, "<p class=\"price\">{}</p>", money(p.price));
    body.push_str(shipping_badge(p));
    let _ = write!(body, "<p>{}</p>", escape_html(&p.description));
    let _ = write!(body, "<p class=\"stock\">{} in stock</p>", p.stock);

    if let Some(category) = &p.category {
        let _ = write!(
            body,
            "<p>Category: <a href=\"{}\">{}</a></p>",
            category_href(category),
            escape_html(category)
        );
    }
    if let Some(supplier) = &p.supplier_name {
        let _ = write!(body, "<p>Supplied by {}</p>", escape_html(supplier));
    }
    let _ = write!(
        body,
        "<p class=\"listed\">Listed on {}</p>",
        p.created_at.format("%Y-%m-%d")
    );
    let _ = write!(
        body,
        "<button id=\"add-to-cart\" data-product-id=\"{}\">Add to cart</button>",
        p.id
    );
    body.push_str("</article>");
    body.push_str(
        "<script>\
         document.getElementById('add-to-cart').addEventListener('click', (e) => {\
           fetch('/api/add-to-cart', {\
             method: 'POST',\
             headers: {'Content-Type': 'application/json'},\
             body: JSON.stringify({product_id: e.target.dataset.productId})\
           }).then(() => { e.target.textContent = 'Added!'; });\
         });\
         </script>",
    );

    page(&p.name, &body)
}

pub fn render_grouped(view: &SupplierView<'_>) -> String {
    let mut body = String::new();
    body.push_str("<h1>Suppliers</h1>");

    if view.groups.is_empty() {
        body.push_str("<p class=\"empty\">No suppliers yet.</p>");
    }
    for (supplier, products) in view.groups {
        let _ = write!(
            body,
            "<section class=\"supplier\"><h2>{}</h2><ul class=\"grid\">",
            escape_html(supplier)
        );
        for product in products {
            body.push_str(&product_card(product));
        }
        body.push_str("</ul></section>");
    }

    page("Suppliers", &body)
}

pub fn render_cart() -> String {
    let body = "<h1>Your cart</h1>\
         <p class=\"empty\">Your cart is empty. Items added here are not kept \
         between visits.</p>\
         <p><a href=\"/\">Continue shopping</a></p>";
    page("Cart", body)
}

pub fn render_admin_form(view: &AdminFormView<'_>) -> String {
    let mut body = String::new();
    body.push_str("<h1>Add product</h1>");
    if let Some(error) = view.error {
        let _ = write!(body, "<p class=\"error\">{}</p>", escape_html(error));
    }
    body.push_str(
        "<form method=\"post\" action=\"/admin/add-product\">\
         <label>Name <input name=\"name\" required></label>\
         <label>Description <textarea name=\"description\" required></textarea></label>\
         <label>Price <input name=\"price\" required></label>\
         <label>Image URL <input name=\"image_url\"></label>\
         <label>Category <input name=\"category\"></label>\
         <label>Stock <input name=\"stock\" value=\"0\"></label>\
         <label>Supplier URL <input name=\"supplier_url\"></label>\
         <label>Supplier name <input name=\"supplier_name\"></label>\
         <button type=\"submit\">Create</button>\
         </form>",
    );
    page("Add product", &body)
}

pub fn render_not_found() -> String {
    page(
        "Not found",
        "<h1>Not found</h1><p>That product does not exist. <a href=\"/\">Back to the catalog.</a></p>",
    )
}

pub fn render_error(message: &str) -> String {
    let body = format!("<h1>Something went wrong</h1><p>{}</p>", escape_html(message));
    page("Error", &body)
}

// ---------------------------------------------------------------------------
// Building blocks
// ---------------------------------------------------------------------------

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\">\
         <head>\
         <meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{} | Shopfront</title>\
         <style>\
         body{{font-family:system-ui,sans-serif;margin:0 auto;max-width:960px;padding:1rem}}\
         nav a{{margin-right:1rem}}\
         ul.grid{{list-style:none;display:grid;grid-template-columns:repeat(auto-fill,minmax(220px,1fr));gap:1rem;padding:0}}\
         .card{{border:1px solid #ddd;border-radius:6px;padding:1rem}}\
         .card img{{max-width:100%;height:auto}}\
         .price{{font-weight:bold}}\
         .badge{{color:#0a7d33;font-size:0.85rem}}\
         .error{{color:#b00020;border:1px solid #b00020;padding:0.5rem}}\
         form label{{display:block;margin-bottom:0.75rem}}\
         </style>\
         </head>\
         <body>\
         <nav><a href=\"/\">Shopfront</a><a href=\"/suppliers\">Suppliers</a>\
         <a href=\"/cart\">Cart</a><a href=\"/admin/add-product\">Add product</a></nav>\
         <main>{}</main>\
         </body>\
         </html>",
        escape_html(title),
        body
    )
}

fn product_card(product: &ProductRow) -> String {
    let mut card = String::new();
    let _ = write!(card, "<li class=\"card\"><a href=\"/product/{}\">", product.id);
    if let Some(image_url) = &product.image_url {
        let _ = write!(
            card,
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(image_url),
            escape_html(&product.name)
        );
    }
    let _ = write!(card, "<h3>{}</h3></a>", escape_html(&product.name));
    let _ = write!(card, "<p class=\"price\">{}</p>", money(product.price));
    card.push_str(shipping_badge(product));
    card.push_str("</li>");
    card
}

fn category_nav(categories: &[String]) -> String {
    if categories.is_empty() {
        return String::new();
    }
    let mut nav = String::from("<nav class=\"categories\">");
    for category in categories {
        let _ = write!(
            nav,
            "<a href=\"{}\">{}</a>",
            category_href(category),
            escape_html(category)
        );
    }
    nav.push_str("</nav>");
    nav
}

fn shipping_badge(product: &ProductRow) -> &'static str {
    if product.ships_free() {
        "<p class=\"badge\">Free shipping</p>"
    } else {
        ""
    }
}

fn category_href(category: &str) -> String {
    format!(
        "/category/{}",
        utf8_percent_encode(category, NON_ALPHANUMERIC)
    )
}

fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn product(name: &str, shipping_cost: f64) -> ProductRow {
        ProductRow {
            id: 1,
            name: name.to_string(),
            description: "A sturdy thing.".to_string(),
            price: 9.99,
            image_url: None,
            category: Some("tools".to_string()),
            stock: 5,
            supplier_url: None,
            shipping_cost,
            supplier_name: Some("Acme".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("Tools & Home \"stuff\""), "Tools &amp; Home &quot;stuff&quot;");
    }

    #[test]
    fn listing_renders_products_and_category_links() {
        let products = vec![product("Widget", 0.0)];
        let categories = vec!["Tech Accessories".to_string(), "tools".to_string()];
        let html = render_listing(&ListingView {
            heading: "Products",
            products: &products,
            categories: &categories,
        });

        assert!(html.contains("Widget"));
        assert!(html.contains("$9.99"));
        assert!(html.contains("href=\"/product/1\""));
        // Category labels with spaces must be percent-encoded in hrefs.
        assert!(html.contains("/category/Tech%20Accessories"));
        assert!(html.contains("Free shipping"));
    }

    #[test]
    fn listing_with_no_products_says_so() {
        let html = render_listing(&ListingView {
            heading: "Products",
            products: &[],
            categories: &[],
        });
        assert!(html.contains("No products yet."));
    }

    #[test]
    fn detail_escapes_untrusted_text() {
        let mut p = product("<b>Widget</b>", 0.0);
        p.description = "nice & cheap".to_string();
        let html = render_detail(&DetailView { product: &p });

        assert!(html.contains("&lt;b&gt;Widget&lt;/b&gt;"));
        assert!(html.contains("nice &amp; cheap"));
        assert!(!html.contains("<b>Widget</b>"));
    }

    #[test]
    fn paid_shipping_product_gets_no_badge() {
        let p = product("Widget", 4.99);
        let html = render_detail(&DetailView { product: &p });
        assert!(!html.contains("Free shipping"));
    }

    #[test]
    fn grouped_view_renders_one_section_per_supplier() {
        let mut groups = BTreeMap::new();
        groups.insert("Acme".to_string(), vec![product("Widget", 0.0)]);
        groups.insert("Globex".to_string(), vec![product("Gadget", 4.99)]);

        let html = render_grouped(&SupplierView { groups: &groups });
        assert!(html.contains("<h2>Acme</h2>"));
        assert!(html.contains("<h2>Globex</h2>"));
        assert!(html.contains("Gadget"));
    }

    #[test]
    fn admin_form_shows_error_banner_when_present() {
        let without = render_admin_form(&AdminFormView { error: None });
        assert!(!without.contains("class=\"error\""));

        let with = render_admin_form(&AdminFormView {
            error: Some("missing required field: name"),
        });
        assert!(with.contains("class=\"error\""));
        assert!(with.contains("missing required field: name"));
    }

    #[test]
    fn admin_form_has_every_intake_field() {
        let html = render_admin_form(&AdminFormView { error: None });
        for field in [
            "name",
            "description",
            "price",
            "image_url",
            "category",
            "stock",
            "supplier_url",
            "supplier_name",
        ] {
            assert!(
                html.contains(&format!("name=\"{field}\"")),
                "form is missing field {field}"
            );
        }
    }
}
