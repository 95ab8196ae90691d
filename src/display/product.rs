//! Product display formatting
//!
//! Formats products and stock reports for terminal output.

use crate::models::{Product, ProductFilter};

/// Format one product with its availability
pub fn format_product_line(product: &Product) -> String {
    format!("{} - {}", product, product.availability_label())
}

/// Format the result of a category filter
pub fn format_filter_report(filter: ProductFilter, products: &[&Product]) -> String {
    let mut output = format!("Filter: {}, Count: {}\n", filter, products.len());

    if products.is_empty() {
        output.push_str(&format!(
            "No products found for the specified filter: {}\n",
            filter
        ));
    } else {
        for product in products {
            output.push_str(&format_product_line(product));
            output.push('\n');
        }
    }

    output
}

/// Format the list of unavailable products shown after adding items
pub fn format_unavailable(products: &[&Product]) -> String {
    let mut output = String::from("Items not available:\n");
    for product in products {
        output.push_str(&format!("{}\n", product));
    }
    output
}

/// Format the names of every product on the list
pub fn format_name_list(products: &[Product]) -> String {
    let mut output = String::from("The current stock is: \n");
    for product in products {
        output.push_str(&product.name);
        output.push('\n');
    }
    output
}
