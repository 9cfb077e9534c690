//! Catalog search

use crate::products::Product;

/// A storefront category shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Category name, also used as the search text when the category is picked
    pub name: &'static str,

    /// Icon name
    pub icon: &'static str,
}

/// Categories offered on the home screen.
pub const CATEGORIES: [Category; 4] = [
    Category {
        name: "Camisetas",
        icon: "tshirt",
    },
    Category {
        name: "Calças",
        icon: "male",
    },
    Category {
        name: "Tênis",
        icon: "shoe-prints",
    },
    Category {
        name: "Acessórios",
        icon: "clock",
    },
];

/// Look up a category by name, ignoring case.
pub fn category(name: &str) -> Option<&'static Category> {
    let name = name.trim().to_lowercase();

    CATEGORIES
        .iter()
        .find(|category| category.name.to_lowercase() == name)
}

/// Check whether a product matches a search query.
///
/// Matches when the lowercased query is a substring of the product's name, description or
/// category. A blank query matches everything.
pub fn matches(product: &Product<'_>, query: &str) -> bool {
    let query = query.trim();

    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();

    [&product.name, &product.description, &product.category]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Products matching a search query, in their original order.
pub fn filter_products<'p, 'a>(products: &'p [Product<'a>], query: &str) -> Vec<&'p Product<'a>> {
    products
        .iter()
        .filter(|product| matches(product, query))
        .collect()
}
