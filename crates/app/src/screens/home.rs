//! Home screen: catalog, search and category shortcuts.

use std::sync::Arc;

use boutique::{
    catalog::{self, CATEGORIES, Category},
    products::{Product, ProductId},
    store::CartStore,
};
use tracing::error;

use crate::{domain::products::ProductsService, screens::ScreenError};

pub struct HomeScreen {
    products: Arc<dyn ProductsService>,
    cart: Arc<CartStore<'static>>,
    catalog: Vec<Product<'static>>,
    search: String,
}

impl HomeScreen {
    pub fn new(products: Arc<dyn ProductsService>, cart: Arc<CartStore<'static>>) -> Self {
        Self {
            products,
            cart,
            catalog: Vec::new(),
            search: String::new(),
        }
    }

    /// Fetch the catalog, newest first. A failed load keeps the previous catalog.
    ///
    /// # Errors
    ///
    /// Returns the message to show when products cannot be fetched.
    pub async fn load(&mut self) -> Result<usize, ScreenError> {
        let products = self.products.list_products().await.map_err(|err| {
            error!(error = %err, "failed to load products");

            ScreenError::new("Could not load products")
        })?;

        self.catalog = products;

        Ok(self.catalog.len())
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Category shortcuts shown above the catalog.
    pub fn categories(&self) -> &'static [Category] {
        &CATEGORIES
    }

    /// Pressing a category searches for its name. Unknown names leave the search alone.
    pub fn press_category(&mut self, name: &str) -> Option<&'static Category> {
        let category = catalog::category(name)?;

        self.search = category.name.to_string();

        Some(category)
    }

    /// Products matching the current search, newest first.
    pub fn visible_products(&self) -> Vec<&Product<'static>> {
        catalog::filter_products(&self.catalog, &self.search)
    }

    /// Look a loaded product up by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product<'static>> {
        self.catalog.iter().find(|product| &product.id == id)
    }

    /// Number of items in the cart, for the header badge.
    pub fn cart_badge(&self) -> u64 {
        self.cart.snapshot().item_count()
    }
}

impl std::fmt::Debug for HomeScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomeScreen")
            .field("catalog", &self.catalog.len())
            .field("search", &self.search)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use boutique::cart::CartAction;
    use reqwest::StatusCode;
    use rusty_money::{Money, iso::BRL};
    use testresult::TestResult;

    use crate::{
        backend::BackendError,
        domain::products::{MockProductsService, ProductsServiceError},
    };

    use super::*;

    fn product(id: &str, name: &str, category: &str) -> Product<'static> {
        let mut product = Product::new(id, name, Money::from_minor(1000, BRL));
        product.category = category.to_string();

        product
    }

    fn catalog() -> Vec<Product<'static>> {
        vec![
            product("1", "Camiseta Azul", "Camisetas"),
            product("2", "Calça Jeans", "Calças"),
            product("3", "Tênis Corrida", "Tênis"),
        ]
    }

    fn loaded_service() -> MockProductsService {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|| Ok(catalog()));

        products
    }

    #[tokio::test]
    async fn load_then_search_filters_case_insensitively() -> TestResult {
        let mut screen = HomeScreen::new(Arc::new(loaded_service()), Arc::new(CartStore::new(BRL)));

        assert_eq!(screen.load().await?, 3);

        screen.set_search("JEANS");

        let names: Vec<&str> = screen
            .visible_products()
            .iter()
            .map(|product| product.name.as_str())
            .collect();

        assert_eq!(names, ["Calça Jeans"]);

        Ok(())
    }

    #[tokio::test]
    async fn pressing_a_category_searches_for_it() -> TestResult {
        let mut screen = HomeScreen::new(Arc::new(loaded_service()), Arc::new(CartStore::new(BRL)));
        screen.load().await?;

        let pressed = screen.press_category("tênis").map(|category| category.name);

        assert_eq!(pressed, Some("Tênis"));
        assert_eq!(screen.search(), "Tênis");
        assert_eq!(screen.visible_products().len(), 1);
        assert_eq!(screen.press_category("Chapéus"), None);
        assert_eq!(screen.search(), "Tênis");

        Ok(())
    }

    #[tokio::test]
    async fn failed_load_reports_message() {
        let mut products = MockProductsService::new();

        products.expect_list_products().once().return_once(|| {
            Err(ProductsServiceError::Backend(
                BackendError::UnexpectedResponse(StatusCode::BAD_GATEWAY, String::new()),
            ))
        });

        let mut screen = HomeScreen::new(Arc::new(products), Arc::new(CartStore::new(BRL)));

        assert_eq!(
            screen.load().await,
            Err(ScreenError::new("Could not load products"))
        );
        assert!(screen.visible_products().is_empty());
    }

    #[test]
    fn badge_counts_items_in_cart() {
        let cart = Arc::new(CartStore::new(BRL));
        let screen = HomeScreen::new(Arc::new(MockProductsService::new()), Arc::clone(&cart));

        cart.dispatch(CartAction::AddToCart(product("1", "Camiseta", "Camisetas")));
        cart.dispatch(CartAction::AddToCart(product("1", "Camiseta", "Camisetas")));
        cart.dispatch(CartAction::AddToCart(product("2", "Calça", "Calças")));

        assert_eq!(screen.cart_badge(), 3);
        assert_eq!(screen.categories().len(), 4);
    }
}
