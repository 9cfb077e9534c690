//! Terminal tables for products and the cart.

use boutique::{pricing::format_price, products::Product};
use boutique_app::screens::CartLineView;
use tabled::{
    Table,
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

/// Numbered product list; the numbers can stand in for ids in the shop.
pub(crate) fn products(products: &[&Product<'_>]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["#", "Id", "Name", "Category", "Price", "Stock"]);

    for (position, product) in products.iter().enumerate() {
        builder.push_record([
            (position + 1).to_string(),
            product.id.to_string(),
            product.name.clone(),
            product.category.clone(),
            format_price(product.price()),
            product.stock_quantity.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.modify(Columns::new(4..6), Alignment::right());

    finish(table)
}

pub(crate) fn cart(lines: &[CartLineView], total: &str) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Name", "Qty", "Unit Price", "Subtotal"]);

    for line in lines {
        builder.push_record([
            line.id.to_string(),
            line.name.clone(),
            line.quantity.to_string(),
            line.unit_price.clone(),
            line.subtotal.clone(),
        ]);
    }

    builder.push_record([String::new(), "Total".to_string(), String::new(), String::new(), total.to_string()]);

    let mut table = builder.build();
    table.modify(Columns::new(2..5), Alignment::right());
    table.modify(Rows::last(), Color::BOLD);

    finish(table)
}

fn finish(mut table: Table) -> String {
    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    table.to_string()
}
