use boutique::{pricing::format_price, products::ProductId};
use boutique_app::{context::AppContext, screens::EditProductScreen};
use clap::Args;

use crate::cli::products::ProductFields;

#[derive(Debug, Args)]
pub(crate) struct UpdateArgs {
    /// Product id
    id: ProductId,

    #[command(flatten)]
    fields: ProductFields,
}

pub(crate) async fn run(context: &AppContext, args: UpdateArgs) -> Result<(), String> {
    let mut screen = EditProductScreen::new(context.products.clone());

    screen
        .load()
        .await
        .map_err(|error| format!("failed to load products: {error}"))?;

    if !screen.select(&args.id) {
        return Err(format!("product not found: {}", args.id));
    }

    screen.form = args.fields.into();

    let product = screen
        .update()
        .await
        .map_err(|error| format!("failed to update product: {error}"))?;

    println!("product_id: {}", product.id);
    println!("name: {}", product.name);
    println!("price: {}", format_price(product.price()));
    println!("stock_quantity: {}", product.stock_quantity);

    Ok(())
}
