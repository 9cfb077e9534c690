use boutique::products::ProductId;
use boutique_app::{context::AppContext, screens::EditProductScreen};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct DeleteArgs {
    /// Product id
    id: ProductId,
}

pub(crate) async fn run(context: &AppContext, args: DeleteArgs) -> Result<(), String> {
    let mut screen = EditProductScreen::new(context.products.clone());

    screen
        .load()
        .await
        .map_err(|error| format!("failed to load products: {error}"))?;

    if !screen.select(&args.id) {
        return Err(format!("product not found: {}", args.id));
    }

    screen
        .delete()
        .await
        .map_err(|error| format!("failed to delete product: {error}"))?;

    println!("deleted product: {}", args.id);

    Ok(())
}
