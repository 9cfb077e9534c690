use boutique_app::{context::AppContext, screens::HomeScreen};
use clap::Args;

use crate::cli::tables;

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    /// Only show products whose name, description or category contains this text
    #[arg(long)]
    search: Option<String>,
}

pub(crate) async fn run(context: &AppContext, args: ListArgs) -> Result<(), String> {
    let mut screen = HomeScreen::new(context.products.clone(), context.cart.clone());

    screen
        .load()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if let Some(search) = args.search {
        screen.set_search(search);
    }

    let products = screen.visible_products();

    if products.is_empty() {
        println!("no products found");

        return Ok(());
    }

    println!("{}", tables::products(&products));

    Ok(())
}
