use boutique_app::{context::AppContext, screens::DashboardScreen};

pub(crate) async fn run(context: &AppContext) -> Result<(), String> {
    let mut screen = DashboardScreen::new(context.products.clone());

    let total = screen
        .load()
        .await
        .map_err(|error| format!("failed to count products: {error}"))?;

    println!("total_products: {total}");

    Ok(())
}
