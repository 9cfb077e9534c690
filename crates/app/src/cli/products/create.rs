use boutique_app::{context::AppContext, screens::ProductRegistrationScreen};
use clap::Args;

use crate::cli::products::ProductFields;

#[derive(Debug, Args)]
pub(crate) struct CreateArgs {
    #[command(flatten)]
    fields: ProductFields,
}

pub(crate) async fn run(context: &AppContext, args: CreateArgs) -> Result<(), String> {
    let mut screen = ProductRegistrationScreen::new(context.products.clone());
    screen.form = args.fields.into();

    let name = screen.form.name.clone();

    screen
        .submit()
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("created product: {name}");

    Ok(())
}
