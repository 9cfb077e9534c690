mod count;
mod create;
mod delete;
mod list;
mod update;

use boutique_app::{context::AppContext, screens::ProductForm};
use clap::{Args, Subcommand};

use create::CreateArgs;
use delete::DeleteArgs;
use list::ListArgs;
use update::UpdateArgs;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List products, newest first
    List(ListArgs),

    /// Print the number of products
    Count,

    /// Register a new product
    Create(CreateArgs),

    /// Overwrite an existing product
    Update(UpdateArgs),

    /// Delete a product
    Delete(DeleteArgs),
}

pub(crate) async fn run(context: &AppContext, command: ProductsCommand) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::List(args) => list::run(context, args).await,
        ProductsSubcommand::Count => count::run(context).await,
        ProductsSubcommand::Create(args) => create::run(context, args).await,
        ProductsSubcommand::Update(args) => update::run(context, args).await,
        ProductsSubcommand::Delete(args) => delete::run(context, args).await,
    }
}

/// Product fields shared by `create` and `update`.
#[derive(Debug, Args)]
pub(crate) struct ProductFields {
    /// Product name
    #[arg(long)]
    name: String,

    /// Product description
    #[arg(long, default_value = "")]
    description: String,

    /// Price, e.g. `49.90` or `49,90`
    #[arg(long)]
    price: String,

    /// Units in stock
    #[arg(long, default_value = "0")]
    stock: String,

    /// Category name
    #[arg(long, default_value = "Camisetas")]
    category: String,

    /// Image URL
    #[arg(long, default_value = "")]
    image_url: String,
}

impl From<ProductFields> for ProductForm {
    fn from(fields: ProductFields) -> Self {
        Self {
            name: fields.name,
            description: fields.description,
            price: fields.price,
            stock_quantity: fields.stock,
            category: fields.category,
            image_url: fields.image_url,
        }
    }
}
