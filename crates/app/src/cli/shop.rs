//! Interactive shop session over stdin.

use boutique::products::{Product, ProductId};
use boutique_app::{
    context::AppContext,
    screens::{CartScreen, HomeScreen, ProductDetailsScreen},
};
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::tables;

const HELP: &str = "\
commands:
  list                 show products matching the current search
  search [text]        search by name, description or category (blank clears)
  category <name>      search a category: Camisetas, Calças, Tênis, Acessórios
  show <n|id>          product details
  add <n|id>           add a product to the cart
  inc <id>             one more of a cart line
  dec <id>             one fewer of a cart line
  qty <id> <n>         set a cart line's quantity (0 or less removes it)
  remove <id>          remove a cart line
  cart                 show the cart
  help                 show this help
  logout               empty the cart and leave the shop
  quit                 leave the shop";

#[derive(Debug, Args)]
pub(crate) struct ShopArgs {
    /// Initial search text
    #[arg(long)]
    search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShopCommand {
    List,
    Search(String),
    Category(String),
    Show(String),
    Add(String),
    Increment(ProductId),
    Decrement(ProductId),
    Quantity(ProductId, i64),
    Remove(ProductId),
    Cart,
    Help,
    Logout,
    Quit,
}

pub(crate) async fn run(context: &AppContext, args: ShopArgs) -> Result<(), String> {
    let mut home = HomeScreen::new(context.products.clone(), context.cart.clone());
    let cart = CartScreen::new(context.cart.clone());

    home.load()
        .await
        .map_err(|error| format!("failed to load products: {error}"))?;

    if let Some(search) = args.search {
        home.set_search(search);
    }

    println!("{HELP}");
    print_products(&home);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|error| format!("failed to read input: {error}"))?
    {
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(error) => {
                println!("{error}");
                continue;
            }
        };

        match command {
            ShopCommand::Quit => break,
            ShopCommand::Logout => {
                context.logout();
                println!("logged out, cart emptied");
                return Ok(());
            }
            _ => {}
        }

        execute(context, &mut home, &cart, command);
    }

    if !cart.is_empty() {
        println!("{}", tables::cart(&cart.lines(), &cart.total_label()));
    }

    Ok(())
}

fn execute(context: &AppContext, home: &mut HomeScreen, cart: &CartScreen, command: ShopCommand) {
    match command {
        ShopCommand::List => print_products(home),
        ShopCommand::Search(text) => {
            home.set_search(text);
            print_products(home);
        }
        ShopCommand::Category(name) => {
            if home.press_category(&name).is_some() {
                print_products(home);
            } else {
                let names: Vec<&str> = home.categories().iter().map(|category| category.name).collect();
                println!("unknown category, pick one of: {}", names.join(", "));
            }
        }
        ShopCommand::Show(target) => match resolve(home, &target) {
            Some(product) => {
                let details = ProductDetailsScreen::new(product, context.cart.clone());
                print_details(&details);
            }
            None => println!("no product matches {target:?}"),
        },
        ShopCommand::Add(target) => match resolve(home, &target) {
            Some(product) => {
                let details = ProductDetailsScreen::new(product, context.cart.clone());
                let state = details.add_to_cart();
                println!("added {} ({} items in cart)", details.product().name, state.item_count());
            }
            None => println!("no product matches {target:?}"),
        },
        ShopCommand::Increment(id) => {
            cart.increment(&id);
            print_cart(cart);
        }
        ShopCommand::Decrement(id) => {
            cart.decrement(&id);
            print_cart(cart);
        }
        ShopCommand::Quantity(id, quantity) => {
            cart.set_quantity(&id, quantity);
            print_cart(cart);
        }
        ShopCommand::Remove(id) => {
            cart.remove(&id);
            print_cart(cart);
        }
        ShopCommand::Cart => print_cart(cart),
        ShopCommand::Help => println!("{HELP}"),
        ShopCommand::Logout | ShopCommand::Quit => {}
    }
}

fn parse_command(line: &str) -> Result<ShopCommand, String> {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let required = |what: &str| {
        if rest.is_empty() {
            Err(format!("{verb}: missing {what}"))
        } else {
            Ok(rest.to_string())
        }
    };

    let command = match verb.to_lowercase().as_str() {
        "list" | "ls" => ShopCommand::List,
        "search" => ShopCommand::Search(rest.to_string()),
        "category" => ShopCommand::Category(required("category name")?),
        "show" => ShopCommand::Show(required("product")?),
        "add" => ShopCommand::Add(required("product")?),
        "inc" => ShopCommand::Increment(required("product id")?.into()),
        "dec" => ShopCommand::Decrement(required("product id")?.into()),
        "remove" | "rm" => ShopCommand::Remove(required("product id")?.into()),
        "qty" => {
            let (id, quantity) = rest
                .rsplit_once(char::is_whitespace)
                .ok_or_else(|| "qty: expected <id> <quantity>".to_string())?;

            let quantity = quantity
                .parse::<i64>()
                .map_err(|error| format!("qty: invalid quantity {quantity:?}: {error}"))?;

            ShopCommand::Quantity(id.trim().into(), quantity)
        }
        "cart" => ShopCommand::Cart,
        "help" | "?" => ShopCommand::Help,
        "logout" => ShopCommand::Logout,
        "quit" | "exit" | "q" => ShopCommand::Quit,
        other => return Err(format!("unknown command {other:?}, try `help`")),
    };

    Ok(command)
}

/// A product by its position in the visible list (1-based) or by id.
fn resolve(home: &HomeScreen, target: &str) -> Option<Product<'static>> {
    if let Ok(position) = target.parse::<usize>()
        && let Some(product) = position
            .checked_sub(1)
            .and_then(|index| home.visible_products().get(index).copied())
    {
        return Some(product.clone());
    }

    home.product(&ProductId::from(target)).cloned()
}

fn print_products(home: &HomeScreen) {
    let products = home.visible_products();

    if products.is_empty() {
        println!("no products found");
    } else {
        println!("{}", tables::products(&products));
    }

    println!("cart: {} items", home.cart_badge());
}

fn print_details(details: &ProductDetailsScreen) {
    let product = details.product();

    println!("{}", product.name);
    println!("  id: {}", product.id);
    println!("  price: {}", details.price_label());
    println!("  category: {}", product.category);
    println!("  stock: {}", product.stock_quantity);

    if !product.description.is_empty() {
        println!("  {}", product.description);
    }
}

fn print_cart(cart: &CartScreen) {
    if cart.is_empty() {
        println!("your cart is empty");
    } else {
        println!("{}", tables::cart(&cart.lines(), &cart.total_label()));
    }
}
