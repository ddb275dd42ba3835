//! Menu loop and per-option handlers.
//!
//! Handlers collect input through [`Prompter`], call one API method and
//! print its `CmdResult`. The product collection lives in [`run_menu`] and
//! is lent to the API for each workflow.

use super::print::{
    print_category_counts, print_error, print_log_lines, print_menu, print_messages,
    print_products,
};
use super::prompt::{is_eof, Prompter};
use super::setup::{init_tracing, Cli};
use clap::Parser;
use dress::api::{confirms, CmdMessage, InventoryApi, CONFIRM_TOKEN};
use dress::audit::AuditLog;
use dress::config::InventoryConfig;
use dress::error::{DressError, Result};
use dress::init::{initialize, resolve_root};
use dress::model::{format_price, parse_price, parse_quantity, NewProduct, Product, ProductUpdate};
use dress::store::DataStore;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

const INVALID_PRICE: &str = "Invalid price. Try again.";
const INVALID_QUANTITY: &str = "Invalid quantity. Try again.";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let root = resolve_root(&cwd);
    let mut ctx = initialize(&root, cli.data_dir);

    let interactive = io::stdin().is_terminal();
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    run_menu(&mut ctx.api, &ctx.config, &mut prompter, interactive)
}

fn run_menu<S, A, R, W>(
    api: &mut InventoryApi<S, A>,
    config: &InventoryConfig,
    prompter: &mut Prompter<R, W>,
    interactive: bool,
) -> Result<()>
where
    S: DataStore,
    A: AuditLog,
    R: BufRead,
    W: Write,
{
    if let Err(e) = api.ensure_storage() {
        print_error(&e);
    }
    let mut products = api.load_products().unwrap_or_else(|e| {
        print_error(&e);
        Vec::new()
    });

    loop {
        print_menu();
        let choice = match prompter.ask("Choose an option: ") {
            Ok(choice) => choice,
            Err(e) if is_eof(&e) => {
                println!();
                return Ok(());
            }
            Err(e) => return Err(DressError::Io(e)),
        };

        let outcome = match choice.as_str() {
            "1" => handle_create(api, &mut products, prompter),
            "2" => handle_list(api, &products, prompter),
            "3" => handle_edit(api, &mut products, prompter),
            "4" => handle_delete(api, &mut products, prompter),
            "5" => handle_stats(api, &products),
            "6" => handle_log(api, config, prompter),
            "0" => return handle_exit(api),
            _ => {
                print_messages(&[CmdMessage::warning("Invalid option. Try again.")]);
                Ok(())
            }
        };

        match outcome {
            Ok(()) => {}
            Err(DressError::Io(e)) if is_eof(&e) => {
                println!("\nInput closed. Exiting...");
                return Ok(());
            }
            Err(e) => print_error(&e),
        }

        if interactive {
            // Only a pause; whatever is typed is discarded
            let _ = prompter.ask("\nPress Enter to continue...");
        }
    }
}

fn handle_create<S: DataStore, A: AuditLog, R: BufRead, W: Write>(
    api: &mut InventoryApi<S, A>,
    products: &mut Vec<Product>,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    println!("\n--- New Product ---");
    let name = prompter.ask("Name: ")?;
    if name.is_empty() {
        print_messages(&[CmdMessage::warning(
            "Name cannot be empty. Product not created.",
        )]);
        return Ok(());
    }

    let category = prompter.ask("Category (e.g. T-shirt, Pants, Accessory): ")?;
    let size = prompter.ask("Size (e.g. S, M, L, 38): ")?;
    let price = prompter.ask_parsed("Price (e.g. 59.90): ", parse_price, INVALID_PRICE)?;
    let quantity = prompter.ask_parsed("Quantity in stock: ", parse_quantity, INVALID_QUANTITY)?;
    let description = prompter.ask("Description (optional): ")?;

    let new_product = NewProduct {
        name,
        category,
        size,
        price,
        quantity,
        description,
    };
    let result = api.create_product(products, new_product)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list<S: DataStore, A: AuditLog, R: BufRead, W: Write>(
    api: &InventoryApi<S, A>,
    products: &[Product],
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let mode = prompter.ask("Show (1) Detailed or (2) Summary? [1/2]: ")?;
    let result = api.list_products(products)?;
    print_products(&result.listed_products, mode != "2");
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit<S: DataStore, A: AuditLog, R: BufRead, W: Write>(
    api: &mut InventoryApi<S, A>,
    products: &mut Vec<Product>,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let id = prompter.ask("Product ID to edit: ")?;
    let current = api
        .find_product(products, &id)
        .cloned()
        .ok_or_else(|| DressError::ProductNotFound(id.clone()))?;

    println!("Editing product ID {} - {}", current.id, current.name);
    let name = prompter.ask(&format!("Name [{}]: ", current.name))?;
    let category = prompter.ask(&format!("Category [{}]: ", current.category))?;
    let size = prompter.ask(&format!("Size [{}]: ", current.size))?;
    let price = prompter.ask_parsed_or_keep(
        &format!("Price [{}]: ", format_price(current.price)),
        parse_price,
        INVALID_PRICE,
    )?;
    let quantity = prompter.ask_parsed_or_keep(
        &format!("Quantity [{}]: ", current.quantity),
        parse_quantity,
        INVALID_QUANTITY,
    )?;
    let description = prompter.ask(&format!("Description [{}]: ", current.description))?;

    let update = ProductUpdate {
        name: Some(name),
        category: Some(category),
        size: Some(size),
        price,
        quantity,
        description: Some(description),
    };
    let result = api.update_product(products, &id, &update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete<S: DataStore, A: AuditLog, R: BufRead, W: Write>(
    api: &mut InventoryApi<S, A>,
    products: &mut Vec<Product>,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let id = prompter.ask("Product ID to delete: ")?;
    let name = api
        .find_product(products, &id)
        .map(|p| p.name.clone())
        .ok_or_else(|| DressError::ProductNotFound(id.clone()))?;

    let answer = prompter.ask(&format!(
        "Confirm deletion of '{}' (ID {})? [{}/N]: ",
        name, id, CONFIRM_TOKEN
    ))?;
    let result = api.delete_product(products, &id, confirms(&answer))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats<S: DataStore, A: AuditLog>(
    api: &InventoryApi<S, A>,
    products: &[Product],
) -> Result<()> {
    let result = api.category_stats(products)?;
    println!();
    print_messages(&result.messages);
    print_category_counts(&result.category_counts);
    Ok(())
}

fn handle_log<S: DataStore, A: AuditLog, R: BufRead, W: Write>(
    api: &InventoryApi<S, A>,
    config: &InventoryConfig,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let answer = prompter.ask(&format!(
        "How many of the last log lines to show? [{}]: ",
        config.log_tail_lines
    ))?;
    let lines = answer.parse().unwrap_or(config.log_tail_lines);

    let result = api.view_log(lines)?;
    print_log_lines(&result.log_lines);
    print_messages(&result.messages);
    Ok(())
}

fn handle_exit<S: DataStore, A: AuditLog>(api: &InventoryApi<S, A>) -> Result<()> {
    let result = api.exit()?;
    print_messages(&result.messages);
    Ok(())
}
