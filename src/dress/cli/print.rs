use colored::Colorize;
use dress::api::{CategoryCount, CmdMessage, MessageLevel};
use dress::error::DressError;
use dress::model::{format_price, Product};
use unicode_width::UnicodeWidthStr;

const RULE_WIDTH: usize = 50;
const STORE_NAME: &str = "Dress Clothing Store";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_error(err: &DressError) {
    println!("{}", format!("Error: {}", err).red());
}

pub(super) fn print_menu() {
    println!("{}", "=".repeat(RULE_WIDTH));
    let title = format!("{:^width$}", STORE_NAME, width = RULE_WIDTH);
    println!("{}", title.bold());
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("1) Add product");
    println!("2) List products");
    println!("3) Edit product");
    println!("4) Delete product");
    println!("5) Record count / count by category");
    println!("6) View log (last lines)");
    println!("0) Exit");
    println!("{}", "-".repeat(RULE_WIDTH));
}

pub(super) fn print_products(products: &[Product], detailed: bool) {
    println!(
        "\n--- Product List ({} records) ---",
        products.len().to_string().bold()
    );

    if detailed {
        for p in products {
            println!(
                "ID {} | Name: {} | Cat: {} | Size: {} | Price: R$ {} | Qty: {}",
                p.id.yellow(),
                p.name.bold(),
                p.category,
                p.size,
                format_price(p.price),
                p.quantity
            );
            if !p.description.is_empty() {
                println!("    Description: {}", p.description.dimmed());
            }
        }
        return;
    }

    let id_width = products.iter().map(|p| p.id.width()).max().unwrap_or(0);
    let name_width = products.iter().map(|p| p.name.width()).max().unwrap_or(0);
    for p in products {
        println!(
            "ID {} - {} - R$ {:>10} - Qty: {}",
            pad_to_width(&p.id, id_width).yellow(),
            pad_to_width(&p.name, name_width),
            format_price(p.price),
            p.quantity
        );
    }
}

pub(super) fn print_category_counts(counts: &[CategoryCount]) {
    println!("Count by category:");
    for entry in counts {
        println!("  {}: {}", entry.category, entry.count);
    }
}

pub(super) fn print_log_lines(lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    println!("\n--- Last log entries ---");
    for line in lines {
        println!("{}", line);
    }
}

/// `format!` pads by `char` count, which misaligns wide glyphs.
fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
