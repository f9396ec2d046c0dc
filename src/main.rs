use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use product_recommender::{AppConfig, Error, Session};
use tracing::{error, info};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let json_output = args.iter().any(|a| a == "--json");
    let config_path = args.iter().find(|a| !a.starts_with("--"));

    let config = match config_path {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => AppConfig::default(),
    };

    info!("🛍 Starting product recommendation session");
    info!("Catalog source: {}", config.catalog.source);

    // Loader failures are terminal: surface them and stop
    let session = match Session::start(&config) {
        Ok(session) => session,
        Err(e) => {
            error!("❌ Failed to start session: {}", e);
            return Err(e.into());
        }
    };

    println!(
        "Loaded {} products. Type 'help' for commands.",
        session.catalog().len()
    );

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        match command {
            "help" => print_help(),
            "list" => {
                for id in session.catalog().ids() {
                    println!("{}", id);
                }
            }
            "show" => show_product(&session, rest.trim()),
            "recommend" => show_recommendations(&session, rest.trim(), json_output)?,
            "surprise" => surprise(&session),
            "search" => search_products(&session, rest.trim()),
            "rate" => rate_product(&session, rest.trim()),
            "quit" | "exit" => break,
            other => println!("Unknown command: {} (try 'help')", other),
        }
    }

    info!("Session ended");
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  list                      all product ids");
    println!("  show <id>                 cleaned product description");
    println!("  recommend <id>            similar products");
    println!("  surprise                  random product pick");
    println!("  search <keyword>          keyword search over descriptions");
    println!("  rate <id> <1-5> [review]  rate a product (not stored)");
    println!("  quit                      end the session");
}

fn show_product(session: &Session, id: &str) {
    match session.describe(id) {
        Ok(description) => {
            println!("You selected: {}", id);
            println!("Description:\n\n{}", description);
        }
        Err(e) => println!("{}", e),
    }
}

fn show_recommendations(session: &Session, id: &str, json_output: bool) -> Result<()> {
    let related = match session.recommend(id) {
        Ok(related) => related,
        Err(e @ Error::ProductNotFound(_)) => {
            // Recoverable: prompt for another selection
            println!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if related.is_empty() {
        println!("No recommendations found. Try another product!");
        return Ok(());
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&related)?);
        return Ok(());
    }

    println!("You might also like:");
    for product in &related {
        println!("Recommended: {}", product.id);
        println!(
            "{}",
            product_recommender::clean_description(product.description_text())
        );
        println!("---");
    }

    Ok(())
}

fn surprise(session: &Session) {
    match session.sample() {
        Some(product) => {
            println!("Random pick: {}", product.id);
            println!(
                "Description:\n\n{}",
                product_recommender::clean_description(product.description_text())
            );
        }
        None => println!("The catalog is empty."),
    }
}

fn search_products(session: &Session, query: &str) {
    let results = session.search(query);

    if results.is_empty() {
        println!("No matching products found. Try another keyword!");
        return;
    }

    println!("Found {} matching products:", results.len());
    for product in results {
        let preview: String = product.description_text().chars().take(50).collect();
        println!("- {}: {}...", product.id, preview);
    }
}

fn rate_product(session: &Session, rest: &str) {
    let mut parts = rest.splitn(3, ' ');
    let id = parts.next().unwrap_or("");
    let stars = parts.next().and_then(|s| s.parse::<u8>().ok());
    let review = parts.next().unwrap_or("").trim();

    if session.catalog().get(id).is_none() {
        println!("product not found: {}", id);
        return;
    }

    match stars {
        Some(stars @ 1..=5) => {
            println!("Thank you for your feedback!");
            println!("You rated this product {} out of 5!", stars);
            if review.is_empty() {
                println!("You didn't write a review, but we appreciate your rating!");
            } else {
                println!("Your review: {}", review);
            }
        }
        _ => println!("Usage: rate <id> <1-5> [review]"),
    }
}
