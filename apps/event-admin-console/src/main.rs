//! Event Admin Console
//!
//! Command-line front end for the event admin API: browse and filter the
//! board, add events with a package, complete or delete them, and print a
//! paginated report.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use core_config::tracing::{init_cli_tracing, install_color_eyre};
use domain_events::{Event, UpdateEvent};
use domain_packages::{Category, Package};
use eyre::{Result, WrapErr, eyre};
use tracing::info;
use uuid::Uuid;

use event_admin_console::client::DEFAULT_API_URL;
use event_admin_console::{
    BoardFilter, EventAdminClient, EventApi, EventBoard, EventForm, ReportOptions, render_report,
};

#[derive(Parser)]
#[command(name = "event-admin")]
#[command(about = "Manage events and packages through the event admin API")]
struct Cli {
    /// Base URL of the event admin API
    #[arg(long, global = true, env = "EVENT_ADMIN_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events, optionally filtered
    List {
        /// Case-insensitive title search
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only show this category (Weddings, Engagement, Birthdays, Home Decor)
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,
    },

    /// Show one event
    Show { id: Uuid },

    /// Add a new event
    Add {
        #[arg(long)]
        title: String,

        /// YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// HH:MM or HH:MM:SS
        #[arg(long)]
        time: String,

        #[arg(long)]
        location: String,

        #[arg(long)]
        description: String,

        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,

        /// Package id or name from the chosen category
        #[arg(short, long, requires = "category")]
        package: Option<String>,
    },

    /// Change fields of an event. An empty --category or --package clears it.
    Update {
        id: Uuid,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Package id
        #[arg(long)]
        package: Option<String>,
    },

    /// Mark an event as completed
    Complete { id: Uuid },

    /// Delete an event
    Delete {
        id: Uuid,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print a paginated report of the (filtered) events
    Report {
        #[arg(short, long, default_value = "")]
        search: String,

        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, default_value_t = ReportOptions::default().rows_per_page)]
        rows_per_page: usize,
    },

    /// List packages
    Packages {
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,
    },
}

fn parse_category(raw: &str) -> std::result::Result<Category, String> {
    Category::parse_label(raw).ok_or_else(|| {
        let labels: Vec<String> = Category::all().iter().map(|c| c.to_string()).collect();
        format!("expected one of: {}", labels.join(", "))
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();
    init_cli_tracing();

    let cli = Cli::parse();
    let client = EventAdminClient::new(&cli.api_url)?;
    info!(api_url = %client.base_url(), "Using event admin API");

    match cli.command {
        Commands::List { search, category } => {
            let mut board = EventBoard::new();
            load_board(&mut board, &client).await?;
            board.filter = BoardFilter::new(search, category);

            let visible = board.visible();
            if visible.is_empty() {
                println!("No events found.");
            }
            for event in visible {
                print_row(event);
            }
        }

        Commands::Show { id } => {
            let event = client.get_event(id).await?;
            print_event(&event);
        }

        Commands::Add {
            title,
            date,
            time,
            location,
            description,
            category,
            package,
        } => {
            let mut form = EventForm::new();
            form.fields.title = title;
            form.fields.date = date;
            form.fields.time = time;
            form.fields.location = location;
            form.fields.description = description;

            if let Some(category) = category {
                form.load_packages(&client, category)
                    .await
                    .wrap_err("Error fetching packages")?;
            }
            if let Some(package) = package {
                form.select_package(&package)?;
            }

            let event = form.submit(&client).await.wrap_err("Error adding event")?;
            println!("Event added successfully");
            print_event(&event);
        }

        Commands::Update {
            id,
            title,
            date,
            time,
            location,
            description,
            category,
            package,
        } => {
            let input = UpdateEvent {
                title,
                date,
                time,
                location,
                description,
                category,
                package_id: package,
            };
            let event = client
                .update_event(id, &input)
                .await
                .wrap_err("Error updating event")?;
            print_event(&event);
        }

        Commands::Complete { id } => {
            let mut board = EventBoard::new();
            let status = match board.complete(&client, id).await {
                Ok(event) => event.status,
                Err(e) => return Err(eyre!("{}: {e}", board_error(&board))),
            };
            println!("Event marked as {status}");
        }

        Commands::Delete { id, yes } => {
            if !yes && !confirm("Are you sure you want to delete this event?")? {
                println!("Cancelled.");
                return Ok(());
            }
            let mut board = EventBoard::new();
            board
                .delete(&client, id)
                .await
                .map_err(|e| eyre!("{}: {e}", board_error(&board)))?;
            println!("Event deleted");
        }

        Commands::Report {
            search,
            category,
            output,
            rows_per_page,
        } => {
            let mut board = EventBoard::new();
            load_board(&mut board, &client).await?;
            board.filter = BoardFilter::new(search, category);

            let report = render_report(&board.visible(), &ReportOptions { rows_per_page });
            match output {
                Some(path) => {
                    std::fs::write(&path, report)
                        .wrap_err_with(|| format!("Writing report to {}", path.display()))?;
                    println!("Report written to {}", path.display());
                }
                None => print!("{report}"),
            }
        }

        Commands::Packages { category } => {
            let packages = client.list_packages(category).await?;
            if packages.is_empty() {
                println!("No packages found.");
            }
            for package in &packages {
                print_package(package);
            }
        }
    }

    Ok(())
}

async fn load_board(board: &mut EventBoard, api: &dyn EventApi) -> Result<()> {
    board
        .load(api)
        .await
        .map_err(|e| eyre!("{}: {e}", board_error(board)))
}

fn board_error(board: &EventBoard) -> &str {
    board.error().unwrap_or("Request failed")
}

fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn print_row(event: &Event) {
    println!(
        "{}  {:<13}  {} {}  {}  [{}]",
        event.id,
        event.status.to_string(),
        event.date,
        event.time.format("%H:%M"),
        event.title,
        event
            .category
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string()),
    );
}

fn print_event(event: &Event) {
    println!("Id:          {}", event.id);
    println!("Title:       {}", event.title);
    println!("Date:        {}", event.date);
    println!("Time:        {}", event.time.format("%H:%M"));
    println!("Location:    {}", event.location);
    println!("Description: {}", event.description);
    if let Some(category) = event.category {
        println!("Category:    {category}");
    }
    if let Some(package_id) = event.package_id {
        println!("Package:     {package_id}");
    }
    println!("Status:      {}", event.status);
}

fn print_package(package: &Package) {
    let price = package
        .price
        .map(|p| format!("{p:.2}"))
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{}  {:<10}  {:>10}  {}",
        package.id, package.category.to_string(), price, package.name
    );
}
