//! Bookstore terminal client

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bookstore_server::{
    client::{
        pages::{self, BookEdit, View},
        BooksClient, DEFAULT_BASE_URL,
    },
    models::book::BookPayload,
};

#[derive(Parser, Debug)]
#[command(name = "bookstore", version, about = "Browse and manage books on a Bookstore server")]
struct Cli {
    /// Base URL of the Bookstore API
    #[arg(long, env = "BOOKSTORE_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every book (default)
    List {
        #[arg(long, value_enum, default_value_t = View::Table)]
        view: View,
    },
    /// Show one book
    Show { id: String },
    /// Create a book
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        publish_year: i32,
    },
    /// Edit a book; omitted fields keep their current value
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        publish_year: Option<i32>,
    },
    /// Delete a book
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let client = BooksClient::new(cli.base_url);

    let result = match cli.command.unwrap_or(Command::List { view: View::Table }) {
        Command::List { view } => pages::home(&client, view).await,
        Command::Show { id } => pages::show(&client, &id).await,
        Command::Create {
            title,
            author,
            publish_year,
        } => pages::create(&client, BookPayload::new(title, author, publish_year)).await,
        Command::Edit {
            id,
            title,
            author,
            publish_year,
        } => {
            let edit = BookEdit {
                title,
                author,
                publish_year,
            };
            pages::edit(&client, &id, edit).await
        }
        Command::Delete { id, yes } => {
            let confirmed = yes || pages::confirm("Are You Sure You want to delete this book?")?;
            pages::delete(&client, &id, confirmed).await
        }
    };

    // Failures were already reported to the user by the page
    Ok(match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    })
}
