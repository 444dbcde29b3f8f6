//! Lectern CLI
//!
//! Command-line front end for the lecturer directory: browse and filter the
//! list, submit reviews, add entries, and send contact messages.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lectern::{
    config::Config,
    error::Result,
    filter::{self, FilterCriteria},
    flows::{add, contact, review},
    render,
    services::{DirectoryClient, DirectoryStore},
    storage::ReviewLedger,
};

/// Lectern - Lecturer Directory Client
#[derive(Parser, Debug)]
#[command(name = "lectern", version, about = "Browse, filter, and review lecturer entries")]
struct Cli {
    /// Path to the data directory holding config.toml and the review ledger
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List lecturers, optionally filtered
    List {
        /// Case-insensitive substring matched against names
        #[arg(short, long, default_value = "")]
        search: String,

        /// Restrict to one faculty ("all" matches every faculty)
        #[arg(short, long)]
        faculty: Option<String>,

        /// Minimum average score
        #[arg(short, long, default_value_t = 0.0)]
        min_rating: f64,
    },

    /// List the distinct faculties present in the directory
    Faculties,

    /// Submit a review for one lecturer
    Review {
        /// Lecturer id
        id: String,

        /// Rating, 0-10
        #[arg(short, long, default_value_t = add::DEFAULT_RATING)]
        rating: u8,

        /// Comment text (required, non-empty)
        #[arg(short, long)]
        comment: String,
    },

    /// Add a new lecturer entry
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        faculty: String,

        /// Image by link; wins over --image-file
        #[arg(long)]
        image_url: Option<String>,

        /// Image by local file, embedded as a data: URL
        #[arg(long)]
        image_file: Option<PathBuf>,

        /// Initial rating, 0-10
        #[arg(long, default_value_t = add::DEFAULT_RATING)]
        rating: u8,

        /// Optional first comment
        #[arg(long)]
        comment: Option<String>,
    },

    /// Send a contact message to the directory maintainers
    Contact {
        #[arg(long)]
        email: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        message: String,
    },

    /// Show the seen-reviews ledger
    Reviewed {
        /// Forget every recorded review
        #[arg(long)]
        clear: bool,
    },

    /// Validate configuration
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.data_dir.join("config.toml");
    let config = Config::load_or_default(&config_path);
    config.validate()?;

    let client = DirectoryClient::new(&config.api)?;
    let ledger_path = cli.data_dir.join(&config.ledger.file_name);
    let mut ledger = ReviewLedger::load(&ledger_path).await?;

    match cli.command {
        Command::List {
            search,
            faculty,
            min_rating,
        } => {
            let lecturers = client.list_lecturers().await?;
            log::info!("Loaded {} lecturers", lecturers.len());

            let criteria = FilterCriteria {
                search,
                faculty: faculty.filter(|f| f != "all"),
                min_rating,
            };
            let filtered = filter::apply_filters(&lecturers, &criteria);
            print!("{}", render::render_cards(&filtered, &ledger));
        }

        Command::Faculties => {
            let lecturers = client.list_lecturers().await?;
            for faculty in filter::faculties(&lecturers) {
                println!("{faculty}");
            }
        }

        Command::Review {
            id,
            rating,
            comment,
        } => {
            let outcome = review::submit_review(&client, &mut ledger, &id, rating, &comment).await?;
            log::info!(
                "Review recorded for {} ({} ratings, average {})",
                outcome.updated.name,
                outcome.updated.rating.len(),
                outcome.updated.avg_score
            );
            print!(
                "{}",
                render::render_card(&outcome.updated, ledger.contains(&id))
            );
        }

        Command::Add {
            name,
            faculty,
            image_url,
            image_file,
            rating,
            comment,
        } => {
            let params = add::NewLecturer {
                name,
                faculty,
                image_url,
                image_file,
                rating,
                comment,
            };
            let created = add::add_lecturer(&client, &params).await?;
            log::info!("Lecturer added with id {}", created.id);
            print!("{}", render::render_card(&created, false));
        }

        Command::Contact {
            email,
            title,
            message,
        } => {
            let form = contact::ContactForm {
                email,
                title,
                message,
            };
            let created = contact::send_message(&client, &form).await?;
            log::info!("Message sent (id {})", created.id);
        }

        Command::Reviewed { clear } => {
            if clear {
                ledger.clear().await?;
                log::info!("Ledger cleared");
            } else if ledger.ids().is_empty() {
                println!("No lecturers reviewed from this profile yet.");
            } else {
                for id in ledger.ids() {
                    println!("{id}");
                }
            }
        }

        Command::Validate => {
            config.validate()?;
            log::info!("✓ Config OK");
            log::info!("  base_url: {}", config.api.base_url);
            log::info!("  timeout: {}s", config.api.timeout_secs);
            log::info!("  ledger: {}", ledger_path.display());
        }
    }

    Ok(())
}
