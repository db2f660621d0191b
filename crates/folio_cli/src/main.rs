//! Command-line front-end for the folio core.
//!
//! # Responsibility
//! - Resolve config, open the store, and run one core operation.
//! - Print results as pretty JSON on stdout; errors go to stderr.

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use folio_core::db::open_db_with_options;
use folio_core::{
    init_logging_from_config, AppConfig, ContactService, ContentService, SiteConfig,
    SqliteContactRepository, SqliteContentRepository,
};
use log::debug;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Portfolio content queries and contact intake")]
struct Cli {
    /// SQLite database file (overrides FOLIO_DB_PATH).
    #[arg(long = "db", global = true)]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List projects, newest first.
    Projects(ProjectsArgs),
    /// Show one project by id.
    Project {
        id: String,
    },
    /// List skills, highest level first.
    Skills {
        /// Exact category to keep.
        #[arg(long)]
        category: Option<String>,
    },
    /// List work experience, ongoing first.
    Experiences,
    /// Record a contact form message.
    Contact(ContactArgs),
    /// Print static site metadata.
    Site,
}

#[derive(Debug, Args)]
struct ProjectsArgs {
    /// Keep only featured (`true`) or non-featured (`false`) projects.
    #[arg(long)]
    featured: Option<bool>,

    /// Maximum number of projects to print.
    #[arg(long, allow_hyphen_values = true)]
    limit: Option<i64>,
}

#[derive(Debug, Args)]
struct ContactArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SiteView<'a> {
    #[serde(flatten)]
    site: &'a SiteConfig,
    og_image_url: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::from_env()?;
    if let Some(db_path) = cli.db_path {
        config.db_path = db_path;
    }
    init_logging_from_config(&config).context("failed to initialize logging")?;

    let open_store = || {
        debug!(
            "event=cli_open_db module=cli status=start path={}",
            config.db_path.display()
        );
        open_db_with_options(&config.db_path, &config.db_options())
            .with_context(|| format!("failed to open `{}`", config.db_path.display()))
    };

    match cli.command {
        Command::Site => {
            let site = config.site();
            print_json(&SiteView {
                og_image_url: site.absolute_url(&site.og_image),
                site: &site,
            })
        }
        Command::Projects(args) => {
            let conn = open_store()?;
            let service = ContentService::new(SqliteContentRepository::try_new(&conn)?);
            print_json(&service.list_projects(args.featured, args.limit)?)
        }
        Command::Project { id } => {
            let conn = open_store()?;
            let service = ContentService::new(SqliteContentRepository::try_new(&conn)?);
            match service.get_project(&id)? {
                Some(project) => print_json(&project),
                None => bail!("project not found: {id}"),
            }
        }
        Command::Skills { category } => {
            let conn = open_store()?;
            let service = ContentService::new(SqliteContentRepository::try_new(&conn)?);
            print_json(&service.list_skills(category.as_deref())?)
        }
        Command::Experiences => {
            let conn = open_store()?;
            let service = ContentService::new(SqliteContentRepository::try_new(&conn)?);
            print_json(&service.list_experiences()?)
        }
        Command::Contact(args) => {
            let conn = open_store()?;
            let service = ContactService::new(SqliteContactRepository::try_new(&conn)?);
            print_json(&service.submit_contact(args.name, args.email, args.message)?)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
