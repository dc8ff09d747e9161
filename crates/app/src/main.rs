mod cli;

use std::fmt;
use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use mastery_core::model::{Category, TopicId};
use services::{AppServices, ProgressService, TopicService};
use ui::{App, UiApp, build_app_context};

use crate::cli::{Cli, Command};

const DEFAULT_LOG_FILTER: &str = "info,services=debug";

#[derive(Debug)]
enum ArgsError {
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn topics(&self) -> Arc<TopicService> {
        self.services.topics()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }
}

fn setup_tracing(filter: Option<&str>) {
    use tracing_subscriber::EnvFilter;

    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_tracing(cli.log.as_deref());

    if cli.db.trim().is_empty() {
        return Err(ArgsError::InvalidDbUrl { raw: cli.db }.into());
    }
    let db_url = normalize_sqlite_url(cli.db);

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&db_url)?;
    let services = AppServices::new_sqlite(&db_url).await?;
    tracing::info!(%db_url, "progress store ready");

    services.progress().subscribe(|snapshot| {
        tracing::debug!(
            completed = snapshot.stats.completed,
            percentage = snapshot.stats.percentage,
            "progress changed"
        );
    });

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => launch_desktop(services),
        Command::Status { json } => print_status(&services, json).await?,
        Command::Toggle { id } => toggle_topic(&services, &id).await,
        Command::Reset => {
            services.progress().reset().await;
            println!("All progress cleared.");
        }
        Command::Topics { route, category } => {
            print_topics(&services, route.as_deref(), category).await;
        }
    }
    Ok(())
}

fn launch_desktop(services: AppServices) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("React Master")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

async fn print_status(services: &AppServices, json: bool) -> Result<(), serde_json::Error> {
    let snapshot = services.progress().snapshot().await;
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let stats = &snapshot.stats;
    println!(
        "{} of {} topics completed ({}%)",
        stats.completed, stats.total, stats.percentage
    );
    for (category, tally) in stats.by_category.iter() {
        println!("  {:<13}{}/{}", category.label(), tally.completed, tally.total);
    }
    if let Some(milestone) = snapshot.milestone() {
        println!("Milestone: {milestone:?}");
    }
    Ok(())
}

async fn toggle_topic(services: &AppServices, id: &TopicId) {
    let topics = services.topics();
    if topics.topic(id.as_str()).is_none() {
        tracing::warn!(topic = %id, "topic is not in the catalog; toggling anyway");
    }
    let state = services.progress().toggle(id).await;
    let verb = if state.is_completed(id.as_str()) {
        "completed"
    } else {
        "not completed"
    };
    println!("{id}: {verb}");
}

async fn print_topics(
    services: &AppServices,
    route: Option<&str>,
    category: Option<Category>,
) {
    let topics = services.topics();
    let snapshot = services.progress().snapshot().await;
    let listed = match (route, category) {
        (Some(route), _) => topics.topics_for_route(route),
        (None, Some(category)) => topics.catalog().in_category(category).collect(),
        (None, None) => topics.catalog().topics().iter().collect(),
    };
    if listed.is_empty() {
        println!("No topics.");
        return;
    }
    for topic in listed {
        let mark = if snapshot.is_completed(topic.id().as_str()) {
            "x"
        } else {
            " "
        };
        println!(
            "[{mark}] {:<28} {} ({})",
            topic.id().as_str(),
            topic.title(),
            topic.category()
        );
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
