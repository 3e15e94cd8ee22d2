//! `admin-console`: render one screen of the admin console to HTML.
//!
//! Loads the settings file, connects to the `/admin` API, drives the
//! controller to the requested screen and prints the resulting page.
//! Logs go to stderr so stdout stays a clean document.

use std::path::PathBuf;
use std::process::ExitCode;

use admin_console_core::types::{PaginationRequest, RecordId, Screen};
use admin_console_gateway::create_gateway;
use admin_console_markup::{AppSettings, Language, Session, Target};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "admin-console",
    version,
    about = "Render a screen of the admin console as HTML",
    long_about = "Render a screen of the admin console as HTML.\n\nExamples:\n  admin-console --screen views --page 2\n  admin-console --view 7 --language fr\n  admin-console --config ./console.toml --content 3 -o content.html"
)]
struct Cli {
    #[arg(
        short = 'c',
        long,
        value_name = "FILE",
        help = "Settings file (default: <config dir>/admin-console/config.toml)."
    )]
    config: Option<PathBuf>,

    #[arg(long, value_name = "URL", help = "Override the gateway base URL.")]
    base_url: Option<String>,

    #[arg(short = 'l', long, value_name = "CODE", help = "Override the UI language (en, fr).")]
    language: Option<String>,

    #[arg(
        short = 's',
        long,
        value_name = "SCREEN",
        default_value = "home",
        help = "Screen to show: home, views, content, assets, users, stats."
    )]
    screen: Screen,

    #[arg(long, value_name = "N", help = "Page of the list screen.")]
    page: Option<u32>,

    #[arg(long, value_name = "N", help = "Items per page of the list screen.")]
    items_per_page: Option<u32>,

    #[arg(long, value_name = "ID", conflicts_with = "content", help = "Open the view editor.")]
    view: Option<RecordId>,

    #[arg(long, value_name = "ID", help = "Open the content editor.")]
    content: Option<RecordId>,

    #[arg(short = 'o', long, value_name = "FILE", help = "Write the page to FILE instead of stdout.")]
    output: Option<PathBuf>,
}

impl Cli {
    fn target(&self, default_items_per_page: u32) -> Target {
        if let Some(id) = self.view {
            return Target::View(id);
        }
        if let Some(id) = self.content {
            return Target::Content(id);
        }
        let pagination = (self.page.is_some() || self.items_per_page.is_some()).then(|| {
            PaginationRequest::new(
                self.page.unwrap_or(1),
                self.items_per_page.unwrap_or(default_items_per_page),
            )
        });
        Target::Screen {
            screen: self.screen,
            pagination,
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut settings = AppSettings::load(cli.config.as_deref())?;
    if let Some(base_url) = &cli.base_url {
        settings.gateway.base_url.clone_from(base_url);
    }
    let language = match &cli.language {
        Some(code) => {
            Language::from_code(code).ok_or_else(|| anyhow!("Unknown language '{code}'"))?
        }
        None => settings.language()?,
    };

    let gateway = create_gateway(&settings.gateway)?;
    let target = cli.target(settings.controller.default_items_per_page);
    tracing::info!("Rendering {target:?} in {}", language.display_name());

    let home = Target::Screen {
        screen: Screen::Home,
        pagination: None,
    };
    let mut session = Session::open(gateway, language, settings.controller).await?;
    if target != home {
        session.show(target).await;
    }

    let html = session.html();
    match &cli.output {
        Some(path) => std::fs::write(path, html)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{html}"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
