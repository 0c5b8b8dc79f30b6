use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use inky_preview::api;
use inky_preview::models::{AppConfig, SettingsRecord};
use inky_preview::server;
use inky_preview::services::{RenderService, SettingsResolver};

#[derive(Parser)]
#[command(name = "inky-preview")]
#[command(about = "Device-faithful preview server for six-color e-paper displays")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Render the current image directly to a PNG file
    Render {
        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Source image (overrides INKYPI_IMAGE_PATH)
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Settings file (overrides INKYPI_SETTINGS_FILE)
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },
    /// Print the resolved display settings as JSON
    Settings,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inky Preview API",
        description = "Device-faithful previews for six-color e-paper displays",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_image, api::handle_current_config),
    components(schemas(SettingsRecord, api::ErrorResponse)),
    tags(
        (name = "Preview", description = "Rendered panel previews"),
        (name = "Settings", description = "Active display settings")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env();

    match cli.command {
        Some(Commands::Serve) => run_server(config).await,
        Some(Commands::Render {
            output,
            image,
            settings,
        }) => {
            init_cli_logging();
            let mut config = config;
            if let Some(image) = image {
                config.image_path = image;
            }
            if let Some(settings) = settings {
                config.settings_file = settings;
            }
            run_render_command(config, output).await
        }
        Some(Commands::Settings) => {
            init_cli_logging();
            run_settings_command(config).await
        }
        None => {
            run_status_command(&config);
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inky_preview=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Render the current image to a PNG file (no server needed)
async fn run_render_command(config: AppConfig, output: PathBuf) -> anyhow::Result<()> {
    let renderer = Arc::new(RenderService::from_config(&config));
    let rendered = renderer.render().await?;

    std::fs::write(&output, &rendered.png)?;
    println!(
        "Rendered {} ({}x{}, {} bytes)",
        output.display(),
        rendered.width,
        rendered.height,
        rendered.png.len()
    );
    Ok(())
}

/// Print the settings record the next render would use
async fn run_settings_command(config: AppConfig) -> anyhow::Result<()> {
    let settings = tokio::task::spawn_blocking(move || {
        SettingsResolver::from_config(&config).resolve()
    })
    .await?;
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

/// Display status and configuration information
fn run_status_command(config: &AppConfig) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Inky Preview v{VERSION}");
    println!("Device-faithful previews for six-color e-paper displays\n");

    println!("Configuration:");
    println!("  INKYPI_SRC               = {}", config.base_dir.display());
    println!(
        "  INKYPI_SETTINGS_FILE     = {} ({})",
        config.settings_file.display(),
        exists_label(config.settings_file.exists())
    );
    println!(
        "  INKYPI_IMAGE_PATH        = {} ({})",
        config.image_path.display(),
        exists_label(config.image_path.exists())
    );
    println!("  INKYPI_CONFIG_URL        = {}", config.config_url);
    println!(
        "  INKYPI_CONFIG_TIMEOUT_MS = {}",
        config.config_timeout.as_millis()
    );
    println!("  BIND_ADDR                = {}", config.bind_addr);

    println!("\nCommands:");
    println!("  inky-preview serve      Start the HTTP server");
    println!("  inky-preview render     Render the current image to a PNG file");
    println!("  inky-preview settings   Print the resolved display settings");
    println!("\nRun 'inky-preview --help' for more details.");
}

fn exists_label(exists: bool) -> &'static str {
    if exists {
        "found"
    } else {
        "missing"
    }
}

/// Run the HTTP server
async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inky_preview=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        settings_file = %config.settings_file.display(),
        settings_exists = config.settings_file.exists(),
        image_path = %config.image_path.display(),
        image_exists = config.image_path.exists(),
        config_url = %config.config_url,
        config_timeout_ms = config.config_timeout.as_millis() as u64,
        "Configuration loaded"
    );

    let state = server::create_app_state(&config);
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "Inky Preview server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
