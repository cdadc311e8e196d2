use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use copperati::api;
use copperati::assets::AssetLoader;
use copperati::models::AppConfig;
use copperati::server;
use shade_match::{Color, DistanceMetric, SampleRequest};

#[derive(Parser)]
#[command(name = "copperati")]
#[command(about = "Copperati - find the copper shade that matches a hair photo")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Match a photo against the configured shades
    Analyze {
        /// Image file (PNG, JPEG, GIF, WebP, BMP, TIFF)
        image: PathBuf,

        /// Use this #RRGGBB color instead of sampling the image
        #[arg(short, long)]
        color: Option<String>,

        /// Sample a single pixel instead of averaging, as "X,Y"
        #[arg(short, long, value_parser = parse_pick_arg)]
        pick: Option<(u32, u32)>,

        /// Distance metric: "euclidean" or "ciede2000"
        #[arg(short, long)]
        metric: Option<DistanceMetric>,

        /// Also list the N closest shades
        #[arg(short, long)]
        top: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the configured shades
    Shades {
        /// Print the palette as JSON
        #[arg(long)]
        json: bool,
    },
    /// Extract the embedded config.yaml for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Copperati API",
        description = "Match a photographed hair color to a named copper shade",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_analyze, api::handle_shades),
    components(schemas(
        api::AnalyzeForm,
        api::AnalyzeResponse,
        api::ShadeResponse,
        api::ShadesResponse,
    )),
    tags(
        (name = "Analysis", description = "Photo to shade matching"),
        (name = "Shades", description = "The configured shade palette")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Analyze {
            image,
            color,
            pick,
            metric,
            top,
            json,
        }) => run_analyze_command(&image, color, pick, metric, top, json),
        Some(Commands::Shades { json }) => run_shades_command(json),
        Some(Commands::Init { force }) => run_init_command(force),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn parse_pick_arg(s: &str) -> Result<(u32, u32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad X '{x}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad Y '{y}': {e}"))?;
    Ok((x, y))
}

/// Minimal logging for CLI commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "copperati=warn,shade_match=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

/// Analyze an image file directly (no server needed)
fn run_analyze_command(
    image: &Path,
    color: Option<String>,
    pick: Option<(u32, u32)>,
    metric: Option<DistanceMetric>,
    top: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let config = AppConfig::load(&AssetLoader::from_env())?;
    let mut analyzer = config.analyzer();
    if let Some(metric) = metric {
        analyzer = analyzer.metric(metric);
    }

    // Only read the file when the override will not short-circuit sampling
    let override_is_valid = color.as_deref().is_some_and(Color::is_canonical_hex);
    let bytes = if override_is_valid {
        Vec::new()
    } else {
        std::fs::read(image)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", image.display()))?
    };

    let mut request = SampleRequest::new();
    request.hex_override = color;
    if let Some((x, y)) = pick {
        request = request.with_pick(x, y);
    }

    let analysis = analyzer.analyze(&bytes, &request)?;
    let ranked: Vec<_> = top
        .map(|n| {
            analyzer
                .rank(analysis.result.sampled_color)
                .into_iter()
                .take(n)
                .collect()
        })
        .unwrap_or_default();

    if json {
        let mut value = serde_json::to_value(api::AnalyzeResponse::from(analysis))?;
        if top.is_some() {
            value["closest"] = ranked
                .iter()
                .map(|(shade, distance)| {
                    serde_json::json!({
                        "shade": api::ShadeResponse::from(*shade),
                        "distance": distance,
                    })
                })
                .collect();
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if let Some(rejected) = &analysis.rejected_override {
        eprintln!("Ignoring invalid color '{rejected}', sampled the image instead");
    }

    let shade = &analysis.result.matched_shade;
    println!(
        "Sampled {} ({})",
        analysis.result.sampled_color,
        analysis.source.as_str()
    );
    println!(
        "Matched {} {} {} [{}], distance {:.2} ({})",
        shade.id,
        shade.name,
        shade.color,
        shade.group,
        analysis.result.distance,
        analysis.result.metric
    );
    if !shade.description.is_empty() {
        println!("  {}", shade.description);
    }

    if !ranked.is_empty() {
        println!("\nClosest shades:");
        for (i, (shade, distance)) in ranked.iter().enumerate() {
            println!(
                "  {:>2}. {:<4} {:<26} {} {:>8.2}",
                i + 1,
                shade.id,
                shade.name,
                shade.color,
                distance
            );
        }
    }

    Ok(())
}

/// Print the configured palette
fn run_shades_command(json: bool) -> anyhow::Result<()> {
    init_cli_tracing();

    let config = AppConfig::load(&AssetLoader::from_env())?;

    if json {
        let shades = api::ShadesResponse {
            shades: config.shades.iter().map(api::ShadeResponse::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&shades)?);
        return Ok(());
    }

    for shade in &config.shades {
        println!(
            "{:<4} {:<26} {} {:<8} {}",
            shade.id,
            shade.name,
            shade.color,
            shade.group.as_str(),
            shade.description
        );
    }
    Ok(())
}

/// Extract the embedded config to the filesystem
fn run_init_command(force: bool) -> anyhow::Result<()> {
    let report = AssetLoader::from_env().init(force)?;

    for f in &report.written {
        println!("  + {f}");
    }
    for f in &report.skipped {
        println!("  - {f} exists (use --force to overwrite)");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Copperati v{VERSION}");
    println!("Hair photo to copper shade matcher\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let loader = AssetLoader::new(config_file.map(PathBuf::from));
    let config = AppConfig::load_from_assets(&loader);

    println!("\nConfiguration:");
    println!("  Source:     {}", loader.config_source());
    println!("  Shades:     {}", config.shades.len());
    println!(
        "  Sampling:   {0}x{0} grid, {1} filter",
        config.sampling.grid_size, config.sampling.filter
    );
    println!(
        "  Matching:   {} metric, bias margin {}",
        config.matching.metric, config.matching.bias_margin
    );
    println!("  Upload max: {} bytes", config.limits.max_upload_bytes);

    println!("\nCommands:");
    println!("  copperati serve     Start the HTTP server");
    println!("  copperati analyze   Match a photo from the command line");
    println!("  copperati shades    List the configured shades");
    println!("  copperati init      Extract the embedded config.yaml");
    println!("\nRun 'copperati --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "copperati=debug,shade_match=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = Arc::new(AssetLoader::from_env());

    tracing::info!(config = %asset_loader.config_source(), "Config source");

    if let Err(e) = asset_loader.seed_if_configured() {
        tracing::warn!(%e, "Failed to seed config file");
    }

    let state = server::create_app_state(asset_loader)?;

    // Build router: shared API routes plus production-only docs
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Copperati server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
