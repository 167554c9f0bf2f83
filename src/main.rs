use anyhow::{bail, Context};
use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{error, info};

use submerge::interfaces::{merge_subscription, MergeRequestBuilder};
use submerge::models::{AppState, RefreshPolicy};
use submerge::parser::ParseSettings;
use submerge::settings::Settings;
use submerge::web_handlers::interfaces;

/// Merge a proxy subscription into a Clash template configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Listen address (e.g., 127.0.0.1 or 0.0.0.0)
    #[arg(short, long, value_name = "ADDRESS")]
    address: Option<String>,

    /// Listen port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u32>,

    /// Node source (URL or path) to merge once instead of starting the server
    #[arg(long, value_name = "SOURCE")]
    source: Option<String>,

    /// Template (URL or path), defaults to the configured template
    #[arg(long, value_name = "TEMPLATE")]
    template: Option<String>,

    /// Refresh policy: always, placeholder or content-aware
    #[arg(long, value_name = "POLICY")]
    policy: Option<String>,

    /// Output file for the merged config, stdout if omitted
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<String>,
}

async fn run_once(settings: &Settings, args: &Args, source: &str) -> anyhow::Result<()> {
    let template = args
        .template
        .clone()
        .filter(|t| !t.trim().is_empty())
        .or_else(|| Some(settings.default_template.clone()).filter(|t| !t.trim().is_empty()))
        .context("No template given; use --template or set common.default_template")?;

    let policy = match args.policy.as_deref() {
        Some(name) => RefreshPolicy::parse(
            name,
            Some(settings.primary_group.as_str()),
            &settings.auto_group_type,
        )
        .with_context(|| format!("Unknown refresh policy: {}", name))?,
        None => settings.refresh_policy(),
    };

    let request = MergeRequestBuilder::new()
        .source_from_str(source)
        .template_from_str(&template)
        .policy(policy)
        .parse_settings(ParseSettings {
            allowed_schemes: settings.allowed_schemes.clone(),
        })
        .http_options(settings.http_options())
        .authorized(true)
        .build()
        .map_err(anyhow::Error::msg)?;

    let result = merge_subscription(&request).await?;
    match &args.output {
        Some(output_file) => {
            std::fs::write(output_file, &result.output)
                .with_context(|| format!("Failed to write to output file: {}", output_file))?;
            info!(
                "Successfully wrote {} node(s) to {}",
                result.node_count, output_file
            );
        }
        None => print!("{}", result.output),
    }
    Ok(())
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.output.is_some() && args.source.is_none() {
        bail!("-o/--output must be used together with --source");
    }

    let mut settings = match args.config.as_deref() {
        Some(path) => Settings::load_from_file(path)
            .with_context(|| format!("Failed to load settings from '{}'", path))?,
        None => Settings::default(),
    };

    env_logger::init_from_env(Env::default().default_filter_or(settings.log_level.as_str()));

    if let Some(source) = args.source.as_deref() {
        info!("Merging subscription from {}", source);
        return run_once(&settings, &args, source).await.map_err(|e| {
            error!("{:#}", e);
            e
        });
    }

    // Override settings with command line arguments if provided
    if let Some(address) = args.address {
        settings.listen_address = address;
    }
    if let Some(port) = args.port {
        settings.listen_port = port;
    }
    let listen_address = settings.listen_target();
    let workers = settings.max_concur_threads.max(1);

    info!("Subscription merger starting on {}", listen_address);
    let app_state = AppState::new(settings);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(interfaces::config)
    })
    .bind(listen_address)?
    .workers(workers)
    .run()
    .await?;

    Ok(())
}
