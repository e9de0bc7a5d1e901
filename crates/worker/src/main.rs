use anyhow::Context;
use clap::Parser;
use screener_core::ingest::yahoo::YahooClient;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod table;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = screener_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let args = args::Args::parse();

    if let Err(err) = run(&settings, &args).await {
        sentry_anyhow::capture_anyhow(&err);
        tracing::error!(error = %format!("{err:#}"), "screen run failed");
        return Err(err);
    }
    Ok(())
}

async fn run(settings: &screener_core::config::Settings, args: &args::Args) -> anyhow::Result<()> {
    let as_of_date = screener_core::time::window::resolve_as_of_date(
        args.as_of_date.as_deref(),
        chrono::Utc::now(),
    )?;

    let cfg = args.to_configuration();
    cfg.validate().context("invalid screen configuration")?;

    let client = YahooClient::new()?;
    let report = screener_core::screen::run_screen(
        &client,
        &cfg,
        as_of_date,
        settings.progress_every(),
    )
    .await?;

    if report.is_empty() {
        tracing::warn!(%as_of_date, "no stocks matched the filters");
        println!("No matches. Loosen the filters and try again.");
    } else {
        print!("{}", table::render_table(&report.results));
    }
    println!("{}", report.summary());

    if let Some(path) = args.csv.as_deref() {
        screener_core::export::csv::write_results_to_path(path, &report.results)?;
        tracing::info!(path = %path.display(), rows = report.results.len(), "wrote CSV export");
    }

    Ok(())
}

fn init_sentry(settings: &screener_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
