use anyhow::{Context, Result};
use hyg_to_sqlite::{
    cli::{Cli, Commands},
    load_catalog,
    schema::HYGDATA,
    writer::generate_create_table,
    Catalog, Coercion, LoadOptions,
};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();

    match cli.command() {
        Commands::Load {
            csv,
            database,
            lenient,
        } => {
            let start = Instant::now();
            let options = LoadOptions {
                coercion: if lenient {
                    Coercion::Lenient
                } else {
                    Coercion::Strict
                },
            };

            let summary = load_catalog(&database.path, &csv, &options)
                .with_context(|| format!("Failed to load {:?} into {:?}", csv, database.path))?;

            info!(
                "appended {} records to {:?} ({} total) in {:.1}s",
                summary.rows_appended,
                summary.database,
                summary.rows_after,
                start.elapsed().as_secs_f64()
            );
        }

        Commands::Init { database } => {
            let catalog = Catalog::open(&database.path)
                .with_context(|| format!("Failed to open database {:?}", database.path))?;
            catalog
                .init_schema()
                .with_context(|| format!("Failed to create table {}", HYGDATA.name))?;
            info!("table {} ready in {:?}", HYGDATA.name, database.path);
        }

        Commands::Schema => {
            println!("{};", generate_create_table(&HYGDATA));
        }
    }

    Ok(())
}
