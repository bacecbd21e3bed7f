use anyhow::{anyhow, Result};
use is_terminal::IsTerminal;
use time::OffsetDateTime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zoneserial::{Config, SoaResolver};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_init();

    let mut first_args = std::env::args().take(3);
    let (program_name, domain, config_file) = (
        first_args.next().unwrap_or("zoneserial".to_string()),
        first_args.next(),
        first_args.next(),
    );
    let domain = match domain {
        None => {
            return Err(anyhow!(
                "usage: {program_name} <domain> [/path/to/config.json]"
            ))
        }
        Some(domain) => domain,
    };
    let config = config_init(config_file)?;

    let resolver = SoaResolver::new(config.soa_source()?);
    let next = resolver
        .next_serial(&domain, OffsetDateTime::now_utc())
        .await?;

    if std::io::stdout().is_terminal() {
        println!("{domain}: next serial is {next}");
    } else {
        // Bare serial for scripts.
        println!("{next}");
    }
    Ok(())
}

fn tracing_init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zoneserial=info".into()),
        )
        .init();
}

fn config_init(config_file: Option<String>) -> Result<Config> {
    match config_file {
        None => Ok(Config::default()),
        Some(config_file) => {
            let config = Config::try_from_file(&config_file)?;
            tracing::debug!("loaded config from {config_file}");
            Ok(config)
        }
    }
}
