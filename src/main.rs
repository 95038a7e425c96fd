use anyhow::{Context, Result};
use nba_player_stats::{
    cli::{Cli, Commands, BANNER},
    client::StatsClient,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse_args();
    let config = cli.config();

    let Some(command) = cli.command else {
        println!("{}", BANNER);
        return Ok(());
    };

    let client = StatsClient::new(&config).context("Failed to set up stats client")?;

    match command {
        Commands::Show { person_id, season } => {
            let stats = match season {
                Some(year) => client.season_stats(person_id, year),
                None => client.player_stats(person_id),
            }
            .with_context(|| format!("Failed to load stats for player {}", person_id))?;

            if let Some(year) = stats.season_year() {
                println!("Season {}", year);
            }
            println!("{}", stats);
        }

        Commands::Stat { person_id, names } => {
            let stats = client
                .player_stats(person_id)
                .with_context(|| format!("Failed to load stats for player {}", person_id))?;
            for name in names {
                println!("{}: {:?}", name, stats.get_stat(&name));
            }
        }

        Commands::ListStats => {
            let schema = client.schema().context("Failed to build stat schema")?;
            println!("{} stats:\n", schema.len());
            for name in schema.names() {
                println!("  {}", name);
            }
        }

        Commands::Url { person_id } => {
            println!("{}", client.pages().profile_url(person_id));
        }
    }

    Ok(())
}
