use std::path::PathBuf;
use std::time::Duration;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tokio::signal;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use crate::aggregate::RankingMetric;
use crate::cli::Cli;
use crate::config::{Config, LoggingConfig};
use crate::error::{Error, Result};
use crate::football::{Fixture, FootballDataClient};
use crate::matching::{JoinedFixture, TeamNameMatcher};
use crate::odds::{OddsDataClient, SportKey};
use crate::service::MatchdayService;

/// Resolve the configuration: explicit path, then the default file, then built-in defaults.
pub fn load_config(config_path: Option<PathBuf>) -> Result<Config> {
    let _ = dotenvy::dotenv();

    match config_path {
        Some(path) => Config::load_with_env(path),
        None => {
            let path = Config::default_path()?;
            if path.exists() {
                Config::load_with_env(path)
            } else {
                Config::from_env()
            }
        }
    }
}

/// Write a default configuration file
pub async fn init(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match config_path {
        Some(path) => path,
        None => Config::default_path()?,
    };

    if path.exists() && !force {
        warn!("Configuration file already exists: {}", path.display());
        println!("Configuration already exists at {} (use --force to overwrite)", path.display());
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Config::default().save(&path)?;
    info!("Created default configuration: {}", path.display());

    println!("✅ Configuration written to {}", path.display());
    println!("   Set [api].base_url to your proxy, or export MATCHDAY_BASE_URL.");
    Ok(())
}

pub async fn standings(config: &Config, league: u32) -> Result<()> {
    let client = FootballDataClient::from_config(config)?;
    let table = client.get_standings(league).await;

    if table.is_empty() {
        println!("No standings available for competition {}", league);
        return Ok(());
    }

    println!("{:>3}  {:<28} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4}", "#", "Team", "P", "W", "D", "L", "GD", "Pts");
    for row in table {
        println!(
            "{:>3}  {:<28} {:>3} {:>3} {:>3} {:>3} {:>+4} {:>4}",
            row.position, row.team.name, row.played, row.won, row.draw, row.lost, row.goal_difference, row.points
        );
    }
    Ok(())
}

pub async fn scorers(config: &Config, league: u32, limit: usize) -> Result<()> {
    let client = FootballDataClient::from_config(config)?;
    let rows = client.get_top_scorers(league, limit).await;

    if rows.is_empty() {
        println!("No scorers available for competition {}", league);
        return Ok(());
    }

    for (i, row) in rows.iter().enumerate() {
        println!(
            "{:>3}. {:<26} {:<22} {:>3} G {:>3} A",
            i + 1, row.player.name, row.team.name, row.goals, row.assists
        );
    }
    Ok(())
}

pub async fn fixtures(config: &Config, league: u32, count: usize, results: bool, live: bool) -> Result<()> {
    let client = FootballDataClient::from_config(config)?;
    let fixtures = if live {
        client.get_live_fixtures(league).await
    } else if results {
        client.get_last_results(league, count).await
    } else {
        client.get_next_fixtures(league, count).await
    };

    if fixtures.is_empty() {
        println!("No matches to show for competition {}", league);
        return Ok(());
    }

    let matcher = TeamNameMatcher::default();
    for fixture in &fixtures {
        println!("{}", format_fixture(fixture, &matcher));
    }
    Ok(())
}

pub async fn odds(config: &Config, sport: SportKey) -> Result<()> {
    let client = OddsDataClient::from_config(config)?;
    let quotes = client.get_odds_by_sport(sport).await;

    if quotes.is_empty() {
        println!("No odds available for {}", sport);
        return Ok(());
    }

    for quote in quotes {
        let o = quote.bookmaker_odds;
        println!(
            "{}  {:<24} v {:<24} {:>5.2} {:>5.2} {:>5.2}",
            quote.commence_time.format("%d/%m %H:%M"),
            quote.home_team_name,
            quote.away_team_name,
            o.home,
            o.draw,
            o.away
        );
    }
    Ok(())
}

pub async fn board(config: &Config, sports: Vec<SportKey>, count: usize) -> Result<()> {
    let service = MatchdayService::from_config(config)?;
    let board = service.upcoming_with_odds(&sports, count).await;
    print_board(&board, service.joiner().matcher());
    Ok(())
}

pub async fn ranking(config: &Config, metric: RankingMetric, page_size: usize, top: Option<usize>) -> Result<()> {
    if page_size == 0 {
        return Err(Error::Invalid("Page size must be greater than 0".to_string()));
    }

    let service = MatchdayService::from_config(config)?;
    let rows = service.european_ranking(metric, page_size).await;

    if rows.is_empty() {
        println!("No player statistics available");
        return Ok(());
    }

    let shown = top.unwrap_or(rows.len());
    for (i, row) in rows.iter().take(shown).enumerate() {
        let rating = row.rating.map(|r| format!("{:.2}", r)).unwrap_or_else(|| "-".to_string());
        println!(
            "{:>3}. {:<26} {:<22} {:<15} {:>3} G {:>3} A {:>5}",
            i + 1, row.player.name, row.team.name, row.league.name, row.goals, row.assists, rating
        );
    }
    Ok(())
}

pub async fn watch(config: &Config, sports: Vec<SportKey>, interval: Option<u64>) -> Result<()> {
    let period = interval
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.refresh.interval());
    if period.is_zero() {
        return Err(Error::Invalid("Interval must be greater than 0".to_string()));
    }

    let service = MatchdayService::from_config(config)?;
    let matcher = service.joiner().matcher().clone();
    println!("Refreshing every {:?}. Press Ctrl+C to stop.", period);

    let handle = service.start_board_refresh(sports, 5, period, move |board| {
        print_board(&board, &matcher);
    });

    wait_for_shutdown().await;
    handle.cancel().await;
    Ok(())
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}

/// Initialize tracing. The returned guard must live as long as file logging is wanted.
pub fn init_logging(debug: bool, verbose: bool, logging: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(debug)
        .with_line_number(debug);

    let guard = if logging.log_to_file {
        let path = PathBuf::from(&logging.log_file);
        let dir = path.parent().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| Error::Config(format!("Invalid log file: {}", logging.log_file)))?;
        let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

        let result = if logging.json_format {
            builder.json().with_writer(writer).try_init()
        } else {
            builder.with_ansi(false).with_writer(writer).try_init()
        };
        result.map_err(|e| Error::Config(format!("Failed to initialize logging: {}", e)))?;
        Some(guard)
    } else {
        let result = if logging.json_format {
            builder.json().with_writer(std::io::stderr).try_init()
        } else {
            builder.with_writer(std::io::stderr).try_init()
        };
        result.map_err(|e| Error::Config(format!("Failed to initialize logging: {}", e)))?;
        None
    };

    debug!("Logging initialized");
    Ok(guard)
}

fn format_fixture(fixture: &Fixture, matcher: &TeamNameMatcher) -> String {
    let score = match (fixture.score.home, fixture.score.away) {
        (Some(h), Some(a)) => format!("{} - {}", h, a),
        _ => "  v  ".to_string(),
    };
    format!(
        "{}  {:>5} {:^7} {:<5}  [{}]",
        fixture.kickoff_time.format("%d/%m %H:%M"),
        matcher.short_code(&fixture.home_team.name),
        score,
        matcher.short_code(&fixture.away_team.name),
        fixture.status.as_str()
    )
}

fn print_board(board: &[JoinedFixture], matcher: &TeamNameMatcher) {
    if board.is_empty() {
        println!("No upcoming fixtures");
        return;
    }

    for joined in board {
        let line = format_fixture(&joined.fixture, matcher);
        match (&joined.odds, joined.favorite()) {
            (Some(o), Some(favorite)) => println!(
                "{}  {:>5.2} {:>5.2} {:>5.2}  fav: {}",
                line, o.home, o.draw, o.away, favorite
            ),
            _ => println!("{}  odds not yet available", line),
        }
    }
}

/// Wait for shutdown signal (Ctrl+C)
async fn wait_for_shutdown() {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Received shutdown signal");
        }
        Err(err) => {
            warn!("Failed to listen for shutdown signal: {}", err);
        }
    }
}
