pub mod commands;

use clap::{Parser, Subcommand};
use crate::aggregate::{RankingMetric, DEFAULT_PAGE_SIZE};
use crate::error::Result;
use crate::odds::SportKey;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "matchday")]
#[command(about = "Football fixtures, standings, rankings and odds from cached providers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show a league table
    Standings {
        /// Competition id (39 = Premier League, 61 = Ligue 1, ...)
        league: u32,
    },

    /// Show a league's top scorers
    Scorers {
        league: u32,

        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Show upcoming fixtures, recent results or live matches
    Fixtures {
        league: u32,

        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,

        /// Show finished matches instead of upcoming ones
        #[arg(long, conflicts_with = "live")]
        results: bool,

        /// Show matches in progress
        #[arg(long)]
        live: bool,
    },

    /// Show odds quotes for a competition
    Odds {
        /// Sport key (ligue1, premierleague, laliga, ...)
        sport: SportKey,
    },

    /// Upcoming fixtures joined with their odds
    Board {
        /// Sport keys to include
        #[arg(required = true)]
        sports: Vec<SportKey>,

        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,
    },

    /// Cross-league player ranking over the top five leagues
    Ranking {
        #[arg(short, long, value_enum, default_value_t = RankingMetric::Goals)]
        metric: RankingMetric,

        /// Rows taken from each league
        #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,

        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Refresh the odds board periodically until interrupted
    Watch {
        #[arg(required = true)]
        sports: Vec<SportKey>,

        /// Seconds between refreshes (defaults to the configured interval)
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Completions { shell } => {
                commands::generate_completions(shell);
                return Ok(());
            }
            // The file may not exist yet, so no config is loaded for init.
            Commands::Init { force } => {
                let _log_guard = commands::init_logging(self.debug, self.verbose, &Default::default())?;
                return commands::init(self.config, force).await;
            }
            _ => {}
        }

        let config = commands::load_config(self.config.clone())?;
        let _log_guard = commands::init_logging(self.debug, self.verbose, &config.logging)?;

        match self.command {
            Commands::Standings { league } => commands::standings(&config, league).await,
            Commands::Scorers { league, limit } => commands::scorers(&config, league, limit).await,
            Commands::Fixtures { league, count, results, live } => {
                commands::fixtures(&config, league, count, results, live).await
            }
            Commands::Odds { sport } => commands::odds(&config, sport).await,
            Commands::Board { sports, count } => commands::board(&config, sports, count).await,
            Commands::Ranking { metric, page_size, top } => {
                commands::ranking(&config, metric, page_size, top).await
            }
            Commands::Watch { sports, interval } => commands::watch(&config, sports, interval).await,
            Commands::Completions { .. } | Commands::Init { .. } => Ok(()),
        }
    }
}
