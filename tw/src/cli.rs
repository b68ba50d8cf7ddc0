//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::domain::{BudgetTier, HolidayType, Month, TripContext};

/// TripWeaver - trip planning and travel Q&A
#[derive(Parser)]
#[command(
    name = "tw",
    about = "Plan a trip and chat about it with an AI travel assistant",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a full trip plan
    Plan {
        #[command(flatten)]
        trip: TripArgs,
    },

    /// Chat about a trip
    Chat {
        #[command(flatten)]
        trip: TripArgs,

        /// Skip plan generation and go straight to chat
        #[arg(long)]
        skip_plan: bool,
    },
}

/// Trip preferences shared by plan and chat
#[derive(Debug, Args)]
pub struct TripArgs {
    /// Where you're going
    #[arg(value_name = "DESTINATION")]
    pub destination: String,

    /// Travel month (e.g. june)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Trip length in days
    #[arg(short, long, default_value = "7")]
    pub duration: u32,

    /// Number of travelers
    #[arg(short, long, default_value = "2")]
    pub group_size: String,

    /// Budget tier (budget, mid-range, luxury, backpacker, family)
    #[arg(short, long)]
    pub budget: Option<String>,

    /// Holiday type (city, beach, adventure, romantic, family, cultural, relaxation)
    #[arg(short = 't', long)]
    pub holiday_type: Option<String>,

    /// Free-text notes for the planner
    #[arg(long, default_value = "")]
    pub comments: String,
}

impl TripArgs {
    /// Convert CLI arguments into a TripContext
    ///
    /// Unrecognized month, budget, or holiday-type values warn and fall back
    /// to the defaults rather than failing the run.
    pub fn to_trip(&self) -> TripContext {
        debug!(destination = %self.destination, "TripArgs::to_trip: called");

        let month = self.month.as_deref().and_then(|m| {
            let parsed = Month::parse(m);
            if parsed.is_none() {
                eprintln!("Warning: Unknown month '{}', leaving travel dates open", m);
            }
            parsed
        });

        let budget = match self.budget.as_deref() {
            None => BudgetTier::default(),
            Some(b) => BudgetTier::parse(b).unwrap_or_else(|| {
                eprintln!("Warning: Unknown budget '{}', using mid-range", b);
                BudgetTier::default()
            }),
        };

        let holiday_type = match self.holiday_type.as_deref() {
            None => HolidayType::default(),
            Some(h) => HolidayType::parse(h).unwrap_or_else(|| {
                eprintln!("Warning: Unknown holiday type '{}', using general", h);
                HolidayType::default()
            }),
        };

        // duration_days is documented always positive
        let duration_days = if self.duration == 0 {
            eprintln!("Warning: Duration must be at least 1 day, using 1");
            1
        } else {
            self.duration
        };

        TripContext {
            destination: self.destination.trim().to_string(),
            month,
            duration_days,
            group_size: self.group_size.trim().to_string(),
            budget,
            holiday_type,
            comments: self.comments.clone(),
        }
    }
}
