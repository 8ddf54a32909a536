//! Investment profile CLI commands

use clap::Subcommand;

use crate::error::FinsightResult;
use crate::models::RiskTolerance;
use crate::services::ProfileService;
use crate::storage::Storage;

/// Profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Set (or replace) the investment profile
    Set {
        /// Risk tolerance: low, medium, or high
        risk: String,

        /// Investment goals (e.g. "retirement", "short_term")
        #[arg(short, long, default_value = "")]
        goals: String,
    },

    /// Show the current investment profile
    Show,
}

/// Handle a profile command
pub fn handle_profile_command(storage: &Storage, cmd: ProfileCommands) -> FinsightResult<()> {
    let service = ProfileService::new(storage);

    match cmd {
        ProfileCommands::Set { risk, goals } => {
            let risk_tolerance = RiskTolerance::parse(&risk)?;
            let profile = service.set_profile(risk_tolerance, &goals)?;

            println!(
                "Investment profile saved: {} risk tolerance",
                profile.risk_tolerance
            );
            if !profile.goals.is_empty() {
                println!("Goals: {}", profile.goals);
            }
        }

        ProfileCommands::Show => match service.current()? {
            Some(profile) => {
                println!("Investment Profile");
                println!("==================");
                println!("Risk tolerance: {}", profile.risk_tolerance);
                if profile.goals.is_empty() {
                    println!("Goals:          (none set)");
                } else {
                    println!("Goals:          {}", profile.goals);
                }
                if let Some(guidance) = profile.goal_guidance() {
                    println!();
                    println!("{}", guidance);
                }
            }
            None => {
                println!("No investment profile set.");
                println!("Run 'finsight profile set <low|medium|high>' to create one.");
            }
        },
    }

    Ok(())
}
