//! Schedule command - print the fixture list

use anyhow::Result;
use clap::Args;

use league_core::{League, LeagueConfig, MatchSummary};

#[derive(Args)]
pub struct ScheduleArgs {
    /// Output fixtures as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ScheduleArgs, config: LeagueConfig) -> Result<()> {
    let league = League::from_config(&config)?;
    let weeks = fixtures_by_week(&league)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&weeks)?);
        return Ok(());
    }

    println!("\n=== {} fixtures ===", config.name);
    for (week, matches) in weeks.iter().enumerate() {
        println!("\nWeek {}:", week + 1);
        for m in matches {
            println!("  [{}] {} vs {}", m.id, m.home_team, m.away_team);
        }
    }

    Ok(())
}

fn fixtures_by_week(league: &League) -> Result<Vec<Vec<MatchSummary>>> {
    let weeks = (0..league.total_weeks())
        .map(|week| league.matches_for_week(week))
        .collect::<league_core::Result<Vec<_>>>()?;
    Ok(weeks)
}
