//! Simulate command - play a season week by week
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_league(), play_season(), report_season()
//! - Level 3: week report assembly
//! - Level 4: formatting utilities

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use league_core::{League, LeagueConfig, MatchSummary, Team};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SimulateArgs {
    /// Stop after this many weeks (default: play the whole season)
    #[arg(long)]
    pub weeks: Option<usize>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One played week
#[derive(Clone, Debug, Serialize)]
struct WeekReport {
    /// 1-based for display
    week: usize,
    matches: Vec<MatchSummary>,
}

/// Everything a simulation run produced
#[derive(Clone, Debug, Serialize)]
struct SeasonReport {
    league: String,
    weeks_played: usize,
    total_weeks: usize,
    complete: bool,
    weeks: Vec<WeekReport>,
    table: Vec<Team>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run simulate command
///
/// 1. Build the league from config
/// 2. Play the requested weeks
/// 3. Report results and standings
pub fn run(args: SimulateArgs, config: LeagueConfig) -> Result<()> {
    let mut league = build_league(&config)?;

    tracing::info!(
        "Simulating {}: {} teams, {} weeks",
        config.name,
        league.table().len(),
        league.total_weeks()
    );

    let report = play_season(&mut league, &config.name, args.weeks)?;

    report_season(&report, &args);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn build_league(config: &LeagueConfig) -> Result<League> {
    League::from_config(config).with_context(|| format!("Failed to build league '{}'", config.name))
}

/// Play up to `limit` weeks (all remaining when `None`)
fn play_season(league: &mut League, name: &str, limit: Option<usize>) -> Result<SeasonReport> {
    let remaining = league.total_weeks() - league.current_week();
    let to_play = limit.map_or(remaining, |n| n.min(remaining));

    let mut weeks = Vec::with_capacity(to_play);
    for _ in 0..to_play {
        let matches = league.play_week()?;
        weeks.push(WeekReport {
            week: league.current_week(),
            matches,
        });
    }

    Ok(SeasonReport {
        league: name.to_string(),
        weeks_played: league.current_week(),
        total_weeks: league.total_weeks(),
        complete: league.is_complete(),
        weeks,
        table: league.table().to_vec(),
    })
}

fn report_season(report: &SeasonReport, args: &SimulateArgs) {
    if args.json {
        print_json_report(report);
    } else {
        print_text_report(report);
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn print_json_report(report: &SeasonReport) {
    if let Ok(json) = serde_json::to_string_pretty(report) {
        println!("{}", json);
    }
}

fn print_text_report(report: &SeasonReport) {
    println!("\n=== {} ===", report.league);

    for week in &report.weeks {
        println!("\nWeek {}:", week.week);
        for m in &week.matches {
            println!("  {}", format_result(m));
        }
    }

    println!(
        "\nStandings after week {} of {}:",
        report.weeks_played, report.total_weeks
    );
    for line in format_table(&report.table) {
        println!("{}", line);
    }
}

fn format_result(m: &MatchSummary) -> String {
    format!(
        "[{}] {} {} - {} {}",
        m.id, m.home_team, m.home_goals, m.away_goals, m.away_team
    )
}

/// Standings rows in table order
fn format_table(teams: &[Team]) -> Vec<String> {
    let width = teams
        .iter()
        .map(|t| t.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut lines = vec![format!(
        "  {:<width$}  {:>2} {:>2} {:>2} {:>2} {:>3} {:>3} {:>4} {:>3}",
        "Team",
        "P",
        "W",
        "D",
        "L",
        "GF",
        "GA",
        "GD",
        "Pts",
        width = width
    )];

    for team in teams {
        let s = team.stats();
        let pad = width - team.name.chars().count();
        lines.push(format!(
            "  {}{}  {:>2} {:>2} {:>2} {:>2} {:>3} {:>3} {:>+4} {:>3}",
            team.name,
            " ".repeat(pad),
            s.played,
            s.won,
            s.drawn,
            s.lost,
            s.goals_for,
            s.goals_against,
            s.goal_difference(),
            s.points
        ));
    }

    lines
}

// ============================================================================
// TESTS
// ============================================================================
