// crates/scholar-cli/src/commands/score.rs
//
// `scholar score` — compute reputation for subjects in an events fixture.
//
// The fixture is loaded into an in-memory contribution source, so the same
// collection path an event-store client would take is exercised end to end.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use tabled::Tabled;

use scholar_core::Pubkey;
use scholar_reputation::{
    score_subject, CollectionPolicy, InMemoryContributionSource, ReputationData,
};

use crate::output::{format_json, format_table, points, OutputFormat};

/// Arguments for the score command.
#[derive(Debug, Args)]
pub struct ScoreCmd {
    /// Path to a JSON fixture of papers, reviews, and activity signals.
    #[arg(long)]
    pub events: PathBuf,

    /// Subject to score. Scores every author in the fixture when omitted.
    #[arg(long, value_parser = parse_pubkey)]
    pub pubkey: Option<Pubkey>,

    /// Scoring time (RFC 3339). Defaults to now.
    #[arg(long)]
    pub at: Option<DateTime<Utc>>,
}

fn parse_pubkey(value: &str) -> Result<Pubkey, String> {
    let pubkey = Pubkey::new(value);
    if pubkey.is_empty() {
        return Err("pubkey must not be empty".to_string());
    }
    Ok(pubkey)
}

/// A row in the component breakdown table.
#[derive(Tabled)]
struct ComponentRow {
    #[tabled(rename = "Component")]
    label: String,
    #[tabled(rename = "Points")]
    value: String,
    #[tabled(rename = "Max")]
    max: String,
    #[tabled(rename = "Fill")]
    fill: String,
}

/// Run the score command.
pub async fn run(
    cmd: &ScoreCmd,
    policy: &CollectionPolicy,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = InMemoryContributionSource::load(&cmd.events)?;
    let now = cmd.at.unwrap_or_else(Utc::now);

    let subjects = match &cmd.pubkey {
        Some(pubkey) => vec![pubkey.clone()],
        None => source.subjects()?,
    };
    tracing::info!(
        "Scoring {} subject(s) from {}",
        subjects.len(),
        cmd.events.display()
    );

    let mut results = Vec::with_capacity(subjects.len());
    for pubkey in &subjects {
        match score_subject(&source, pubkey, policy, now).await {
            Some(data) => results.push(data),
            None => tracing::warn!("Skipping subject with an empty pubkey"),
        }
    }

    match format {
        OutputFormat::Json => {
            if results.len() == 1 {
                println!("{}", format_json(&results[0]));
            } else {
                println!("{}", format_json(&results));
            }
        }
        OutputFormat::Table => {
            for (i, data) in results.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_report(data);
            }
        }
    }

    Ok(())
}

fn component_rows(data: &ReputationData) -> Vec<ComponentRow> {
    let mut rows: Vec<ComponentRow> = data
        .components
        .breakdown()
        .iter()
        .map(|share| ComponentRow {
            label: share.label.to_string(),
            value: points(share.value),
            max: points(share.max),
            fill: format!("{:.0}%", share.fraction() * 100.0),
        })
        .collect();

    rows.push(ComponentRow {
        label: "Statistical Consistency".to_string(),
        value: format!("{:+.2}", data.components.statistical_consistency),
        max: "--".to_string(),
        fill: "--".to_string(),
    });
    rows.push(ComponentRow {
        label: "Penalties".to_string(),
        value: format!("-{}", points(data.components.penalties)),
        max: "--".to_string(),
        fill: "--".to_string(),
    });
    rows
}

fn print_report(data: &ReputationData) {
    let config = data.tier_config();
    let progress = data.progress();

    println!("Reputation for {}", data.pubkey);
    println!("----------------{}", "-".repeat(data.pubkey.as_str().len()));
    println!("  Total:        {}", points(data.total_reputation));
    println!("  Tier:         {} ({})", data.tier, data.tier.as_str());
    match progress.next {
        Some(next) => println!(
            "  Progress:     {:.0}% towards {} ({} / {})",
            progress.fraction * 100.0,
            next,
            points(data.total_reputation),
            config.max_reputation
        ),
        None => println!("  Progress:     top tier reached"),
    }
    println!("  Permissions:  {}", data.permissions().granted().join(", "));
    println!(
        "  Calculated:   {}",
        data.last_calculated.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();
    println!("{}", format_table(&component_rows(data)));
}
