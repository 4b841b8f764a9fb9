// crates/scholar-cli/src/commands/tiers.rs
//
// `scholar tiers` — display the reputation tier table.

use tabled::Tabled;

use scholar_reputation::{TierConfig, REPUTATION_TIERS};

use crate::output::{format_json, format_table, mark, OutputFormat};

/// A row in the tier display table.
#[derive(Tabled)]
struct TierRow {
    #[tabled(rename = "Tier")]
    tier: String,
    #[tabled(rename = "Range")]
    range: String,
    #[tabled(rename = "Publish")]
    publish: &'static str,
    #[tabled(rename = "Review")]
    review: &'static str,
    #[tabled(rename = "Comment")]
    comment: &'static str,
    #[tabled(rename = "Vote (Minor)")]
    vote_minor: &'static str,
    #[tabled(rename = "Vote (Major)")]
    vote_major: &'static str,
    #[tabled(rename = "Edit")]
    edit: &'static str,
    #[tabled(rename = "Investigate")]
    investigate: &'static str,
}

impl From<&TierConfig> for TierRow {
    fn from(config: &TierConfig) -> Self {
        let range = if config.max_reputation.is_infinite() {
            format!("{}+", config.min_reputation)
        } else {
            format!("{} - {}", config.min_reputation, config.max_reputation)
        };
        let p = &config.permissions;
        Self {
            tier: config.tier.as_str().to_string(),
            range,
            publish: mark(p.can_publish),
            review: mark(p.can_review),
            comment: mark(p.can_comment),
            vote_minor: mark(p.can_vote_minor),
            vote_major: mark(p.can_vote_major),
            edit: mark(p.can_edit),
            investigate: mark(p.can_investigate),
        }
    }
}

/// Run the tiers command.
pub fn run(format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            // serde_json has no representation for infinity; the top tier's
            // upper bound is emitted as null.
            println!("{}", format_json(&REPUTATION_TIERS.to_vec()));
        }
        OutputFormat::Table => {
            let rows: Vec<TierRow> = REPUTATION_TIERS.iter().map(TierRow::from).collect();
            println!("Reputation Tiers");
            println!();
            println!("{}", format_table(&rows));
        }
    }

    Ok(())
}
