// crates/scholar-reputation/tests/reputation_scenarios.rs
//
// Scenario tests for the reputation engine.
//
// Covers the full path a caller takes: building contributions, composing
// components, resolving tiers, and scoring subjects out of a contribution
// source (including concurrently, for independent subjects).

use std::sync::Arc;

use chrono::{Duration, Utc};

use scholar_core::{
    ActivitySignals, ConsistencyOutcome, Endorsement, PaperContribution, PaperRecord, Pubkey,
    ReviewContribution, ReviewRecord,
};
use scholar_reputation::{
    assemble, calculate_paper_reputation, calculate_review_reputation,
    calculate_total_reputation, get_tier, score_subject, AuxiliaryComponents, CollectionPolicy,
    InMemoryContributionSource, ReputationComponents, ReputationTier,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Three well-rated papers of increasing age.
fn researcher_papers() -> Vec<PaperContribution> {
    vec![
        PaperContribution::new("32623:pubkey:id1", 8.0, 15, 6.0),
        PaperContribution::new("32623:pubkey:id2", 7.0, 8, 18.0),
        PaperContribution::new("32623:pubkey:id3", 9.0, 25, 30.0),
    ]
}

/// Ten quality-4 reviews, one every three months.
fn researcher_reviews() -> Vec<ReviewContribution> {
    (0..10)
        .map(|i| ReviewContribution::new(format!("review{}", i), 4.0, (i * 3) as f64))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn active_researcher_reaches_established_or_expert() {
    let publication_quality = calculate_paper_reputation(&researcher_papers());
    let review_quality = calculate_review_reputation(&researcher_reviews());

    let components = ReputationComponents {
        publication_quality,
        review_quality,
        community_trust: 50.0,
        governance_participation: 20.0,
        economic_stake: 10.0,
        statistical_consistency: 100.0,
        time_investment: 50.0,
        penalties: 0.0,
    };

    let total = calculate_total_reputation(&components);
    let tier = get_tier(total);

    assert!(total > 0.0);
    assert!(matches!(
        tier.tier,
        ReputationTier::Established | ReputationTier::Expert
    ));
    assert!(tier.permissions.can_review);
    assert!(tier.permissions.can_vote_major);
}

#[test]
fn assemble_matches_manual_composition() {
    let aux = AuxiliaryComponents {
        community_trust: 50.0,
        governance_participation: 20.0,
        economic_stake: 10.0,
        statistical_consistency: 100.0,
        time_investment: 50.0,
        penalties: 0.0,
    };
    let now = Utc::now();
    let data = assemble(
        Pubkey::new("pubkey"),
        &researcher_papers(),
        &researcher_reviews(),
        &aux,
        now,
    );

    let expected = calculate_paper_reputation(&researcher_papers())
        + calculate_review_reputation(&researcher_reviews())
        + 230.0;
    assert!((data.total_reputation - expected).abs() < 1e-9);
    assert_eq!(data.tier, get_tier(expected).tier);
    assert_eq!(data.last_calculated, now);
    // Reviews sum past the cap.
    assert_eq!(data.components.review_quality, 400.0);
}

#[test]
fn older_portfolio_scores_lower() {
    let fresh = researcher_papers();
    let aged: Vec<PaperContribution> = fresh
        .iter()
        .map(|p| {
            let mut p = p.clone();
            p.age_months += 60.0;
            p
        })
        .collect();

    let fresh_score = calculate_paper_reputation(&fresh);
    let aged_score = calculate_paper_reputation(&aged);
    assert!((aged_score - fresh_score * 0.5).abs() < 1e-6);
}

#[tokio::test]
async fn scores_subject_from_source() {
    let now = Utc::now();
    let alice = Pubkey::new("alice");
    let bob = Pubkey::new("bob");
    let source = InMemoryContributionSource::new();

    source
        .add_paper(
            alice.clone(),
            PaperRecord {
                address: "32623:alice:p1".to_string(),
                created_at: now - Duration::days(30 * 12),
                citations: 10,
            },
        )
        .unwrap();
    source
        .add_review(
            bob.clone(),
            ReviewRecord {
                event_id: "bob-review".to_string(),
                created_at: now,
                quality_rating: Some(5.0),
            },
            Some("32623:alice:p1".to_string()),
            Some(8.0),
        )
        .unwrap();
    source
        .set_activity(
            alice.clone(),
            ActivitySignals {
                endorsements: vec![Endorsement {
                    endorser: bob.clone(),
                    endorser_reputation: 100.0,
                }],
                votes: 10,
                proposals: 1,
                consistency: ConsistencyOutcome::Passed,
                ..Default::default()
            },
        )
        .unwrap();

    let data = score_subject(&source, &alice, &CollectionPolicy::default(), now)
        .await
        .unwrap();

    // Paper: (50 + 8*5 + 10*2) * 2^(-12/60)
    let paper = 110.0 * 2.0_f64.powf(-0.2);
    assert!((data.components.publication_quality - paper).abs() < 1e-9);
    assert_eq!(data.components.review_quality, 0.0);
    assert!((data.components.community_trust - 10.0).abs() < 1e-9);
    assert_eq!(data.components.governance_participation, 10.0);
    assert_eq!(data.components.statistical_consistency, 100.0);
    // Twelve months of account age at two points per month.
    assert!((data.components.time_investment - 24.0).abs() < 1e-9);
    assert_eq!(data.tier, ReputationTier::Established);

    let bob_data = score_subject(&source, &bob, &CollectionPolicy::default(), now)
        .await
        .unwrap();
    // 10 + 5*10
    assert_eq!(bob_data.components.review_quality, 60.0);
    assert_eq!(bob_data.tier, ReputationTier::Contributor);
    assert!(bob_data.permissions().can_review);
    assert!(!bob_data.permissions().can_vote_major);
}

#[tokio::test]
async fn independent_subjects_score_concurrently() {
    let now = Utc::now();
    let source = Arc::new(InMemoryContributionSource::new());
    for i in 0..8u32 {
        let author = Pubkey::new(format!("author{}", i));
        for j in 0..=i {
            source
                .add_paper(
                    author.clone(),
                    PaperRecord {
                        address: format!("32623:author{}:p{}", i, j),
                        created_at: now,
                        citations: 0,
                    },
                )
                .unwrap();
        }
    }

    let mut handles = Vec::new();
    for i in 0..8u32 {
        let source = Arc::clone(&source);
        handles.push(tokio::spawn(async move {
            let pubkey = Pubkey::new(format!("author{}", i));
            let data = score_subject(source.as_ref(), &pubkey, &CollectionPolicy::default(), now)
                .await
                .unwrap();
            (i, data)
        }));
    }

    for handle in handles {
        let (i, data) = handle.await.unwrap();
        // (i + 1) unrated papers at 75 points each, capped at 400.
        let expected = (75.0 * (i + 1) as f64).min(400.0);
        assert_eq!(data.components.publication_quality, expected);
        assert_eq!(data.pubkey, Pubkey::new(format!("author{}", i)));
    }
}
