//! Proposal lifecycle walkthroughs against the derived state machine,
//! without the runtime harness.

use anchor_lang::prelude::Pubkey;

use campaign_dao::constants::*;
use campaign_dao::state::{
    CampaignDao, GovernanceParams, Proposal, ProposalAction, ProposalState, VoteType,
};

fn dao() -> CampaignDao {
    CampaignDao {
        campaign_id: 42,
        token_mint: Pubkey::new_unique(),
        creator: Pubkey::new_unique(),
        topic: "campaign-42-forum".into(),
        enabled: true,
        params: GovernanceParams::default(),
        proposal_count: 0,
        bump: 255,
        reserved: [0; 4],
    }
}

fn proposal(dao: &mut CampaignDao, now: i64, snapshot_supply: u64) -> Proposal {
    let id = dao.assign_proposal_id().unwrap();
    Proposal {
        dao: Pubkey::new_unique(),
        id,
        proposer: Pubkey::new_unique(),
        title: "Treasury grant".into(),
        description: "Fund the community round".into(),
        action: ProposalAction::TransferFunds {
            recipient: Pubkey::new_unique(),
            amount: 1_000_000,
        },
        start_time: now,
        end_time: now + dao.params.voting_period,
        snapshot_supply,
        for_votes: 0,
        against_votes: 0,
        abstain_votes: 0,
        executed: false,
        bump: 255,
        reserved: [0; 2],
    }
}

#[test]
fn proposal_ids_ascend_from_one() {
    let mut d = dao();
    let now = 1_000_000;
    assert_eq!(proposal(&mut d, now, 1).id, 1);
    assert_eq!(proposal(&mut d, now, 1).id, 2);
    assert_eq!(proposal(&mut d, now, 1).id, 3);
}

#[test]
fn lifecycle_pending_active_succeeded() {
    let mut d = dao();
    let now = 1_000_000;
    let mut p = proposal(&mut d, now + 100, 1_000_000);

    // before start
    assert_eq!(p.state(now, &d.params), ProposalState::Pending);
    // in the window
    assert_eq!(p.state(p.start_time, &d.params), ProposalState::Active);

    // 10% quorum, 50% majority on a 1M snapshot
    p.record_vote(VoteType::For, 400_000).unwrap();
    p.record_vote(VoteType::Against, 200_000).unwrap();
    p.record_vote(VoteType::Abstain, 50_000).unwrap();

    // still active until the bell, then succeeded
    assert_eq!(p.state(p.end_time - 1, &d.params), ProposalState::Active);
    assert_eq!(p.state(p.end_time, &d.params), ProposalState::Succeeded);

    // execution is terminal
    p.executed = true;
    assert_eq!(p.state(p.end_time + 1, &d.params), ProposalState::Executed);
}

#[test]
fn lifecycle_defeated_when_thresholds_missed() {
    let mut d = dao();
    let now = 1_000_000;

    // below quorum
    let mut p = proposal(&mut d, now, 1_000_000);
    p.record_vote(VoteType::For, 50_000).unwrap();
    assert_eq!(p.state(p.end_time, &d.params), ProposalState::Defeated);

    // quorum met, majority missed
    let mut p = proposal(&mut d, now, 1_000_000);
    p.record_vote(VoteType::For, 100_000).unwrap();
    p.record_vote(VoteType::Against, 150_000).unwrap();
    assert_eq!(p.state(p.end_time, &d.params), ProposalState::Defeated);
}

#[test]
fn amended_thresholds_apply_to_open_proposals() {
    let mut d = dao();
    let now = 1_000_000;
    let mut p = proposal(&mut d, now, 1_000_000);
    p.record_vote(VoteType::For, 150_000).unwrap();

    assert_eq!(p.state(p.end_time, &d.params), ProposalState::Succeeded);

    // a self-amendment raising quorum to 20% flips the outcome
    d.params.quorum_bps = 2_000;
    assert_eq!(p.state(p.end_time, &d.params), ProposalState::Defeated);
}

#[test]
fn update_parameters_action_round_trip() {
    let action = ProposalAction::UpdateParameters {
        proposal_threshold: 200 * 1_000_000_000,
        voting_period: 5 * 24 * 60 * 60,
        quorum_bps: 1_500,
        majority_bps: 6_000,
    };
    action.validate().unwrap();

    let mut d = dao();
    if let ProposalAction::UpdateParameters {
        proposal_threshold,
        voting_period,
        quorum_bps,
        majority_bps,
    } = action
    {
        d.params = GovernanceParams {
            proposal_threshold,
            voting_period,
            quorum_bps,
            majority_bps,
        };
    }
    assert_eq!(d.params.quorum_bps, 1_500);
    assert_eq!(d.params.majority_bps, 6_000);
    d.params.validate().unwrap();
}

#[test]
fn voting_period_bounds_are_enforced() {
    let mut p = GovernanceParams::default();
    p.voting_period = MAX_VOTING_PERIOD + 1;
    assert!(p.validate().is_err());
}
