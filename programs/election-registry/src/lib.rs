use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod registry;
pub mod states;


use instructions::*;
use states::{Candidate, ElectionInfo, ElectionStats, Voter, Winner};

declare_id!("D1c9nx7uRA5rLba7cKCiG3gwBwp6vmodWHTSXTvyUV4z");

#[program]
pub mod election_registry {
    use super::*;

    pub fn initialize_registry(ctx: Context<InitializeRegistry>, cfg: RegistryConfig) -> Result<()> {
        initialize_registry::handler(ctx, cfg)
    }

    pub fn register_voter(ctx: Context<RegisterVoter>, student_id: String, address: Pubkey) -> Result<()> {
        register_voter::handler(ctx, student_id, address)
    }

    pub fn add_candidate(ctx: Context<AddCandidate>, name: String, student_id: String) -> Result<()> {
        add_candidate::handler(ctx, name, student_id)
    }

    pub fn start_election(ctx: Context<ManageElection>, duration_minutes: u64) -> Result<()> {
        manage_election::start(ctx, duration_minutes)
    }

    pub fn end_election(ctx: Context<ManageElection>) -> Result<()> {
        manage_election::end(ctx)
    }

    pub fn emergency_stop(ctx: Context<ManageElection>) -> Result<()> {
        manage_election::emergency_stop(ctx)
    }

    pub fn transfer_admin(ctx: Context<ManageElection>, new_admin: Pubkey) -> Result<()> {
        manage_election::transfer_admin(ctx, new_admin)
    }

    pub fn reset_election(ctx: Context<ResetElection>) -> Result<()> {
        reset_election::handler(ctx)
    }

    pub fn vote(ctx: Context<CastVote>, candidate_id: u32, student_id: String) -> Result<()> {
        cast_vote::handler(ctx, candidate_id, student_id)
    }

    pub fn get_candidate(ctx: Context<ReadRegistry>, candidate_id: u32) -> Result<Candidate> {
        queries::get_candidate(ctx, candidate_id)
    }

    pub fn get_all_candidates(ctx: Context<ReadRegistry>) -> Result<Vec<Candidate>> {
        queries::get_all_candidates(ctx)
    }

    pub fn get_voter(ctx: Context<ReadVoter>, student_id: String) -> Result<Voter> {
        queries::get_voter(ctx, student_id)
    }

    pub fn get_election_info(ctx: Context<ReadRegistry>) -> Result<ElectionInfo> {
        queries::get_election_info(ctx)
    }

    pub fn get_election_stats(ctx: Context<ReadRegistry>) -> Result<ElectionStats> {
        queries::get_election_stats(ctx)
    }

    pub fn get_winner(ctx: Context<ReadWinner>) -> Result<Winner> {
        queries::get_winner(ctx)
    }

    pub fn can_vote(ctx: Context<ReadVoter>, student_id: String) -> Result<bool> {
        queries::can_vote(ctx, student_id)
    }

    pub fn get_time_remaining(ctx: Context<ReadRegistry>) -> Result<i64> {
        queries::get_time_remaining(ctx)
    }
}
