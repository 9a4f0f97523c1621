use anchor_lang::prelude::*;
use crate::constants::{REGISTRY_SEED, VOTER_SEED};
use crate::instructions::records::read_record;
use crate::states::{Candidate, ElectionInfo, ElectionStats, Registry, Voter, Winner};

// Read-only instructions. Results travel back as return data.

pub fn get_candidate(ctx: Context<ReadRegistry>, candidate_id: u32) -> Result<Candidate> {
    ctx.accounts.registry.candidate(candidate_id).cloned()
}

pub fn get_all_candidates(ctx: Context<ReadRegistry>) -> Result<Vec<Candidate>> {
    Ok(ctx.accounts.registry.candidates.clone())
}

pub fn get_voter(ctx: Context<ReadVoter>, _student_id: String) -> Result<Voter> {
    Voter::registered(read_record(&ctx.accounts.voter)?)
}

pub fn get_election_info(ctx: Context<ReadRegistry>) -> Result<ElectionInfo> {
    Ok(ctx.accounts.registry.election_info())
}

pub fn get_election_stats(ctx: Context<ReadRegistry>) -> Result<ElectionStats> {
    Ok(ctx.accounts.registry.election_stats())
}

pub fn can_vote(ctx: Context<ReadVoter>, _student_id: String) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;
    let voter = read_record::<Voter>(&ctx.accounts.voter)?;
    Ok(ctx.accounts.registry.can_vote(voter.as_ref(), now))
}

pub fn get_time_remaining(ctx: Context<ReadRegistry>) -> Result<i64> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.registry.time_remaining(now))
}

pub fn get_winner(ctx: Context<ReadWinner>) -> Result<Winner> {
    let caller = ctx.accounts.caller.key();
    let winner = ctx.accounts.registry.winner(caller)?;
    msg!("Leader: #{} with {} votes", winner.candidate_id, winner.vote_count);
    Ok(winner)
}

#[derive(Accounts)]
pub struct ReadRegistry<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}

#[derive(Accounts)]
pub struct ReadWinner<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}

#[derive(Accounts)]
#[instruction(student_id: String)]
pub struct ReadVoter<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: PDA of the student, possibly empty; decoded by `read_record`.
    #[account(
        seeds = [VOTER_SEED, registry.key().as_ref(), student_id.as_bytes()],
        bump
    )]
    pub voter: UncheckedAccount<'info>,
}
