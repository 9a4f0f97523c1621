use anchor_lang::prelude::*;
use crate::constants::{BINDING_SEED, REGISTRY_SEED, VOTER_SEED};
use crate::instructions::records::{read_record, write_record};
use crate::states::{IdentityBinding, Registry, Voter};

pub fn handler(ctx: Context<CastVote>, candidate_id: u32, student_id: String) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let caller = ctx.accounts.voter_authority.key();
    let mut voter = read_record::<Voter>(&ctx.accounts.voter)?;
    let binding = read_record::<IdentityBinding>(&ctx.accounts.binding)?;

    let event = ctx.accounts.registry.cast_vote(
        caller,
        candidate_id,
        &student_id,
        voter.as_mut(),
        binding.as_ref(),
        now,
    )?;
    if let Some(voter) = &voter {
        write_record(&ctx.accounts.voter, voter)?;
    }

    msg!("Vote #{} recorded for candidate {}", event.total_votes, event.candidate_id);
    emit!(event);
    Ok(())
}

#[derive(Accounts)]
#[instruction(candidate_id: u32, student_id: String)]
pub struct CastVote<'info> {
    pub voter_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: PDA of the claimed student. Empty when the student never
    /// registered; decoded by `read_record`.
    #[account(
        mut,
        seeds = [VOTER_SEED, registry.key().as_ref(), student_id.as_bytes()],
        bump
    )]
    pub voter: UncheckedAccount<'info>,

    /// CHECK: PDA of the signer's binding. Empty when the signer was never
    /// registered; decoded by `read_record`.
    #[account(
        seeds = [BINDING_SEED, registry.key().as_ref(), voter_authority.key().as_ref()],
        bump
    )]
    pub binding: UncheckedAccount<'info>,
}
