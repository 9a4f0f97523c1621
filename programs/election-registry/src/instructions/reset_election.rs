use anchor_lang::prelude::*;
use crate::constants::REGISTRY_SEED;
use crate::states::Registry;

pub fn handler(ctx: Context<ResetElection>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();
    let event = ctx.accounts.registry.reset_election(admin, now)?;

    msg!("Election reset at {}", event.timestamp);
    emit!(event);
    Ok(())
}

// voter PDAs are left alone: registrations outlive the cycle
#[derive(Accounts)]
pub struct ResetElection<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}
