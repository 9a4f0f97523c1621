use anchor_lang::prelude::*;
use crate::constants::REGISTRY_SEED;
use crate::states::Registry;

pub fn start(ctx: Context<ManageElection>, duration_minutes: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();
    let event = ctx.accounts.registry.start_election(admin, duration_minutes, now)?;

    msg!("Voting open from {} to {}", event.start_time, event.end_time);
    emit!(event);
    Ok(())
}

pub fn end(ctx: Context<ManageElection>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();
    let event = ctx.accounts.registry.end_election(admin, now)?;

    msg!("Voting closed at {} with {} votes", event.end_time, event.total_votes);
    emit!(event);
    Ok(())
}

pub fn emergency_stop(ctx: Context<ManageElection>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();
    let event = ctx.accounts.registry.emergency_stop(admin, now)?;

    msg!("Emergency stop at {}", event.timestamp);
    emit!(event);
    Ok(())
}

pub fn transfer_admin(ctx: Context<ManageElection>, new_admin: Pubkey) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let event = ctx.accounts.registry.transfer_admin(admin, new_admin)?;

    msg!("Admin transferred from {} to {}", event.previous_admin, event.new_admin);
    emit!(event);
    Ok(())
}

#[derive(Accounts)]
pub struct ManageElection<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}
