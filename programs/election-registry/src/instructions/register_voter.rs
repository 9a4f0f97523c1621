use anchor_lang::prelude::*;
use crate::constants::{BINDING_SEED, REGISTRY_SEED, VOTER_SEED};
use crate::states::{IdentityBinding, Registry, Voter};

pub fn handler(ctx: Context<RegisterVoter>, student_id: String, address: Pubkey) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let registry_key = ctx.accounts.registry.key();
    let (voter_bump, binding_bump) = (ctx.bumps.voter, ctx.bumps.binding);

    let accounts = &mut *ctx.accounts;
    let event = accounts.registry.register_voter(
        admin,
        registry_key,
        &mut accounts.voter,
        &mut accounts.binding,
        student_id,
        address,
    )?;
    accounts.voter.bump = voter_bump;
    accounts.binding.bump = binding_bump;

    msg!("Voter {} bound to {}", event.student_id, event.address);
    emit!(event);
    Ok(())
}

#[derive(Accounts)]
#[instruction(student_id: String, address: Pubkey)]
pub struct RegisterVoter<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    // already-populated records are rejected as duplicates
    #[account(
        init_if_needed,
        payer = admin,
        space = Voter::SPACE,
        seeds = [VOTER_SEED, registry.key().as_ref(), student_id.as_bytes()],
        bump
    )]
    pub voter: Account<'info, Voter>,

    #[account(
        init_if_needed,
        payer = admin,
        space = IdentityBinding::SPACE,
        seeds = [BINDING_SEED, registry.key().as_ref(), address.as_ref()],
        bump
    )]
    pub binding: Account<'info, IdentityBinding>,

    pub system_program: Program<'info, System>,
}
