use anchor_lang::prelude::*;
use crate::constants::REGISTRY_SEED;
use crate::states::Registry;

pub fn handler(ctx: Context<AddCandidate>, name: String, student_id: String) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let event = ctx.accounts.registry.add_candidate(admin, name, student_id)?;

    msg!("Candidate #{} \"{}\" added", event.candidate_id, event.name);
    emit!(event);
    Ok(())
}

#[derive(Accounts)]
pub struct AddCandidate<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}
