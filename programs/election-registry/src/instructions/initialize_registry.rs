use anchor_lang::prelude::*;
use crate::constants::{DEFAULT_DESCRIPTION, DEFAULT_TITLE, MAX_DESC, MAX_TITLE, REGISTRY_SEED};
use crate::errors::RegistryError;
use crate::states::{Election, Registry};

pub fn handler(ctx: Context<InitializeRegistry>, cfg: RegistryConfig) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let registry = Registry::from_config(cfg, admin, ctx.bumps.registry)?;
    msg!("Registry created for \"{}\", admin {}", registry.election.title, admin);
    ctx.accounts.registry.set_inner(registry);

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = Registry::SPACE,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    pub title: String,
    pub description: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl Registry {
    pub fn from_config(cfg: RegistryConfig, admin: Pubkey, bump: u8) -> Result<Self> {
        require!(cfg.title.len() <= MAX_TITLE, RegistryError::TitleTooLong);
        require!(cfg.description.len() <= MAX_DESC, RegistryError::DescriptionTooLong);

        Ok(Self {
            admin,
            bump,
            election: Election {
                title: cfg.title,
                description: cfg.description,
                start_time: 0,
                end_time: 0,
                is_active: false,
            },
            voting_started: false,
            voting_ended: false,
            candidate_count: 0,
            voter_count: 0,
            total_votes: 0,
            candidates: Vec::new(),
        })
    }
}
