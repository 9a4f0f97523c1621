use anchor_lang::prelude::*;
use crate::constants::{MAX_CANDIDATES, MAX_DESC, MAX_NAME, MAX_RETURN_DATA, MAX_STUDENT_ID, MAX_TITLE};

/// The single election register: administrator, election record, counters
/// and the candidates of the current cycle. Voters live in their own PDAs.
#[account]
pub struct Registry {
    pub admin: Pubkey,
    pub bump: u8,
    pub election: Election,
    pub voting_started: bool,
    pub voting_ended: bool,
    pub candidate_count: u32,
    pub voter_count: u32,
    pub total_votes: u64,
    pub candidates: Vec<Candidate>,
}
impl Registry {
    // 8 discriminator + admin + bump + election + flags + counters + candidates
    pub const SPACE: usize = 8 + 32 + 1 + Election::SPACE + 1 + 1 + 4 + 4 + 8
        + (4 + MAX_CANDIDATES * Candidate::SPACE);
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Election {
    pub title: String,
    pub description: String,
    pub start_time: i64,
    pub end_time: i64,
    pub is_active: bool,
}
impl Election {
    pub const SPACE: usize = (4 + MAX_TITLE) + (4 + MAX_DESC) + 8 + 8 + 1;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    pub student_id: String,
    pub vote_count: u64,
}
impl Candidate {
    pub const SPACE: usize = 4 + (4 + MAX_NAME) + (4 + MAX_STUDENT_ID) + 8;
}

const _: () = assert!(4 + MAX_CANDIDATES * Candidate::SPACE <= MAX_RETURN_DATA);

/// Seeds: `[b"voter", registry, student_id]`. A zeroed `registry` field
/// means the record was created by this instruction and is still unclaimed.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Voter {
    pub registry: Pubkey,
    pub student_id: String,
    pub address: Pubkey,
    pub has_voted: bool,
    pub is_registered: bool,
    pub voted_candidate_id: Option<u32>,
    pub bump: u8,
}
impl Voter {
    pub const SPACE: usize = 8 + 32 + (4 + MAX_STUDENT_ID) + 32 + 1 + 1 + (1 + 4) + 1;
}

/// Address -> student id pairing made at registration. Never rebound.
/// Seeds: `[b"binding", registry, address]`.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct IdentityBinding {
    pub registry: Pubkey,
    pub address: Pubkey,
    pub student_id: String,
    pub bump: u8,
}
impl IdentityBinding {
    pub const SPACE: usize = 8 + 32 + 32 + (4 + MAX_STUDENT_ID) + 1;
}

/// Derived from `(voting_started, voting_ended)`. An emergency stop before
/// the start leaves `(false, true)`, which still reads as `Registration`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Registration,
    Voting,
    Concluded,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ElectionInfo {
    pub title: String,
    pub description: String,
    pub start_time: i64,
    pub end_time: i64,
    pub is_active: bool,
    pub phase: Phase,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElectionStats {
    pub total_candidates: u32,
    pub total_voters: u32,
    pub total_votes: u64,
    pub is_active: bool,
    pub voting_ended: bool,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Winner {
    pub candidate_id: u32,
    pub name: String,
    pub vote_count: u64,
}
