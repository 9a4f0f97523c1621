use anchor_lang::prelude::*;

#[event]
pub struct VoterRegistered {
    pub student_id: String,
    pub address: Pubkey,
}

#[event]
pub struct CandidateAdded {
    pub candidate_id: u32,
    pub name: String,
    pub student_id: String,
}

#[event]
pub struct VoteCast {
    pub candidate_id: u32,
    pub student_id: String,
    pub voter: Pubkey,
    pub total_votes: u64,
}

#[event]
pub struct ElectionStarted {
    pub start_time: i64,
    pub end_time: i64,
}

#[event]
pub struct ElectionEnded {
    pub end_time: i64,
    pub total_votes: u64,
}

#[event]
pub struct EmergencyStopped {
    pub timestamp: i64,
}

#[event]
pub struct ElectionReset {
    pub timestamp: i64,
}

#[event]
pub struct AdminTransferred {
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
}
