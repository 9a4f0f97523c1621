//! State transitions of the election register.
//!
//! Every method takes the caller and the ledger time explicitly, along with
//! any voter or binding records the instruction loaded, validates
//! all of its preconditions before touching any field, and hands back the
//! event the instruction handler should emit.

use anchor_lang::prelude::*;
use crate::constants::{MAX_CANDIDATES, MAX_NAME, MAX_STUDENT_ID, SECONDS_PER_MINUTE};
use crate::errors::RegistryError;
use crate::events::{
    AdminTransferred, CandidateAdded, ElectionEnded, ElectionReset, ElectionStarted,
    EmergencyStopped, VoteCast, VoterRegistered,
};
use crate::states::{
    Candidate, ElectionInfo, ElectionStats, IdentityBinding, Phase, Registry, Voter, Winner,
};

impl Registry {
    fn only_admin(&self, caller: Pubkey) -> Result<()> {
        require_keys_eq!(caller, self.admin, RegistryError::Unauthorized);
        Ok(())
    }

    fn only_before_start(&self) -> Result<()> {
        require!(!self.voting_started, RegistryError::AlreadyStarted);
        Ok(())
    }

    fn check_student_id(student_id: &str) -> Result<()> {
        require!(!student_id.is_empty(), RegistryError::InvalidArgument);
        require!(student_id.len() <= MAX_STUDENT_ID, RegistryError::StudentIdTooLong);
        Ok(())
    }

    fn candidate_slot(&self, candidate_id: u32) -> Option<usize> {
        if candidate_id == 0 || candidate_id > self.candidate_count {
            return None;
        }
        let slot = (candidate_id - 1) as usize;
        (slot < self.candidates.len()).then_some(slot)
    }

    pub fn phase(&self) -> Phase {
        match (self.voting_started, self.voting_ended) {
            (false, _) => Phase::Registration,
            (true, false) => Phase::Voting,
            (true, true) => Phase::Concluded,
        }
    }

    fn accepting_votes(&self, now: i64) -> bool {
        self.voting_started
            && !self.voting_ended
            && now >= self.election.start_time
            && now <= self.election.end_time
    }

    /// `voter` and `binding` are the student's and the address's records,
    /// zeroed when freshly created.
    pub fn register_voter(
        &mut self,
        caller: Pubkey,
        registry_key: Pubkey,
        voter: &mut Voter,
        binding: &mut IdentityBinding,
        student_id: String,
        address: Pubkey,
    ) -> Result<VoterRegistered> {
        self.only_admin(caller)?;
        self.only_before_start()?;
        Self::check_student_id(&student_id)?;
        require_keys_eq!(voter.registry, Pubkey::default(), RegistryError::DuplicateRegistration);
        require_keys_eq!(binding.registry, Pubkey::default(), RegistryError::DuplicateRegistration);
        let voter_count = self.voter_count.checked_add(1).ok_or(RegistryError::MathOverflow)?;

        voter.registry = registry_key;
        voter.student_id = student_id.clone();
        voter.address = address;
        voter.has_voted = false;
        voter.is_registered = true;
        voter.voted_candidate_id = None;

        binding.registry = registry_key;
        binding.address = address;
        binding.student_id = student_id.clone();

        self.voter_count = voter_count;

        Ok(VoterRegistered { student_id, address })
    }

    pub fn add_candidate(
        &mut self,
        caller: Pubkey,
        name: String,
        student_id: String,
    ) -> Result<CandidateAdded> {
        self.only_admin(caller)?;
        self.only_before_start()?;
        require!(!name.is_empty(), RegistryError::InvalidArgument);
        require!(name.len() <= MAX_NAME, RegistryError::NameTooLong);
        Self::check_student_id(&student_id)?;
        require!(self.candidates.len() < MAX_CANDIDATES, RegistryError::TooManyCandidates);
        let candidate_id = self
            .candidate_count
            .checked_add(1)
            .ok_or(RegistryError::MathOverflow)?;

        self.candidates.push(Candidate {
            id: candidate_id,
            name: name.clone(),
            student_id: student_id.clone(),
            vote_count: 0,
        });
        self.candidate_count = candidate_id;

        Ok(CandidateAdded {
            candidate_id,
            name,
            student_id,
        })
    }

    pub fn start_election(
        &mut self,
        caller: Pubkey,
        duration_minutes: u64,
        now: i64,
    ) -> Result<ElectionStarted> {
        self.only_admin(caller)?;
        self.only_before_start()?;
        require!(
            self.candidate_count > 0 && self.voter_count > 0,
            RegistryError::NoCandidatesOrVoters
        );
        require!(duration_minutes > 0, RegistryError::InvalidArgument);
        let end_time = i64::try_from(duration_minutes)
            .ok()
            .and_then(|minutes| minutes.checked_mul(SECONDS_PER_MINUTE))
            .and_then(|seconds| now.checked_add(seconds))
            .ok_or(RegistryError::MathOverflow)?;

        self.election.start_time = now;
        self.election.end_time = end_time;
        self.election.is_active = true;
        self.voting_started = true;
        self.voting_ended = false;

        Ok(ElectionStarted {
            start_time: now,
            end_time,
        })
    }

    pub fn end_election(&mut self, caller: Pubkey, now: i64) -> Result<ElectionEnded> {
        self.only_admin(caller)?;
        require!(self.voting_started && !self.voting_ended, RegistryError::NotActive);

        self.voting_ended = true;
        self.election.is_active = false;
        self.election.end_time = now;

        Ok(ElectionEnded {
            end_time: now,
            total_votes: self.total_votes,
        })
    }

    /// Closes voting whatever the current phase. Safe to repeat.
    pub fn emergency_stop(&mut self, caller: Pubkey, now: i64) -> Result<EmergencyStopped> {
        self.only_admin(caller)?;

        self.voting_ended = true;
        self.election.is_active = false;

        Ok(EmergencyStopped { timestamp: now })
    }

    /// `voter` is the record stored under `student_id`, `binding` the one
    /// stored under the signer's address. Either is `None` when absent.
    pub fn cast_vote(
        &mut self,
        caller: Pubkey,
        candidate_id: u32,
        student_id: &str,
        voter: Option<&mut Voter>,
        binding: Option<&IdentityBinding>,
        now: i64,
    ) -> Result<VoteCast> {
        require!(self.accepting_votes(now), RegistryError::NotActive);
        let voter = voter
            .filter(|v| v.is_registered && v.student_id == student_id)
            .ok_or(RegistryError::NotRegistered)?;
        require!(!voter.has_voted, RegistryError::AlreadyVoted);
        require!(
            binding.is_some_and(|b| b.address == caller && b.student_id == student_id),
            RegistryError::IdentityMismatch
        );
        let candidate_slot = self
            .candidate_slot(candidate_id)
            .ok_or(RegistryError::InvalidArgument)?;
        let vote_count = self.candidates[candidate_slot]
            .vote_count
            .checked_add(1)
            .ok_or(RegistryError::MathOverflow)?;
        let total_votes = self.total_votes.checked_add(1).ok_or(RegistryError::MathOverflow)?;

        self.candidates[candidate_slot].vote_count = vote_count;
        self.total_votes = total_votes;
        voter.has_voted = true;
        voter.voted_candidate_id = Some(candidate_id);

        Ok(VoteCast {
            candidate_id,
            student_id: student_id.to_string(),
            voter: caller,
            total_votes,
        })
    }

    /// Drops every candidate and the tally. Voter registrations, including
    /// their `has_voted` flags, carry over to the next cycle.
    pub fn reset_election(&mut self, caller: Pubkey, now: i64) -> Result<ElectionReset> {
        self.only_admin(caller)?;

        self.candidates.clear();
        self.candidate_count = 0;
        self.total_votes = 0;
        self.voting_started = false;
        self.voting_ended = false;
        self.election.start_time = 0;
        self.election.end_time = 0;
        self.election.is_active = false;

        Ok(ElectionReset { timestamp: now })
    }

    pub fn transfer_admin(&mut self, caller: Pubkey, new_admin: Pubkey) -> Result<AdminTransferred> {
        self.only_admin(caller)?;
        require!(new_admin != Pubkey::default(), RegistryError::InvalidArgument);

        let previous_admin = std::mem::replace(&mut self.admin, new_admin);

        Ok(AdminTransferred {
            previous_admin,
            new_admin,
        })
    }

    pub fn candidate(&self, candidate_id: u32) -> Result<&Candidate> {
        let slot = self
            .candidate_slot(candidate_id)
            .ok_or(RegistryError::NotFound)?;
        Ok(&self.candidates[slot])
    }

    pub fn election_info(&self) -> ElectionInfo {
        ElectionInfo {
            title: self.election.title.clone(),
            description: self.election.description.clone(),
            start_time: self.election.start_time,
            end_time: self.election.end_time,
            is_active: self.election.is_active,
            phase: self.phase(),
        }
    }

    pub fn election_stats(&self) -> ElectionStats {
        ElectionStats {
            total_candidates: self.candidate_count,
            total_voters: self.voter_count,
            total_votes: self.total_votes,
            is_active: self.election.is_active,
            voting_ended: self.voting_ended,
        }
    }

    /// Open to everyone once voting has ended, to the administrator before
    /// that. Ties go to the lowest candidate id.
    pub fn winner(&self, caller: Pubkey) -> Result<Winner> {
        if !self.voting_ended {
            self.only_admin(caller)?;
        }
        require!(self.total_votes > 0, RegistryError::NoVotesCast);

        let mut leader: Option<&Candidate> = None;
        for candidate in &self.candidates {
            // strict: an equal count never displaces an earlier candidate
            if candidate.vote_count > leader.map_or(0, |l| l.vote_count) {
                leader = Some(candidate);
            }
        }
        let leader = leader.ok_or(RegistryError::NoVotesCast)?;

        Ok(Winner {
            candidate_id: leader.id,
            name: leader.name.clone(),
            vote_count: leader.vote_count,
        })
    }

    pub fn can_vote(&self, voter: Option<&Voter>, now: i64) -> bool {
        voter.is_some_and(|v| v.is_registered && !v.has_voted) && self.accepting_votes(now)
    }

    pub fn time_remaining(&self, now: i64) -> i64 {
        if !self.voting_started || self.voting_ended || now >= self.election.end_time {
            return 0;
        }
        self.election.end_time - now
    }
}

impl Voter {
    /// Unwraps a looked-up record, failing with `NotFound` when the student
    /// never registered.
    pub fn registered(record: Option<Voter>) -> Result<Voter> {
        record
            .filter(|v| v.is_registered)
            .ok_or_else(|| error!(RegistryError::NotFound))
    }
}
