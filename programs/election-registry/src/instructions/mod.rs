pub mod add_candidate;
pub mod cast_vote;
pub mod initialize_registry;
pub mod manage_election;
pub mod queries;
pub mod records;
pub mod register_voter;
pub mod reset_election;

pub use add_candidate::*;
pub use cast_vote::*;
pub use initialize_registry::*;
pub use manage_election::*;
pub use queries::*;
pub use register_voter::*;
pub use reset_election::*;
