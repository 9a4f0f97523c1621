use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    #[msg("Caller is not the registry administrator")]
    Unauthorized,
    #[msg("Voting has already started")]
    AlreadyStarted,
    #[msg("Voting is not active")]
    NotActive,
    #[msg("Student is not registered to vote")]
    NotRegistered,
    #[msg("Student has already voted")]
    AlreadyVoted,
    #[msg("Signer is not bound to this student id")]
    IdentityMismatch,
    #[msg("Student id or address is already registered")]
    DuplicateRegistration,
    #[msg("Invalid argument")]
    InvalidArgument,
    #[msg("Record not found")]
    NotFound,
    #[msg("At least one candidate and one voter are required")]
    NoCandidatesOrVoters,
    #[msg("No votes have been cast")]
    NoVotesCast,

    #[msg("Title too long")]
    TitleTooLong,
    #[msg("Description too long")]
    DescriptionTooLong,
    #[msg("Candidate name too long")]
    NameTooLong,
    #[msg("Student id too long")]
    StudentIdTooLong,
    #[msg("Candidate list is full")]
    TooManyCandidates,
    #[msg("Math overflow")]
    MathOverflow,
}
