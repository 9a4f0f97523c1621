pub const REGISTRY_SEED: &[u8] = b"registry";
pub const VOTER_SEED: &[u8] = b"voter";
pub const BINDING_SEED: &[u8] = b"binding";

pub const MAX_TITLE: usize = 64;
pub const MAX_DESC: usize = 256;
pub const MAX_NAME: usize = 64;
pub const MAX_STUDENT_ID: usize = 32;

// get_all_candidates must fit in one return data buffer
pub const MAX_RETURN_DATA: usize = 1024;
pub const MAX_CANDIDATES: usize = 8;

pub const SECONDS_PER_MINUTE: i64 = 60;

pub const DEFAULT_TITLE: &str = "Student Council Election";
pub const DEFAULT_DESCRIPTION: &str = "Election of the student council representatives";
