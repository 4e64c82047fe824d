pub mod candidate;
pub mod profile;

pub use candidate::CandidateUser;
pub use profile::{Photo, Profile, ProfileField};
