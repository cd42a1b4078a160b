pub mod failure;
pub mod outcome;
pub mod request;

pub use failure::{ErrorKind, ResolveError};
pub use outcome::Outcome;
pub use request::{ExtractOptions, ResolutionRequest};
