pub mod client;
pub mod errors;

pub use client::{new_user_from_input, RosterClient};
pub use errors::{ClientError, ClientResult};
