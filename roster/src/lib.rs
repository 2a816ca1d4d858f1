//! Roster - a two-endpoint user service
//!
//! This crate provides a unified API for the roster server and client.
//!
//! # Example
//!
//! ```ignore
//! use roster::{Client, NewUser};
//!
//! let client = Client::new("http://localhost:3000");
//! let user = client.create_user(&NewUser::new("Alice", "alice@example.com")).await?;
//! ```

// Re-export client types
pub use roster_client::{ClientError, RosterClient as Client};

// Re-export server types
pub use roster_server::{create_router, AppState as Server, ServerConfig, ServerError};

// Re-export core types that external applications may need
pub use roster_core::{NewUser, User, ValidationErrors};
