mod attendance;
mod auth;
pub mod client;
mod employees;
mod records;
mod reports;
pub mod types;

pub use attendance::CheckKind;
pub use client::*;
pub use records::Collection;
pub use types::*;
