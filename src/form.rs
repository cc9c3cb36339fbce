mod auth;
pub use auth::*;

mod profile;
pub use profile::*;
