mod auth_switch;
pub use auth_switch::*;

pub mod nav;
pub mod shell;

mod user_card;
pub use user_card::*;
