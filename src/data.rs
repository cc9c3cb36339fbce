mod payload;
pub use payload::*;

mod request;
pub use request::*;

mod user;
pub use user::*;
