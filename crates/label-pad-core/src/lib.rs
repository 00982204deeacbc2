pub mod history;
pub mod session;

pub use session::{EditSession, SessionState};
