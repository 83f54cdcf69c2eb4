//! Game module - session state and input routing

mod debug;
mod input;
mod session;

pub use debug::{DebugSettings, DebugTools, DEBUG_ITEMS};
pub use input::{Direction, InputAction};
pub use session::{Scene, Session, SessionError};
