//! Controller state
//!
//! Defines everything the controller remembers between events. The state is
//! owned by one [`crate::Gc9a01`] instance and mutated only through its
//! event handlers.

pub mod machine;
pub mod window;

pub use machine::{ControllerState, Mode, ParserState};
pub use window::{AddressWindow, Cursor};
