pub mod event;
pub mod focus;
pub mod input;
pub mod state;

pub use focus::Focus;
pub use input::TextInput;
pub use state::{Anchor, ErrorDisplay, FormState};
