// Viewer state and input handling

pub mod input;
pub mod state;

pub use input::{handle_key, handle_mouse};
pub use state::App;
