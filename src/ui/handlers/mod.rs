//! Handler modules for keyboard input and the copy action.

mod copy_handler;
mod input_handler;

pub use copy_handler::CopyHandler;
pub use input_handler::InputHandler;
