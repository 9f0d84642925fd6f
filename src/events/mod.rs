mod pointer;
mod scroll;

pub use pointer::{wire_input_handlers, InputWiring};
pub use scroll::{publish_scroll, wire_scroll};
