pub mod menu;
pub mod pointer;
pub mod scroll;

pub use menu::wire_menu_toggle;
pub use pointer::{wire_input_handlers, InputWiring};
pub use scroll::{wire_scroll, wire_scroll_lock};
