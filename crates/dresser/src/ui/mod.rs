pub mod panel;
pub mod view;

pub use panel::Panel;
pub use view::render;

pub const DEFAULT_LABEL: &str = "Default"; // shown for an empty slot
pub const SLOT_COLUMN: usize = 12;
pub const LABEL_COLUMN: usize = 20;
