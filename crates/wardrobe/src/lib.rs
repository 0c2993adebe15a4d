pub mod body;
pub mod cycle;
pub mod engine;
pub mod macros;
pub mod occlusion;
pub mod policy;
pub mod registry;
pub mod sink;
pub mod slot;
pub mod state;

pub use body::{BodyPart, BodyPartSet};
pub use cycle::Request;
pub use engine::{Change, SelectionEngine};
pub use registry::{
    BaseBodyConfig, ConfigError, Piece, PieceConfig, RenderHandle, SlotRegistry, SlotsConfig,
};
pub use sink::VisibilitySink;
pub use slot::Slot;
pub use state::SelectionState;
