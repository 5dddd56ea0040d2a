pub mod error;
pub mod render_state;
pub mod selection;
pub mod store;
pub mod types;

pub use error::{Error, Result};
pub use render_state::RenderState;
pub use selection::ChatListSelection;
pub use store::RenderStateStore;
pub use types::*;
