//! Cross-frontend primitives for presenting the session.
//!
//! Houses message logging, event handling, and the view model that both the
//! terminal client and future graphical clients can reuse.
pub mod config;
pub mod event;
pub mod format;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{ChannelConfig, FrontendConfig, MessageConfig};
pub use event::{EventConsumer, EventImpact, SessionEventConsumer};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{Overlay, SpriteView, ViewModel};
