// Domain layer: conversation handlers, canvas commands and the color palette.

pub mod entities;
pub mod errors;
pub mod palette;

pub use entities::{CanvasCommand, CanvasDirective, Handler, Reply, Turn};
pub use errors::ConversationError;
