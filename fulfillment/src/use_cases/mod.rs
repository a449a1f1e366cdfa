// Use cases layer: conversation turn handling.

pub mod conversation;

pub use conversation::ConversationUseCase;
