// Interface adapters: webhook wire protocol and HTTP handling.

pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
