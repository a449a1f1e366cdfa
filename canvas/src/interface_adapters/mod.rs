// Interface adapters: host-facing HTTP/WebSocket surface, outbound client, renderer and clock.

pub mod clients;
pub mod clock;
pub mod http;
pub mod net;
pub mod protocol;
pub mod renderer;
pub mod routes;
pub mod state;
