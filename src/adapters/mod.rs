// Adapters layer: concrete implementations of the domain ports (http, terminal input/output).

pub mod http;
pub mod input;
pub mod view;

pub use http::HttpExchange;
pub use input::LineInput;
pub use view::{MemoryView, TerminalView};
