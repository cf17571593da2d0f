pub mod form;
pub mod handler;

pub use crate::domain::model::{IncomingResult, OutgoingPayload, Outcome, StatusPolicy, SubmitEvent};
pub use crate::domain::ports::{ConfigProvider, Exchange, MessageInput, ResponseView};
pub use crate::utils::error::Result;
