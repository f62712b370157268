//! Agent session and the top-level response dispatcher.

pub mod dispatcher;
pub mod session;

pub use dispatcher::ResponseDispatcher;
pub use session::AgentSession;
