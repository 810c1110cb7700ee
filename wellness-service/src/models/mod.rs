pub mod category;
pub mod message;

pub use category::{Category, UnknownCategory};
pub use message::MessageResponse;
