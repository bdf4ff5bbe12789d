pub mod courier;
pub mod session;

pub use crate::domain::model::{Delivery, DmChannel, QuoteResponse};
pub use crate::domain::ports::{Connector, DirectMessenger};
pub use crate::utils::error::Result;
