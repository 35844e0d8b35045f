// tably-api: async client for the remote reservation feed.

pub mod error;
pub mod feed;
pub mod models;
pub mod transport;

pub use error::Error;
pub use feed::FeedClient;
pub use models::{CustomerRecord, FeedEnvelope, ReservationRecord};
pub use transport::TransportConfig;
