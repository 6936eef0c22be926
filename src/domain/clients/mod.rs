// Client ports (contracts the gateway forwards through)

pub mod book_client;

pub use book_client::{BookClient, ClientError, ClientResult, DynBookClient};
