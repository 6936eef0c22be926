// Client implementations (adapters for the domain client ports)

pub mod upstream_book_client;

pub use upstream_book_client::UpstreamBookClient;
