// Infrastructure layer module
// Contains outbound HTTP adapters for external collaborators

pub mod clients;
