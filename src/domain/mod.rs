// Domain layer module exports
// Domain is independent of transport and infrastructure concerns

pub mod book;
pub mod clients;
