pub mod server;

pub use server::ScrubServer;
