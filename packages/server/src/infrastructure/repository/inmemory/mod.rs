pub mod registry;
pub mod session;

pub use registry::InMemoryUserRegistry;
pub use session::InMemorySessionStore;
