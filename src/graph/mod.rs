//! In-memory graph construction: vertex ids, undirected edges and the session owning both.

pub mod edges;
pub mod registry;
pub mod session;

pub use edges::{Edge, EdgeSet};
pub use registry::{IdentifierRegistry, RegistryError};
pub use session::GraphSession;
