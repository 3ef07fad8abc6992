pub mod body;
pub mod cli;
pub mod error;
pub mod parser;
pub mod schema;
pub mod writer;

pub use body::CelestialBody;
pub use cli::{Cli, Commands};
pub use error::{LoadError, Result};
pub use parser::Coercion;
pub use writer::{load_catalog, Catalog, LoadOptions, LoadSummary};
