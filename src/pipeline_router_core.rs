mod config;
mod editor;
mod error;
mod route;
mod router;
mod state;
mod types;

pub use config::*;
pub use editor::*;
pub use error::*;
pub use route::*;
pub use router::*;
pub use state::*;
pub use types::*;
