mod context;
mod page;
mod resolver;

pub use context::*;
pub use page::*;
pub use resolver::*;
