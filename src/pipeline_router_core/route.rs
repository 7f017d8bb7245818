mod meta;
mod resolved;
mod store;

pub use meta::*;
pub use resolved::*;
pub use store::*;
