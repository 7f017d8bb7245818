mod pipeline_router_core;

pub use pipeline_router_core::*;
