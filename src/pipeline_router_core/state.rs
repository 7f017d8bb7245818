mod navigation;

pub use navigation::*;
