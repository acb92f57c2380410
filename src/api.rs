mod context;
mod opt;

pub use context::*;
pub use opt::*;
