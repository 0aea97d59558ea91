mod album;
mod artist;

pub use album::*;
pub use artist::*;
