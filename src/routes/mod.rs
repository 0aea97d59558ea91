pub mod album;
pub mod artist;
mod health_checks;
mod home;

pub use health_checks::*;
pub use home::*;
