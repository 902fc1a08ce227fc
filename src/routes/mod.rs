mod health_check;
mod not_found;

pub use health_check::*;
pub use not_found::*;
