pub mod profile;
pub mod stat_line;

pub use profile::*;
pub use stat_line::*;
