//! Command implementations

mod check;
mod grammars;
mod highlight;

pub use check::check;
pub use grammars::grammars;
pub use highlight::highlight;
