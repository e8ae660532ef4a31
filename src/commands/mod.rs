//! Command implementations

mod check;
mod scan;

pub use check::check;
pub use scan::scan;
