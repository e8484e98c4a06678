pub mod elements;
pub mod diagnostics;
