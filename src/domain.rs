// Domain module
// Pure parsing and formatting logic with no process or network access

pub mod columns;
pub mod reference;
pub mod remote;
