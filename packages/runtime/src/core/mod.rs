pub mod runtime;
pub mod scope;

pub mod io;
