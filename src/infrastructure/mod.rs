//! Infrastructure layer - adapters moving text between files and the use cases

pub mod io;
