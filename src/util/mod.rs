pub mod fs;
pub mod parse;
