pub mod compression;
pub mod csv;
