//! Parser layer for loading delimited list files

mod csv;
mod encoding;

pub use self::csv::CsvParser;
pub use self::encoding::decode;
