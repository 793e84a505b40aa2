pub mod cursor;
pub mod error;
pub mod parser;
pub mod value;

pub use cursor::{Cursor, ReadCursor, StrCursor};
pub use error::ParseError;
pub use parser::{parse_cursor, parse_reader, parse_str};
pub use value::Value;
