//! Dialect, type and column-role inference for delimited bank statement exports.
//!
//! ```
//! use bankimport::{parse, ParseOptions};
//!
//! let data = "Date,Amount,Balance,Description\n\
//!             2023-01-05,-12.50,100.00,Coffee Shop\n\
//!             2023-01-06,50.00,150.00,Salary";
//! let result = parse(data, &ParseOptions::default()).unwrap();
//! assert_eq!(result.column_guesses.amount, Some(1));
//! ```

pub mod config;
pub mod error;
pub mod guess;
pub mod process;

pub use config::{FieldCountPolicy, ParseOptions};
pub use error::ImportError;
pub use guess::{guess_columns, ColumnGuesses};
pub use process::convert::{coerce, coerce_field, parse_number};
pub use process::date_parser::{DateParser, FreeformDateParser};
pub use process::normalize::normalize;
pub use process::schema::{column_types, has_header};
pub use process::separator::detect_separator;
pub use process::split::{split_lines, tokenize};
pub use process::types::{TypeTag, TypedValue};
pub use process::{parse, parse_batch, parse_with, ParseResult};
