//! Error types for warehousedb.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in warehousedb.
///
/// Catalog operations themselves never fail: a missing id or an oversized
/// purchase is reported through an outcome value instead. Errors come from
/// the edges: reading command scripts, direct record mutation, and
/// out-of-range bucket lookups.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading a script or writing a snapshot.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A script token could not be interpreted.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A script line starts with a verb the driver does not know.
    #[error("line {line}: unknown command '{verb}'")]
    UnknownCommand { line: usize, verb: String },

    /// The script ended before all announced commands were read.
    #[error("unexpected end of script, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    /// A stock withdrawal larger than the stock on hand.
    #[error("product {id}: requested {requested} but only {available} in stock")]
    InsufficientStock {
        id: u32,
        requested: u64,
        available: u64,
    },

    /// Bucket index outside `0..BUCKET_COUNT`.
    #[error("bucket {0} out of range")]
    BucketOutOfRange(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::BucketOutOfRange(42);
        assert_eq!(format!("{}", err), "bucket 42 out of range");

        let err = Error::UnknownCommand {
            line: 3,
            verb: "sell".to_string(),
        };
        assert_eq!(format!("{}", err), "line 3: unknown command 'sell'");

        let err = Error::InsufficientStock {
            id: 7,
            requested: 100,
            available: 6,
        };
        assert_eq!(
            format!("{}", err),
            "product 7: requested 100 but only 6 in stock"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
