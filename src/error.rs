use thiserror::Error;

/// Classifies conversion errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Source record did not follow the `;`-delimited grammar
    MalformedLine,
    /// Rule builder met a domain type it does not emit
    UnknownDomainType,
    /// Dedup trie was asked to insert an empty domain
    EmptyDomain,
    /// Unsupported source charset label
    UnknownEncoding,
    /// I/O error while reading the dump or writing artifacts
    Io,
    /// Protobuf encoding or decoding failure
    Codec,
    /// Written geosite file does not hold the expected entries
    Verify,
}

/// Geosite conversion error types
#[derive(Error, Debug)]
pub enum GeositeError {
    #[error("Malformed line: {0}")]
    MalformedLine(String),

    #[error("Unexpected domain type: {0}")]
    UnknownDomainType(String),

    #[error("Empty domain")]
    EmptyDomain,

    #[error("Could not parse rule at line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<GeositeError>,
    },

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("Geosite file has {found} entries, expected {expected}")]
    EntryCountMismatch { expected: usize, found: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Encode error: {0}")]
    EncodeError(#[from] prost::EncodeError),

    #[error("Decode error: {0}")]
    DecodeError(#[from] prost::DecodeError),
}

impl GeositeError {
    /// Attach a 1-based source line number to a per-line failure.
    pub fn at_line(line: usize, source: GeositeError) -> Self {
        GeositeError::AtLine {
            line,
            source: Box::new(source),
        }
    }

    /// Error kind, looking through any line-number wrapper.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeositeError::MalformedLine(_) => ErrorKind::MalformedLine,
            GeositeError::UnknownDomainType(_) => ErrorKind::UnknownDomainType,
            GeositeError::EmptyDomain => ErrorKind::EmptyDomain,
            GeositeError::AtLine { source, .. } => source.kind(),
            GeositeError::UnknownEncoding(_) => ErrorKind::UnknownEncoding,
            GeositeError::EntryCountMismatch { .. } => ErrorKind::Verify,
            GeositeError::IoError(_) => ErrorKind::Io,
            GeositeError::EncodeError(_) | GeositeError::DecodeError(_) => ErrorKind::Codec,
        }
    }

    /// Source line the error originated from, if known.
    pub fn line(&self) -> Option<usize> {
        match self {
            GeositeError::AtLine { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeositeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_is_matchable() {
        let err = GeositeError::MalformedLine("line is missing delimiters".into());
        assert_eq!(err.kind(), ErrorKind::MalformedLine);
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_at_line_keeps_inner_kind() {
        let err = GeositeError::at_line(
            7,
            GeositeError::MalformedLine("line is missing delimiters".into()),
        );
        assert_eq!(err.kind(), ErrorKind::MalformedLine);
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn test_at_line_display_includes_line_and_message() {
        let err = GeositeError::at_line(3, GeositeError::UnknownDomainType("Plain".into()));
        let display = format!("{}", err);
        assert!(display.contains("line 3"), "got: {}", display);
        assert!(display.contains("Plain"), "got: {}", display);
    }

    #[test]
    fn test_entry_count_mismatch_display() {
        let err = GeositeError::EntryCountMismatch {
            expected: 1,
            found: 2,
        };
        assert_eq!(err.kind(), ErrorKind::Verify);
        assert_eq!(format!("{}", err), "Geosite file has 2 entries, expected 1");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "dump.csv");
        let err: GeositeError = io.into();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
