/// Error codes with category prefix
///
/// Categories:
/// - IO: File system operations
/// - XML: Export document parsing
/// - CFG: Configuration parsing/validation
/// - VAL: Input validation errors
/// - SER: Output serialization
/// - INT: Unexpected internal errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // I/O errors (IO001-IO099)
    /// File not found
    Io001,
    /// Permission denied
    Io002,

    // Document errors (XML001-XML099)
    /// Export is not well-formed XML
    Xml001,

    // Config errors (CFG001-CFG099)
    /// Invalid config format
    Cfg001,

    // Validation errors (VAL001-VAL099)
    /// Invalid argument
    Val001,

    // Serialization errors (SER001-SER099)
    /// Failed to render output
    Ser001,

    // Internal errors (INT001-INT099)
    /// Unexpected internal error
    Int001,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "XML001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "IO001",
            ErrorCode::Io002 => "IO002",
            ErrorCode::Xml001 => "XML001",
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Val001 => "VAL001",
            ErrorCode::Ser001 => "SER001",
            ErrorCode::Int001 => "INT001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "The specified file or directory was not found",
            ErrorCode::Io002 => "Permission denied when accessing the file or directory",
            ErrorCode::Xml001 => "The export file is not a well-formed XML document",
            ErrorCode::Cfg001 => "The configuration file has an invalid format",
            ErrorCode::Val001 => "An invalid argument was provided",
            ErrorCode::Ser001 => "The result could not be rendered in the requested format",
            ErrorCode::Int001 => "An unexpected internal error occurred",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "1. Verify the file path is correct\n2. Check if the file was moved or deleted\n3. Ensure the path exists",
            ErrorCode::Io002 => "1. Check file/directory permissions\n2. Run with appropriate privileges\n3. Verify ownership of the resource",
            ErrorCode::Xml001 => "1. Re-export the site from WordPress (Tools > Export)\n2. Check that the download was not truncated\n3. Open the file in an XML validator to locate the position",
            ErrorCode::Cfg001 => "1. Check the configuration file syntax\n2. Compare with the documented TOML layout\n3. Remove unknown keys",
            ErrorCode::Val001 => "1. Check the argument format\n2. Refer to the command help\n3. Use 'wxr-import --help' for usage information",
            ErrorCode::Ser001 => "1. Try another --format\n2. Report the issue with the export file if it persists",
            ErrorCode::Int001 => "1. Try the operation again\n2. Re-run with -vv for debug logs\n3. Report the issue with debug logs",
        }
    }
}
