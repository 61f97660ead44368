//! JSON I/O handling for CLI
//!
//! - Input: single JSON document via stdin
//! - Output: single JSON value via stdout
//! - UTF-8 only

use std::io::{self, Read, Write};

use serde::Serialize;

use super::errors::{CliError, CliResult};

/// Read the whole of stdin as one request
pub fn read_request() -> CliResult<String> {
    read_request_from(&mut io::stdin().lock())
}

pub fn read_request_from<R: Read>(reader: &mut R) -> CliResult<String> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;

    if input.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    Ok(input)
}

/// Write a JSON value to stdout
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    write_json_to(&mut io::stdout().lock(), value)
}

pub fn write_json_to<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_input_rejected() {
        let mut input: &[u8] = b"  \n";
        let err = read_request_from(&mut input).unwrap_err();
        assert_eq!(err.message(), "Empty input");
    }

    #[test]
    fn test_reads_multiline_document() {
        let mut input: &[u8] = b"{\n  \"Age\": 45\n}\n";
        let text = read_request_from(&mut input).unwrap();
        assert!(text.contains("\"Age\""));
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json_to(&mut out, &json!({"status": "ok"})).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(serde_json::from_str::<serde_json::Value>(&text).unwrap()["status"], "ok");
    }
}
