//! XML utilities for results-file preprocessing
//!
//! Event software exports are not always clean XML:
//! - A UTF-8 byte-order mark ahead of the declaration
//! - Stray control characters embedded in name fields
//! - Trailing NUL padding when the export was written from a fixed buffer
//!
//! This module provides low-level input cleaning without parsing.

use crate::{ReportError, Result};

/// Preprocess raw results XML before handing it to the parser
///
/// Strips a leading UTF-8 BOM, removes control characters that are not
/// legal in XML 1.0 (everything below 0x20 except `\n`, `\r`, `\t`), and
/// rejects input that is empty once cleaned.
///
/// Returns the cleaned XML string ready for parsing.
pub fn preprocess_results_xml(xml: &str) -> Result<String> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);

    let mut result = String::with_capacity(xml.len());
    for ch in xml.chars() {
        match ch {
            '\x00'..='\x08' | '\x0B'..='\x0C' | '\x0E'..='\x1F' => continue,
            _ => result.push(ch),
        }
    }

    if result.trim().is_empty() {
        return Err(ReportError::invalid_input("XML is empty after preprocessing"));
    }

    Ok(result)
}

/// Extract XML text from a raw byte buffer
///
/// Handles NUL-terminated buffers and validates UTF-8 encoding. Returns the
/// raw XML string without preprocessing.
pub fn extract_xml_from_bytes(data: &[u8]) -> Result<String> {
    let len = data.iter().position(|&b| b == 0).unwrap_or(data.len());

    let xml = std::str::from_utf8(&data[..len])
        .map_err(|e| ReportError::invalid_input(format!("XML UTF-8 conversion: {e}")))?;

    Ok(xml.to_string())
}
