// ============================================================
// TABULAR DECODER
// ============================================================
// Decode uploaded spreadsheet exports into a raw string grid

use csv::{ReaderBuilder, WriterBuilder};

use crate::domain::error::{AppError, Result};
use crate::domain::import::{AnalysisConfig, RawGrid};

/// Decoder for delimited text with RFC4180-style quoting.
pub struct TabularDecoder {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Probe the content for the real delimiter before decoding
    detect_delimiter: bool,

    /// Lines sampled when probing
    sample_lines: usize,
}

impl Default for TabularDecoder {
    fn default() -> Self {
        Self {
            delimiter: b',',
            detect_delimiter: true,
            sample_lines: 10,
        }
    }
}

impl TabularDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            delimiter: b',',
            detect_delimiter: config.detect_delimiter,
            sample_lines: config.delimiter_sample_lines,
        }
    }

    /// Set a fixed delimiter and skip detection
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self.detect_delimiter = false;
        self
    }

    /// Decode raw upload bytes: UTF-8 first, Windows-1252 for legacy
    /// exports, lossy as the last resort. Never fails on encoding.
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<RawGrid> {
        let text = decode_text(bytes);
        self.decode(&text)
    }

    /// Decode text into a `RawGrid`.
    ///
    /// Quoted fields may contain delimiters, line breaks and doubled-quote
    /// escapes; an unterminated quote consumes to end of input rather than
    /// failing. Carriage returns are stripped, trailing fully-blank rows
    /// dropped. Empty input is the only decode failure.
    pub fn decode(&self, content: &str) -> Result<RawGrid> {
        if content.trim().is_empty() {
            return Err(AppError::DecodeError("empty input".to_string()));
        }

        // Line feeds terminate rows; a stray CR never should.
        let content = content.replace('\r', "");

        let delimiter = if self.detect_delimiter {
            detect_delimiter(&content, self.sample_lines)
        } else {
            self.delimiter
        };

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let mut rows: Vec<Vec<String>> = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| {
                AppError::DecodeError(format!("Failed to decode row {}: {}", rows.len() + 1, e))
            })?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        while rows
            .last()
            .map(|row| row.iter().all(|cell| cell.trim().is_empty()))
            .unwrap_or(false)
        {
            rows.pop();
        }

        if rows.is_empty() {
            return Err(AppError::DecodeError("empty input".to_string()));
        }

        Ok(RawGrid::new(rows))
    }
}

/// Decode upload bytes to text. Strips a UTF-8 BOM when present.
pub fn decode_text(bytes: &[u8]) -> String {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (decoded, _, had_errors) = encoding_rs::WINDOWS_1252.decode(bytes);
            if had_errors {
                String::from_utf8_lossy(bytes).to_string()
            } else {
                decoded.into_owned()
            }
        }
    };
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// Detect delimiter from content (comma, semicolon, tab, pipe).
/// Scored by per-line count consistency and frequency; comma wins ties.
pub fn detect_delimiter(content: &str, sample_lines: usize) -> u8 {
    let candidates = [b',', b';', b'\t', b'|'];

    let mut best_delimiter = b',';
    let mut best_score = 0.0f32;

    let lines: Vec<_> = content.lines().take(sample_lines).collect();
    if lines.is_empty() {
        return best_delimiter;
    }

    for &delimiter in &candidates {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| line.bytes().filter(|&b| b == delimiter).count())
            .collect();

        let avg = counts.iter().sum::<usize>() as f32 / counts.len() as f32;
        let variance = counts
            .iter()
            .map(|&c| (c as f32 - avg).powi(2))
            .sum::<f32>()
            / counts.len() as f32;

        let score = avg / (1.0 + variance.sqrt());
        if score > best_score {
            best_score = score;
            best_delimiter = delimiter;
        }
    }

    best_delimiter
}

/// Re-serialize a grid with the same delimiter/quoting convention. Fields
/// are quoted only when they need it; embedded quotes are doubled.
pub fn serialize_grid(grid: &RawGrid, delimiter: u8) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    for row in &grid.rows {
        writer
            .write_record(row)
            .map_err(|e| AppError::Internal(format!("Failed to serialize grid: {}", e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("Failed to flush grid writer: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| AppError::Internal(format!("Serialized grid is not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(content: &str) -> RawGrid {
        TabularDecoder::new().decode(content).unwrap()
    }

    #[test]
    fn test_decode_simple_grid() {
        let grid = decode("Job No,Skip Size\nJ100,8yd\nJ101,6yd");
        assert_eq!(grid.rows.len(), 3);
        assert_eq!(grid.rows[0], vec!["Job No", "Skip Size"]);
        assert_eq!(grid.rows[2], vec!["J101", "6yd"]);
    }

    #[test]
    fn test_quoted_field_with_comma_and_doubled_quote() {
        let grid = decode("Company\n\"Smith, \"\"Big\"\" Ltd\"");
        assert_eq!(grid.rows[1][0], "Smith, \"Big\" Ltd");
        assert_eq!(grid.rows[1].len(), 1);
    }

    #[test]
    fn test_quoted_field_with_embedded_newline() {
        let grid = decode("Notes\n\"line one\nline two\"\nafter");
        assert_eq!(grid.rows.len(), 3);
        assert_eq!(grid.rows[1][0], "line one\nline two");
        assert_eq!(grid.rows[2][0], "after");
    }

    #[test]
    fn test_carriage_returns_are_stripped() {
        let grid = decode("A,B\r\n1,2\r\n");
        assert_eq!(grid.rows.len(), 2);
        assert_eq!(grid.rows[1], vec!["1", "2"]);
    }

    #[test]
    fn test_trailing_blank_rows_dropped() {
        let grid = decode("A,B\n1,2\n,\n   ,\n");
        assert_eq!(grid.rows.len(), 2);
    }

    #[test]
    fn test_empty_input_is_a_decode_error() {
        assert!(TabularDecoder::new().decode("").is_err());
        assert!(TabularDecoder::new().decode("  \n \n").is_err());
        assert!(TabularDecoder::new().decode_bytes(b"").is_err());
    }

    #[test]
    fn test_unterminated_quote_consumes_to_end() {
        let grid = decode("A\n\"open,never closed\nstill the same cell");
        assert_eq!(grid.rows.len(), 2);
        assert_eq!(grid.rows[1][0], "open,never closed\nstill the same cell");
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("a,b,c\nd,e,f", 10), b',');
        assert_eq!(detect_delimiter("a;b;c\nd;e;f", 10), b';');
        assert_eq!(detect_delimiter("a|b|c\nd|e|f", 10), b'|');
    }

    #[test]
    fn test_semicolon_export_decodes_via_detection() {
        let grid = decode("Job No;Skip Size\nJ100;8yd");
        assert_eq!(grid.rows[1], vec!["J100", "8yd"]);
    }

    #[test]
    fn test_windows_1252_fallback() {
        // 0xA3 is the pound sign in Windows-1252 and invalid UTF-8.
        let grid = TabularDecoder::new()
            .decode_bytes(b"Total\n\xA350.00")
            .unwrap();
        assert_eq!(grid.rows[1][0], "\u{a3}50.00");
    }

    #[test]
    fn test_bom_is_stripped_from_first_header() {
        let grid = TabularDecoder::new()
            .decode_bytes("\u{feff}Job No,Size\nJ1,8yd".as_bytes())
            .unwrap();
        assert_eq!(grid.rows[0][0], "Job No");
    }

    #[test]
    fn test_round_trip_preserves_cell_values() {
        let original = "Name,Notes\n\"Smith, \"\"Big\"\" Ltd\",\"two\nlines\"\nplain,cell\n";
        let decoder = TabularDecoder::new().with_delimiter(b',');
        let grid = decoder.decode(original).unwrap();
        let serialized = serialize_grid(&grid, b',').unwrap();
        let reparsed = decoder.decode(&serialized).unwrap();
        assert_eq!(grid.rows, reparsed.rows);
    }
}
