// Permissive delimited-text parser for provider exports.
//
// Provider CSVs are frequently sloppy (stray blank lines, unterminated
// quotes, mixed line endings), so the parser never rejects input: worst
// case it over-captures trailing content into one field.

use crate::model::Table;

// ---------------------------------------------------------------------------
// Delimiter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    /// Detect the field delimiter with one global scan: tab wins when a tab
    /// exists and either no comma exists or the first tab precedes the first
    /// comma; comma otherwise.
    pub fn detect(text: &str) -> Self {
        match (text.find('\t'), text.find(',')) {
            (Some(_), None) => Self::Tab,
            (Some(tab), Some(comma)) if tab < comma => Self::Tab,
            _ => Self::Comma,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::Comma => ',',
            Self::Tab => '\t',
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Comma => write!(f, "comma"),
            Self::Tab => write!(f, "tab"),
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse delimited text into positional rows, auto-detecting the delimiter.
pub fn parse(text: &str) -> Vec<Vec<String>> {
    parse_with_delimiter(text, Delimiter::detect(text))
}

/// Parse delimited text with an explicit delimiter.
///
/// Quoting rules: a double quote toggles quoted mode; `""` inside quotes is
/// a literal quote; inside quotes the delimiter and newlines are content.
/// An unterminated quote swallows the rest of the input, which is then
/// flushed as the final field. Fields are whitespace-trimmed after
/// unescaping. Blank lines with no accumulated content are dropped.
pub fn parse_with_delimiter(text: &str, delimiter: Delimiter) -> Vec<Vec<String>> {
    let delim = delimiter.as_char();
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut inside_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if inside_quotes && chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    inside_quotes = !inside_quotes;
                }
            }
            c if c == delim && !inside_quotes => {
                row.push(field.trim().to_string());
                field.clear();
            }
            '\n' | '\r' if !inside_quotes => {
                if !field.is_empty() || !row.is_empty() {
                    row.push(field.trim().to_string());
                    field.clear();
                    rows.push(std::mem::take(&mut row));
                }
                // \r\n is one terminator
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            _ => field.push(ch),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field.trim().to_string());
        rows.push(row);
    }

    rows
}

/// Parse text straight into a [`Table`]: first row is the header row.
/// `None` means the input produced no rows at all ("no headers found").
pub fn parse_table(text: &str) -> Option<Table> {
    Table::from_rows(parse(text))
}
