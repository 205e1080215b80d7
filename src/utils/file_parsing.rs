use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("no data rows found")]
    Empty,

    #[error("label column {column} out of range for {width} columns")]
    LabelColumnOutOfRange { column: usize, width: usize },
}

/// How a labeled CSV file is laid out.
#[derive(Debug, Clone, Copy)]
pub struct CsvOptions {
    /// Column holding the class label; `None` means the last column.
    pub label_column: Option<usize>,
    pub has_header: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            label_column: None,
            has_header: true,
        }
    }
}

/// Numeric feature rows plus index-aligned string labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledData {
    pub feature_names: Vec<String>,
    pub rows: Vec<Vec<f64>>,
    pub labels: Vec<String>,
}

#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 {
        let first = b[0];
        let last = b[b.len() - 1];
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Splits on commas that are not inside single or double quotes. Quotes are
/// kept in the output; fields are trimmed.
pub fn split_csv_preserving_quotes(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes: Option<char> = None;

    for ch in line.chars() {
        match in_quotes {
            Some(q) => {
                if ch == q {
                    in_quotes = None;
                }
                cur.push(ch);
            }
            None => {
                if ch == '"' || ch == '\'' {
                    in_quotes = Some(ch);
                    cur.push(ch);
                } else if ch == ',' {
                    out.push(cur.trim().to_string());
                    cur.clear();
                } else {
                    cur.push(ch);
                }
            }
        }
    }
    out.push(cur.trim().to_string());
    out
}

pub fn read_labeled_csv(path: &Path, options: CsvOptions) -> Result<LabeledData, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_labeled_csv(&text, options)
}

/// Parses CSV text into features and labels. Blank lines and lines starting
/// with `%` or `#` are skipped.
pub fn parse_labeled_csv(text: &str, options: CsvOptions) -> Result<LabeledData, LoadError> {
    let mut records = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !is_skipped(line))
        .map(|(n, line)| {
            let fields: Vec<String> = split_csv_preserving_quotes(line)
                .iter()
                .map(|f| strip_surrounding_quotes(f).to_string())
                .collect();
            (n, fields)
        })
        .peekable();

    let width = records.peek().map(|(_, f)| f.len()).ok_or(LoadError::Empty)?;
    let label_column = options.label_column.unwrap_or(width.saturating_sub(1));
    if label_column >= width {
        return Err(LoadError::LabelColumnOutOfRange {
            column: label_column,
            width,
        });
    }
    if width < 2 {
        return Err(LoadError::Parse {
            line: records.peek().map_or(0, |(n, _)| *n),
            message: "need at least one feature column and a label column".into(),
        });
    }

    let feature_names = if options.has_header {
        let (_, header) = records.next().ok_or(LoadError::Empty)?;
        without_column(header, label_column)
    } else {
        (0..width - 1).map(|i| format!("f{i}")).collect()
    };

    let mut rows = Vec::new();
    let mut labels = Vec::new();
    for (line, mut fields) in records {
        if fields.len() != width {
            return Err(LoadError::Parse {
                line,
                message: format!("expected {width} fields, found {}", fields.len()),
            });
        }
        labels.push(fields.remove(label_column));

        let row = fields
            .iter()
            .enumerate()
            .map(|(j, field)| {
                field.parse::<f64>().map_err(|_| LoadError::Parse {
                    line,
                    message: format!("feature {j}: cannot parse '{field}' as a number"),
                })
            })
            .collect::<Result<Vec<f64>, LoadError>>()?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(LabeledData {
        feature_names,
        rows,
        labels,
    })
}

fn is_skipped(line: &str) -> bool {
    line.is_empty() || line.starts_with('%') || line.starts_with('#')
}

fn without_column(mut fields: Vec<String>, column: usize) -> Vec<String> {
    fields.remove(column);
    fields
}
