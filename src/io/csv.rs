use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::core::error::{Error, Result};
use crate::dataframe::DataFrame;
use crate::series::Series;

/// Read a DataFrame from a CSV file
pub fn read_csv<P: AsRef<Path>>(path: P, has_header: bool) -> Result<DataFrame> {
    let file = File::open(path.as_ref())?;
    log::debug!("reading CSV from {}", path.as_ref().display());
    read_csv_from_reader(file, has_header)
}

/// Read a DataFrame from any CSV byte source (an uploaded file body, a test
/// buffer, ...)
pub fn read_csv_from_reader<R: Read>(reader: R, has_header: bool) -> Result<DataFrame> {
    // Rows may be shorter than the header; the missing cells become empty strings
    let mut rdr = ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let headers: Vec<String> = if has_header {
        let header = rdr.headers()?.clone();
        dedup_headers(&header)
    } else {
        for result in rdr.records() {
            records.push(result?);
        }
        let width = records.iter().map(StringRecord::len).max().unwrap_or(0);
        (0..width).map(|i| format!("column_{}", i)).collect()
    };

    if headers.is_empty() {
        return Err(Error::InvalidInput(
            "No columns to parse from file".to_string(),
        ));
    }

    if has_header {
        for result in rdr.records() {
            records.push(result?);
        }
    }

    let mut columns: Vec<Vec<String>> = vec![Vec::with_capacity(records.len()); headers.len()];
    for (line, record) in records.iter().enumerate() {
        if record.len() > headers.len() {
            return Err(Error::InvalidInput(format!(
                "Expected {} fields in line {}, saw {}",
                headers.len(),
                line + if has_header { 2 } else { 1 },
                record.len()
            )));
        }
        for (i, values) in columns.iter_mut().enumerate() {
            values.push(record.get(i).unwrap_or_default().to_string());
        }
    }

    let series = headers
        .into_iter()
        .zip(columns)
        .map(|(name, values)| Series::new(values, name))
        .collect();
    DataFrame::from_columns(series)
}

/// Write a DataFrame to a CSV file
pub fn write_csv<P: AsRef<Path>>(df: &DataFrame, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv_to_writer(df, file)?;
    log::debug!(
        "wrote {} rows to {}",
        df.row_count(),
        path.as_ref().display()
    );
    Ok(())
}

/// Serialize a DataFrame as CSV text, header first, without an index column
pub fn to_csv_string(df: &DataFrame) -> Result<String> {
    let mut buf = Vec::new();
    write_csv_to_writer(df, &mut buf)?;
    String::from_utf8(buf).map_err(|e| Error::InvalidInput(format!("CSV is not UTF-8: {}", e)))
}

fn write_csv_to_writer<W: Write>(df: &DataFrame, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(df.column_names())?;
    for row in df.rows() {
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Strip a leading byte order mark and make repeated names unique by
/// suffixing `.1`, `.2`, ...
fn dedup_headers(header: &StringRecord) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(header.len());
    for (i, raw) in header.iter().enumerate() {
        let base = if i == 0 {
            raw.trim_start_matches('\u{feff}')
        } else {
            raw
        };
        let mut name = base.to_string();
        let mut n = 1;
        while !seen.insert(name.clone()) {
            name = format!("{}.{}", base, n);
            n += 1;
        }
        names.push(name);
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_rows_are_padded() {
        let df = read_csv_from_reader("a,b,c\n1,2\n".as_bytes(), true).unwrap();
        assert_eq!(df.row(0).unwrap(), vec!["1", "2", ""]);
    }

    #[test]
    fn test_long_rows_are_rejected() {
        let err = read_csv_from_reader("a,b\n1,2,3\n".as_bytes(), true).unwrap_err();
        assert!(err.to_string().contains("Expected 2 fields in line 2"));
    }

    #[test]
    fn test_empty_source() {
        assert!(matches!(
            read_csv_from_reader("".as_bytes(), true),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_duplicate_headers_and_bom() {
        let df = read_csv_from_reader("\u{feff}x,x,x\n1,2,3\n".as_bytes(), true).unwrap();
        assert_eq!(df.column_names(), vec!["x", "x.1", "x.2"]);
    }

    #[test]
    fn test_headerless() {
        let df = read_csv_from_reader("1,A\n2,B\n".as_bytes(), false).unwrap();
        assert_eq!(df.column_names(), vec!["column_0", "column_1"]);
        assert_eq!(df.row_count(), 2);
    }

    #[test]
    fn test_quoting_survives_serialization() {
        let df = read_csv_from_reader("name,note\nx,\"a, b\"\n".as_bytes(), true).unwrap();
        assert_eq!(to_csv_string(&df).unwrap(), "name,note\nx,\"a, b\"\n");
    }
}
