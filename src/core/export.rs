// BayLog - core/export.rs
//
// CSV and JSON export of wash records, for all bays or a single bay.
// Core layer: writes to any Write trait object.
//
// CSV fields are quoted by the csv crate whenever they contain a delimiter,
// quote, or newline, so free-text plates and operators cannot shift columns.

use crate::core::model::{Bay, WashRecord};
use crate::core::store::BayLogStore;
use crate::util::constants::{ALL_BAYS_FILE_STEM, CSV_HEADER};
use crate::util::error::ExportError;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Which records an export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    /// Every bay, 1 through 9.
    AllBays,
    /// A single bay.
    Bay(Bay),
}

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Label for menus and file dialog filters.
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }
}

/// Suggested file name, e.g. `bays-all.csv` or `bay-3.json`.
pub fn default_file_name(scope: ExportScope, format: ExportFormat) -> String {
    match scope {
        ExportScope::AllBays => format!("{ALL_BAYS_FILE_STEM}.{}", format.extension()),
        ExportScope::Bay(bay) => format!("bay-{}.{}", bay.number(), format.extension()),
    }
}

/// Records covered by `scope`, bay order then insertion order.
pub fn records_in_scope(store: &BayLogStore, scope: ExportScope) -> Vec<&WashRecord> {
    match scope {
        ExportScope::AllBays => store.iter_all().collect(),
        ExportScope::Bay(bay) => store.records(bay).iter().collect(),
    }
}

/// Export records to CSV.
///
/// Writes: Bay, Plate, Brand, Color, Type, Date, Operators.
/// Returns the number of data rows written (header excluded).
pub fn export_csv<W: Write>(
    store: &BayLogStore,
    scope: ExportScope,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |e: csv::Error| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER).map_err(csv_err)?;

    let mut count = 0;
    for record in records_in_scope(store, scope) {
        let bay = record.bay.number().to_string();
        let date = record.date_string();
        csv_writer
            .write_record([
                bay.as_str(),
                record.plate.as_str(),
                record.brand.as_str(),
                record.color.as_str(),
                record.wash_type.as_str(),
                date.as_str(),
                record.operators.as_str(),
            ])
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(rows = count, path = %export_path.display(), "CSV export written");
    Ok(count)
}

/// Export records to JSON format (array of objects).
pub fn export_json<W: Write>(
    store: &BayLogStore,
    scope: ExportScope,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let records = records_in_scope(store, scope);
    serde_json::to_writer_pretty(writer, &records).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(records.len())
}

/// Render a CSV export to a string.
pub fn csv_string(store: &BayLogStore, scope: ExportScope) -> Result<String, ExportError> {
    let path = PathBuf::from(default_file_name(scope, ExportFormat::Csv));
    let mut buf = Vec::new();
    export_csv(store, scope, &mut buf, &path)?;
    // csv only ever writes the UTF-8 it was given.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{CategoryChoice, NewWash};
    use chrono::NaiveDate;

    fn store_with(rows: &[(i64, &str, &str)]) -> BayLogStore {
        let mut store = BayLogStore::new();
        for (bay, plate, operators) in rows {
            store
                .add(NewWash {
                    bay: Bay::new(*bay).unwrap(),
                    plate: plate.to_string(),
                    brand: CategoryChoice::pick("Toyota"),
                    color: CategoryChoice::pick("White"),
                    wash_type: CategoryChoice::pick("Valet wash"),
                    date: NaiveDate::from_ymd_opt(2025, 6, 1),
                    operators: operators.to_string(),
                })
                .unwrap();
        }
        store
    }

    #[test]
    fn test_csv_export_all_bays() {
        let store = store_with(&[(2, "B1", "Ann"), (1, "A1", "Bo"), (9, "C1", "Cy")]);
        let mut buf = Vec::new();
        let count =
            export_csv(&store, ExportScope::AllBays, &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 3);

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Bay,Plate,Brand,Color,Type,Date,Operators");
        assert_eq!(lines[1], "1,A1,Toyota,White,Valet wash,2025-06-01,Bo");
        assert!(lines[2].starts_with("2,B1,"));
        assert!(lines[3].starts_with("9,C1,"));
    }

    #[test]
    fn test_csv_export_single_bay() {
        let store = store_with(&[(2, "B1", "Ann"), (3, "X1", "Bo"), (2, "B2", "Cy")]);
        let bay = Bay::new(2).unwrap();
        let output = csv_string(&store, ExportScope::Bay(bay)).unwrap();
        assert_eq!(output.lines().count(), 3);
        assert!(!output.contains("X1"));
    }

    #[test]
    fn test_csv_quotes_embedded_commas_and_quotes() {
        let store = store_with(&[(1, "A1", "John,Doe \"JD\"")]);
        let output = csv_string(&store, ExportScope::AllBays).unwrap();
        assert!(output.contains("\"John,Doe \"\"JD\"\"\""));

        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(row.len(), 7);
        assert_eq!(&row[6], "John,Doe \"JD\"");
    }

    #[test]
    fn test_csv_export_empty_store_has_header_only() {
        let output = csv_string(&BayLogStore::new(), ExportScope::AllBays).unwrap();
        assert_eq!(output, "Bay,Plate,Brand,Color,Type,Date,Operators\n");
    }

    #[test]
    fn test_json_export() {
        let store = store_with(&[(4, "J1", "Ann")]);
        let mut buf = Vec::new();
        let count = export_json(
            &store,
            ExportScope::AllBays,
            &mut buf,
            &PathBuf::from("out.json"),
        )
        .unwrap();
        assert_eq!(count, 1);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["plate"], "J1");
        assert_eq!(value[0]["bay"], 4);
    }

    #[test]
    fn test_default_file_names() {
        let bay = Bay::new(3).unwrap();
        assert_eq!(
            default_file_name(ExportScope::AllBays, ExportFormat::Csv),
            "bays-all.csv"
        );
        assert_eq!(
            default_file_name(ExportScope::Bay(bay), ExportFormat::Json),
            "bay-3.json"
        );
    }
}
