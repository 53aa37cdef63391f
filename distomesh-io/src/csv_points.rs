//! CSV point extraction
//!
//! Rows are looked up by header name, like a dict-style CSV reader: the first
//! line defines the columns, and each data row is matched against the three
//! configured coordinate columns. A row is skipped (never fatal) when a
//! column is absent, its value is empty after trimming, or the value does not
//! parse as a finite float. Line numbers are 1-based and count the header as
//! line 1, so data rows start at line 2.

use crate::config::ImportConfig;
use crate::error::{ImportError, Result};
use distomesh_core::{Point3d, PointCloud};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::path::Path;

/// The aggregate outcome of scanning one CSV file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportResult {
    /// Valid points, in file order
    pub points: PointCloud,
    /// Line numbers of the data rows that were skipped, in file order
    pub skipped_lines: Vec<u64>,
}

impl ImportResult {
    /// Total number of data rows read, valid and skipped
    pub fn data_row_count(&self) -> usize {
        self.points.len() + self.skipped_lines.len()
    }

    /// Counts and skipped lines, for reporting back to the user
    pub fn report(&self) -> ImportReport {
        ImportReport {
            point_count: self.points.len(),
            data_row_count: self.data_row_count(),
            skipped_lines: self.skipped_lines.clone(),
        }
    }

    /// Human-readable one-line summary of the scan
    pub fn summary(&self) -> String {
        self.report().to_string()
    }
}

/// Summary of a completed import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    pub point_count: usize,
    pub data_row_count: usize,
    pub skipped_lines: Vec<u64>,
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Imported {} points from {} lines.",
            self.point_count, self.data_row_count
        )?;
        if !self.skipped_lines.is_empty() {
            write!(f, " Skipped lines: {:?}", self.skipped_lines)?;
        }
        Ok(())
    }
}

/// Reads named coordinate columns of a CSV file into a point cloud
pub struct CsvPointReader;

impl CsvPointReader {
    /// Scan `path` and extract one point per valid data row
    ///
    /// Fails with [`ImportError::Io`] or [`ImportError::Csv`] if the file
    /// cannot be opened or read, and with [`ImportError::NoValidPoints`] if
    /// the scan completes without producing a single point. Row-level
    /// problems only skip the affected row.
    pub fn read<P: AsRef<Path>>(path: P, config: &ImportConfig) -> Result<ImportResult> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        // Exact, case-sensitive header match, unit suffixes included.
        let headers = reader.headers()?.clone();
        let x_idx = headers.iter().position(|h| h == config.x_column);
        let y_idx = headers.iter().position(|h| h == config.y_column);
        let z_idx = headers.iter().position(|h| h == config.z_column);

        let mut points = PointCloud::new();
        let mut skipped_lines = Vec::new();

        for (row, record) in reader.records().enumerate() {
            // Transport-level failures (I/O mid-scan, undecodable bytes)
            // abort the whole import.
            let record = record?;
            let line = row as u64 + 2;

            match Self::parse_row(&record, x_idx, y_idx, z_idx) {
                Some(point) => points.push(point),
                None => {
                    debug!("skipped line {line}: missing or invalid coordinate - {record:?}");
                    skipped_lines.push(line);
                }
            }
        }

        if points.is_empty() {
            return Err(ImportError::NoValidPoints {
                path: path.to_path_buf(),
            });
        }

        Ok(ImportResult {
            points,
            skipped_lines,
        })
    }

    /// Extract a point from one record, or `None` if any coordinate is bad
    fn parse_row(
        record: &csv::StringRecord,
        x_idx: Option<usize>,
        y_idx: Option<usize>,
        z_idx: Option<usize>,
    ) -> Option<Point3d> {
        let x = Self::parse_field(record, x_idx)?;
        let y = Self::parse_field(record, y_idx)?;
        let z = Self::parse_field(record, z_idx)?;
        Some(Point3d::new(x, y, z))
    }

    fn parse_field(record: &csv::StringRecord, index: Option<usize>) -> Option<f64> {
        let value = record.get(index?)?.trim();
        if value.is_empty() {
            return None;
        }
        value.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const DISTO_HEADER: &str = "X [m],Y [m],Z [m]";

    fn read_temp(name: &str, content: &str) -> Result<ImportResult> {
        fs::write(name, content).unwrap();
        let result = CsvPointReader::read(name, &ImportConfig::default());
        let _ = fs::remove_file(name);
        result
    }

    #[test]
    fn test_all_rows_valid() {
        let content = format!("{DISTO_HEADER}\n1.0,2.0,3.0\n4,5,6\n");
        let result = read_temp("test_all_valid.csv", &content).unwrap();

        assert_eq!(result.points.len(), 2);
        assert_eq!(result.points[0], Point3d::new(1.0, 2.0, 3.0));
        assert_eq!(result.points[1], Point3d::new(4.0, 5.0, 6.0));
        assert!(result.skipped_lines.is_empty());
    }

    #[test]
    fn test_empty_value_skips_row() {
        let content = format!("{DISTO_HEADER}\n1.0,,3.0\n4,5,6\n");
        let result = read_temp("test_empty_value.csv", &content).unwrap();

        assert_eq!(result.points.len(), 1);
        assert_eq!(result.points[0], Point3d::new(4.0, 5.0, 6.0));
        assert_eq!(result.skipped_lines, vec![2]);
    }

    #[test]
    fn test_whitespace_only_value_skips_row() {
        let content = format!("{DISTO_HEADER}\n1.0,   ,3.0\n4,5,6\n");
        let result = read_temp("test_whitespace_value.csv", &content).unwrap();

        assert_eq!(result.points.len(), 1);
        assert_eq!(result.skipped_lines, vec![2]);
    }

    #[test]
    fn test_non_numeric_value_skips_row() {
        let content = format!("{DISTO_HEADER}\n1.0,2.0,3.0\nfoo,5,6\n7,8,9\n");
        let result = read_temp("test_non_numeric.csv", &content).unwrap();

        assert_eq!(result.points.len(), 2);
        assert_eq!(result.skipped_lines, vec![3]);
    }

    #[test]
    fn test_non_finite_value_skips_row() {
        let content = format!("{DISTO_HEADER}\n1.0,2.0,3.0\nnan,5,6\n7,inf,9\n");
        let result = read_temp("test_non_finite.csv", &content).unwrap();

        assert_eq!(result.points.len(), 1);
        assert_eq!(result.skipped_lines, vec![2, 3]);
    }

    #[test]
    fn test_short_row_skips_row() {
        let content = format!("{DISTO_HEADER}\n1.0,2.0\n4,5,6\n");
        let result = read_temp("test_short_row.csv", &content).unwrap();

        assert_eq!(result.points.len(), 1);
        assert_eq!(result.skipped_lines, vec![2]);
    }

    #[test]
    fn test_values_trimmed_before_parse() {
        let content = format!("{DISTO_HEADER}\n 1.5 ,\t2.5,3.5 \n");
        let result = read_temp("test_trimmed.csv", &content).unwrap();

        assert_eq!(result.points[0], Point3d::new(1.5, 2.5, 3.5));
    }

    #[test]
    fn test_extra_malformed_columns_ignored() {
        // Extra columns beyond the three configured ones do not have to parse.
        let content = "X [m],Y [m],Z [m],Note\n1.0,2.0,3.0,corner of wall\n4,5,6,???\n";
        let result = read_temp("test_extra_columns.csv", content).unwrap();

        assert_eq!(result.points.len(), 2);
        assert!(result.skipped_lines.is_empty());
    }

    #[test]
    fn test_missing_configured_column_skips_everything() {
        let config = ImportConfig::default().with_columns("Easting", "Y [m]", "Z [m]");
        let name = "test_missing_column.csv";
        fs::write(name, format!("{DISTO_HEADER}\n1.0,2.0,3.0\n")).unwrap();
        let result = CsvPointReader::read(name, &config);
        let _ = fs::remove_file(name);

        assert!(matches!(result, Err(ImportError::NoValidPoints { .. })));
    }

    #[test]
    fn test_header_only_file_is_no_valid_points() {
        let result = read_temp("test_header_only.csv", &format!("{DISTO_HEADER}\n"));
        assert!(matches!(result, Err(ImportError::NoValidPoints { .. })));
    }

    #[test]
    fn test_empty_file_is_no_valid_points() {
        let result = read_temp("test_empty_file.csv", "");
        assert!(matches!(result, Err(ImportError::NoValidPoints { .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = CsvPointReader::read("test_does_not_exist.csv", &ImportConfig::default());
        assert!(matches!(result, Err(ImportError::Io(_))));
    }

    #[test]
    fn test_count_invariant_and_line_numbers() {
        let content = format!("{DISTO_HEADER}\n1,2,3\nbad,2,3\n4,5,6\n,,\n7,8,9\n");
        let result = read_temp("test_invariant.csv", &content).unwrap();

        assert_eq!(result.data_row_count(), 5);
        assert_eq!(result.points.len() + result.skipped_lines.len(), 5);
        assert_eq!(result.skipped_lines, vec![3, 5]);
        assert!(result.skipped_lines.windows(2).all(|w| w[0] < w[1]));
        assert!(result.skipped_lines.iter().all(|&line| line >= 2));
    }

    #[test]
    fn test_parsed_values_round_trip_exactly() {
        let content = format!("{DISTO_HEADER}\n1.25,-0.5,1e-3\n123.456789012345,0,-7.5\n");
        let result = read_temp("test_round_trip.csv", &content).unwrap();

        assert_eq!(result.points[0], Point3d::new(1.25, -0.5, 1e-3));
        assert_eq!(result.points[1], Point3d::new(123.456789012345, 0.0, -7.5));
    }

    #[test]
    fn test_custom_column_names() {
        let config = ImportConfig::default().with_columns("Easting", "Northing", "Elevation");
        let name = "test_custom_columns.csv";
        fs::write(name, "Northing,Elevation,Easting\n2.0,3.0,1.0\n").unwrap();
        let result = CsvPointReader::read(name, &config).unwrap();
        let _ = fs::remove_file(name);

        assert_eq!(result.points[0], Point3d::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_column_match_is_case_sensitive() {
        let result = read_temp(
            "test_case_sensitive.csv",
            "x [m],y [m],z [m]\n1.0,2.0,3.0\n",
        );
        assert!(matches!(result, Err(ImportError::NoValidPoints { .. })));
    }

    #[test]
    fn test_summary_wording() {
        let content = format!("{DISTO_HEADER}\n1,2,3\nbad,2,3\n");
        let result = read_temp("test_summary.csv", &content).unwrap();

        assert_eq!(
            result.summary(),
            "Imported 1 points from 2 lines. Skipped lines: [3]"
        );

        let content = format!("{DISTO_HEADER}\n1,2,3\n");
        let result = read_temp("test_summary_clean.csv", &content).unwrap();
        assert_eq!(result.summary(), "Imported 1 points from 1 lines.");
    }
}
