//! Writing the CSV export to disk

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use boothroi_core::Session;
use boothroi_core::export::export_filename;
use jiff::civil::Date;

use crate::util::io::atomic_write;

/// Today's date in the system time zone, used for the export file name
pub fn today() -> Date {
    jiff::Zoned::now().date()
}

/// Write the session's CSV into `dir` as `roi-calculator-<date>.csv`,
/// creating the directory if needed. Returns the written path.
pub fn write_export(dir: &Path, session: &Session, date: Date) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(date));
    atomic_write(&path, &session.export_csv())?;
    tracing::info!(path = %path.display(), "exported CSV");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boothroi_core::ReturnField;
    use boothroi_core::export::{EXPORT_HEADER, EXPORT_ROW_COUNT};
    use tempfile::tempdir;

    #[test]
    fn test_write_export_names_file_by_date() {
        let dir = tempdir().unwrap();
        let session = Session::default();

        let path = write_export(dir.path(), &session, jiff::civil::date(2025, 3, 14)).unwrap();
        assert_eq!(path, dir.path().join("roi-calculator-2025-03-14.csv"));

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, session.export_csv());
        assert!(content.starts_with(EXPORT_HEADER));
        assert_eq!(content.lines().count(), EXPORT_ROW_COUNT + 1);
        assert!(!content.ends_with('\n'));
    }

    #[test]
    fn test_write_export_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("exports").join("spring");
        let mut session = Session::default();
        session.set_return_field(ReturnField::LeadsGenerated, 0.0);

        let path = write_export(&nested, &session, jiff::civil::date(2024, 12, 1)).unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("Calculated Metrics,Cost Per Lead,0.00"));
    }

    #[test]
    fn test_same_day_export_overwrites() {
        let dir = tempdir().unwrap();
        let date = jiff::civil::date(2025, 1, 2);
        let mut session = Session::default();

        write_export(dir.path(), &session, date).unwrap();
        session.set_return_field(ReturnField::Ltv, 7_000.0);
        let path = write_export(dir.path(), &session, date).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("Projected Returns,Customer Lifetime Value (LTV),7000"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
