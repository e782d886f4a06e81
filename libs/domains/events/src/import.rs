//! Bulk import of the delimited event dataset.

use crate::error::{EventError, EventResult};
use crate::models::StoredEvent;
use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

/// One row of the source dataset.
#[derive(Debug, Deserialize, Validate)]
pub struct EventCsvRow {
    pub event_name: String,
    pub city_name: String,
    pub date: String,
    pub time: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

/// Accepts plain calendar dates and RFC 3339 timestamps; the time-of-day
/// component of a timestamp is discarded.
fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime.date_naive());
    }
    Err(format!("unparseable date '{raw}'"))
}

impl TryFrom<EventCsvRow> for StoredEvent {
    type Error = String;

    fn try_from(row: EventCsvRow) -> Result<Self, Self::Error> {
        let date = parse_date(&row.date)?;

        Ok(StoredEvent {
            event_name: row.event_name,
            city_name: row.city_name,
            date: date.and_time(NaiveTime::MIN).and_utc(),
            time: row.time,
            latitude: row.latitude,
            longitude: row.longitude,
        })
    }
}

/// Read and parse the whole dataset file.
///
/// Any unreadable file, undeserializable row, out-of-range coordinate or
/// unparseable date fails the import with the offending line number; nothing
/// is partially returned.
pub fn read_dataset(path: &Path) -> EventResult<Vec<StoredEvent>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| EventError::import(format!("cannot open {}: {e}", path.display())))?;

    let mut events = Vec::new();
    for (index, row) in reader.deserialize::<EventCsvRow>().enumerate() {
        // Header occupies line 1
        let line = index + 2;
        let row = row.map_err(|e| EventError::import(format!("line {line}: {e}")))?;
        row.validate()
            .map_err(|e| EventError::import(format!("line {line}: {e}")))?;
        let event = StoredEvent::try_from(row)
            .map_err(|e| EventError::import(format!("line {line}: {e}")))?;
        events.push(event);
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    struct TempCsv(PathBuf);

    impl TempCsv {
        fn write(name: &str, content: &str) -> Self {
            let path = std::env::temp_dir().join(format!("geoevents-{name}.csv"));
            fs::write(&path, content).unwrap();
            Self(path)
        }
    }

    impl Drop for TempCsv {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    const HEADER: &str = "event_name,city_name,date,time,latitude,longitude\n";

    #[test]
    fn test_read_dataset_parses_rows() {
        let file = TempCsv::write(
            "ok",
            &format!(
                "{HEADER}Fair,Springfield,2024-05-01,10:00,10.0,20.0\n\
                 Concert,Shelbyville,2024-05-03,19:30,-33.86,151.2\n"
            ),
        );

        let events = read_dataset(&file.0).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_name, "Fair");
        assert_eq!(events[0].lookup_date().to_string(), "2024-05-01");
        assert_eq!(events[1].time, "19:30");
        assert_eq!(events[1].latitude, -33.86);
    }

    #[test]
    fn test_read_dataset_accepts_rfc3339_dates() {
        let file = TempCsv::write(
            "rfc3339",
            &format!("{HEADER}Fair,Springfield,2024-05-01T18:30:00Z,10:00,10.0,20.0\n"),
        );

        let events = read_dataset(&file.0).unwrap();
        assert_eq!(events[0].lookup_date().to_string(), "2024-05-01");
    }

    #[test]
    fn test_read_dataset_rejects_bad_date_with_line_number() {
        let file = TempCsv::write(
            "bad-date",
            &format!(
                "{HEADER}Fair,Springfield,2024-05-01,10:00,10.0,20.0\n\
                 Concert,Shelbyville,sometime,19:30,1.0,2.0\n"
            ),
        );

        let err = read_dataset(&file.0).unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_read_dataset_rejects_out_of_range_latitude() {
        let file = TempCsv::write(
            "bad-lat",
            &format!("{HEADER}Fair,Springfield,2024-05-01,10:00,123.0,20.0\n"),
        );

        assert!(read_dataset(&file.0).is_err());
    }

    #[test]
    fn test_read_dataset_missing_file() {
        let err = read_dataset(Path::new("/nonexistent/dataset.csv")).unwrap_err();
        assert!(matches!(err, EventError::Import { .. }));
    }
}
