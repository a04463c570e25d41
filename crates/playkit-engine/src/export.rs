use std::io::Write;
use std::path::Path;

use playkit_types::RollEntry;

use crate::error::Result;

pub const CSV_HEADER: [&str; 6] = [
    "timestamp",
    "dice_count",
    "sides",
    "results",
    "total",
    "average",
];

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes the header and one row per entry, in the order given
pub fn write_csv<W: Write>(writer: W, entries: &[RollEntry]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(CSV_HEADER)?;

    for entry in entries {
        wtr.write_record([
            entry.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            entry.dice_count.to_string(),
            entry.sides.to_string(),
            entry.results_label(),
            entry.total.to_string(),
            format!("{:.2}", entry.average),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file(path: &Path, entries: &[RollEntry]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    write_csv(file, entries)
}

pub fn to_csv_string(entries: &[RollEntry]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, entries)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::RollHistory;
    use chrono::{TimeZone, Utc};
    use playkit_types::DiceSpec;

    fn sample_history() -> RollHistory {
        let mut history = RollHistory::new();
        history.record(RollEntry::new(
            DiceSpec::new(2, 6).unwrap(),
            vec![1, 5],
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        ));
        history.record(RollEntry::new(
            DiceSpec::new(1, 20).unwrap(),
            vec![18],
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 1, 0).unwrap(),
        ));
        history
    }

    #[test]
    fn test_csv_layout() {
        let csv = to_csv_string(sample_history().entries()).unwrap();
        insta::assert_snapshot!(csv, @r#"
        timestamp,dice_count,sides,results,total,average
        2024-05-01 09:01:00,1,20,[18],18,18.00
        2024-05-01 09:00:00,2,6,"[1, 5]",6,3.00
        "#);
    }

    #[test]
    fn test_empty_history_writes_header_only() {
        let csv = to_csv_string(&[]).unwrap();
        assert_eq!(csv, "timestamp,dice_count,sides,results,total,average\n");
    }

    #[test]
    fn test_write_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exports/rolls.csv");
        write_csv_file(&path, sample_history().entries()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(content.lines().nth(1).unwrap().starts_with("2024-05-01 09:01:00"));
    }
}
