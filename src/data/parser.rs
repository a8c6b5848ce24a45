use chrono::NaiveDateTime;

use crate::data::classify::{classify_shift, classify_status};
use crate::models::Record;

/// Rows with fewer comma-separated fields than this are dropped.
const MIN_FIELDS: usize = 10;

const DEPARTMENT_COL: usize = 6;
const EXPECTED_COL: usize = 8;
const TIMEOUT_COL: usize = 10;

/// Timestamp forms the export has been seen to use. Tried in order.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parse the raw export text into classified records.
///
/// The first line is the header and is discarded. Each remaining line is
/// split on `,` with no quoting or escaping support; a field containing a
/// literal comma will shift the columns for that row. Malformed rows (too
/// few fields, or an unparseable expected/timeout timestamp) are skipped
/// silently.
pub fn parse_records(text: &str) -> Vec<Record> {
    text.lines().skip(1).filter_map(parse_row).collect()
}

fn parse_row(line: &str) -> Option<Record> {
    let cols: Vec<&str> = line.split(',').collect();
    if cols.len() < MIN_FIELDS {
        return None;
    }

    let expected = parse_timestamp(cols[EXPECTED_COL])?;
    let timeout = parse_timestamp(cols.get(TIMEOUT_COL)?)?;

    Some(Record {
        department: cols[DEPARTMENT_COL].to_string(),
        shift: classify_shift(expected),
        status: classify_status(expected, timeout),
    })
}

/// Generic date-time parse over the known export formats. A trailing `Z`
/// is tolerated; the timestamp is still read as written, with no timezone
/// conversion, so the shift hour matches the file.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim().trim_end_matches('Z');
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Shift, TatStatus};

    const HEADER: &str =
        "record_id,facility,unit,priority,order_id,requested_by,department,sample_type,expected_time,collector,timeout_time,notes";

    fn export(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn parses_example_row_as_day_delayed() {
        let text = export(&["a,b,c,d,e,f,Eng,h,2024-01-01T08:00:00,j,2024-01-01T08:10:00"]);
        let records = parse_records(&text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].department, "Eng");
        assert_eq!(records[0].shift, Shift::Day);
        assert_eq!(records[0].status, TatStatus::Delayed);
    }

    #[test]
    fn header_line_is_discarded() {
        let records = parse_records(HEADER);
        assert!(records.is_empty());
    }

    #[test]
    fn short_row_is_skipped() {
        let text = export(&[
            "a,b,c,d,e,f,Eng,h,2024-01-01T08:00:00",
            "a,b,c,d,e,f,Lab,h,2024-01-01T08:00:00,j,2024-01-01T08:05:00",
        ]);
        let records = parse_records(&text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].department, "Lab");
    }

    #[test]
    fn ten_field_row_has_no_timeout_and_is_skipped() {
        // Ten fields pass the length check but leave index 10 absent.
        let text = export(&["a,b,c,d,e,f,Eng,h,2024-01-01T08:00:00,j"]);
        assert!(parse_records(&text).is_empty());
    }

    #[test]
    fn unparseable_timestamp_is_skipped() {
        let text = export(&[
            "a,b,c,d,e,f,Eng,h,not-a-date,j,2024-01-01T08:10:00",
            "a,b,c,d,e,f,Eng,h,2024-01-01T08:00:00,j,not-a-date",
        ]);
        assert!(parse_records(&text).is_empty());
    }

    #[test]
    fn record_count_is_below_line_count_when_rows_are_malformed() {
        let text = export(&[
            "a,b,c,d,e,f,Eng,h,2024-01-01T08:00:00,j,2024-01-01T08:10:00",
            "too,short",
            "a,b,c,d,e,f,Ops,h,2024-01-01T21:00:00,j,2024-01-01T21:20:00",
        ]);
        let data_lines = text.lines().count() - 1;
        let records = parse_records(&text);

        assert_eq!(data_lines, 3);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn accepts_space_separated_and_us_style_timestamps() {
        assert!(parse_timestamp("2024-01-01 08:00:00").is_some());
        assert!(parse_timestamp("01/15/2024 21:30").is_some());
        assert!(parse_timestamp("2024-01-01T08:00:00Z").is_some());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn crlf_line_endings_do_not_break_the_timeout_column() {
        let text = format!(
            "{HEADER}\r\na,b,c,d,e,f,Eng,h,2024-01-01T22:00:00,j,2024-01-01T22:05:00\r\n"
        );
        let records = parse_records(&text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].shift, Shift::Night);
        assert_eq!(records[0].status, TatStatus::Delayed);
    }
}
