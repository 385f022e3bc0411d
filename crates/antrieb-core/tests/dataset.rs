// File: crates/antrieb-core/tests/dataset.rs
// Purpose: CSV → dataset shaping: alignment, gaps, row order and load errors.

use antrieb_core::{ChartError, Dataset};
use chrono::Datelike;

const CSV: &str = "\
jahr,Kanton Zürich,Stadt Zürich,Winterthur
2000,10.5,3,x
2010,12,,4
2020,15,5
";

#[test]
fn every_series_aligned_with_dates() {
    let ds = Dataset::from_csv_str(CSV).expect("parse");
    assert_eq!(ds.year_column, "jahr");
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.series.len(), 3);
    for s in &ds.series {
        assert_eq!(s.len(), ds.dates.len(), "series {} misaligned", s.name);
    }
    let names: Vec<&str> = ds.series_names().collect();
    assert_eq!(names, ["Kanton Zürich", "Stadt Zürich", "Winterthur"]);
}

#[test]
fn malformed_and_missing_cells_become_gaps() {
    let ds = Dataset::from_csv_str(CSV).expect("parse");
    assert_eq!(ds.series[0].values, vec![Some(10.5), Some(12.0), Some(15.0)]);
    // blank cell
    assert_eq!(ds.series[1].values, vec![Some(3.0), None, Some(5.0)]);
    // non-numeric text and a short row
    assert_eq!(ds.series[2].values, vec![None, Some(4.0), None]);
}

#[test]
fn rows_keep_file_order() {
    let ds = Dataset::from_csv_str("jahr,A\n2010,1\n2000,2\n2005,3\n").expect("parse");
    let years: Vec<i32> = ds.dates.iter().map(|d| d.year()).collect();
    assert_eq!(years, [2010, 2000, 2005]);
    assert_eq!(ds.series[0].values, vec![Some(1.0), Some(2.0), Some(3.0)]);
}

#[test]
fn extents_ignore_gaps() {
    let ds = Dataset::from_csv_str(CSV).expect("parse");
    assert_eq!(ds.value_extent(), Some((3.0, 15.0)));
    let (lo, hi) = ds.date_extent().expect("dates");
    assert!(lo < hi);
    assert_eq!(ds.year(0), Some(2000));
    assert_eq!(ds.year(2), Some(2020));
}

#[test]
fn all_gap_series_has_no_extent() {
    let ds = Dataset::from_csv_str("jahr,A,B\n2000,,1\n2001,n/a,2\n").expect("parse");
    assert_eq!(ds.series[0].extent(), None);
    assert_eq!(ds.value_extent(), Some((1.0, 2.0)));
}

#[test]
fn unparsable_year_is_an_error() {
    let err = Dataset::from_csv_str("jahr,A\n2000,1\nzweitausend,2\n").unwrap_err();
    match err {
        ChartError::InvalidYear { row, value } => {
            assert_eq!(row, 1);
            assert_eq!(value, "zweitausend");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn header_only_and_empty_input() {
    assert!(matches!(Dataset::from_csv_str("jahr,A\n"), Err(ChartError::EmptyDataset)));
    assert!(matches!(Dataset::from_csv_str(""), Err(ChartError::MissingYearColumn)));
}

#[test]
fn segments_break_at_gaps() {
    let ds = Dataset::from_csv_str("jahr,A\n2000,1\n2001,2\n2002,\n2003,4\n2004,\n2005,6\n2006,7\n").expect("parse");
    let segs = ds.series[0].segments();
    assert_eq!(segs, vec![(0, vec![1.0, 2.0]), (3, vec![4.0]), (5, vec![6.0, 7.0])]);
}
