//! Unit tests for the dataset loader

use tipstat::pipeline::{load_records, Day, Sex, TimeOfDay};

#[path = "common/mod.rs"]
mod common;

use common::{write_csv, PORTUGUESE_CSV, SAMPLE_CSV};

#[test]
fn loads_well_formed_csv() {
    let (_dir, path) = write_csv(SAMPLE_CSV);

    let records = load_records(&path).unwrap();

    assert_eq!(records.len(), 12);
    assert_eq!(records[0].total_bill, 16.99);
    assert_eq!(records[0].tip, 1.01);
    assert_eq!(records[0].sex, Sex::Woman);
    assert_eq!(records[0].party_size, 2);
    assert_eq!(records[0].day, Day::Sun);
    assert_eq!(records[0].time_of_day, TimeOfDay::Dinner);
}

#[test]
fn loads_portuguese_labels() {
    let (_dir, path) = write_csv(PORTUGUESE_CSV);

    let records = load_records(&path).unwrap();

    assert_eq!(records.len(), 4);
    assert_eq!(records[0].sex, Sex::Woman);
    assert_eq!(records[0].day, Day::Sun);
    assert_eq!(records[0].time_of_day, TimeOfDay::Dinner);
    assert_eq!(records[1].day, Day::Sat);
    assert_eq!(records[1].time_of_day, TimeOfDay::Lunch);
    assert_eq!(records[3].day, Day::Fri);
}

#[test]
fn record_order_matches_file_order() {
    let (_dir, path) = write_csv(SAMPLE_CSV);

    let records = load_records(&path).unwrap();

    let bills: Vec<f64> = records.iter().take(3).map(|r| r.total_bill).collect();
    assert_eq!(bills, vec![16.99, 10.34, 21.01]);
}

#[test]
fn missing_file_reports_the_path() {
    let path = std::path::Path::new("/nonexistent/dir/tips.csv");

    let err = load_records(path).unwrap_err();

    assert!(
        err.to_string().contains("/nonexistent/dir/tips.csv"),
        "error should name the path: {}",
        err
    );
}

#[test]
fn missing_column_is_rejected() {
    let (_dir, path) = write_csv(
        "total_bill,tip,sex,party_size,day\n10.0,2.0,Man,2,Sun\n",
    );

    let err = load_records(&path).unwrap_err();

    assert!(
        format!("{:#}", err).contains("time_of_day"),
        "error should name the missing column: {:#}",
        err
    );
}

#[test]
fn unknown_category_label_is_rejected() {
    let (_dir, path) = write_csv(
        "total_bill,tip,sex,party_size,day,time_of_day\n10.0,2.0,Robot,2,Sun,Dinner\n",
    );

    let err = load_records(&path).unwrap_err();

    assert!(
        format!("{:#}", err).contains("Robot"),
        "error should echo the bad label: {:#}",
        err
    );
}

#[test]
fn non_numeric_tip_is_rejected() {
    let (_dir, path) = write_csv(
        "total_bill,tip,sex,party_size,day,time_of_day\n\
         10.0,2.0,Man,2,Sun,Dinner\n\
         12.0,lots,Man,2,Sun,Dinner\n",
    );

    assert!(load_records(&path).is_err(), "bad tip cell must fail the load");
}

#[test]
fn zero_party_size_is_rejected() {
    let (_dir, path) = write_csv(
        "total_bill,tip,sex,party_size,day,time_of_day\n10.0,2.0,Man,0,Sun,Dinner\n",
    );

    assert!(load_records(&path).is_err());
}

#[test]
fn header_only_file_yields_empty_dataset() {
    let (_dir, path) = write_csv("total_bill,tip,sex,party_size,day,time_of_day\n");

    let records = load_records(&path).unwrap();

    assert!(records.is_empty());
}
