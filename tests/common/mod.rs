//! Shared test utilities and fixture generators

use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

use tipstat::pipeline::{Day, Record, Sex, TimeOfDay};

/// CSV fixture with a mix of days, party sizes and service periods.
pub const SAMPLE_CSV: &str = "\
total_bill,tip,sex,party_size,day,time_of_day
16.99,1.01,Woman,2,Sun,Dinner
10.34,1.66,Man,3,Sun,Dinner
21.01,3.50,Man,3,Sun,Dinner
23.68,3.31,Man,2,Thur,Lunch
24.59,3.61,Woman,4,Sat,Dinner
25.29,4.71,Man,4,Sat,Dinner
8.77,2.00,Man,2,Fri,Lunch
26.88,3.12,Man,4,Sat,Dinner
15.04,1.96,Man,2,Sun,Dinner
14.78,3.23,Woman,2,Fri,Dinner
30.40,5.60,Man,6,Sat,Dinner
12.02,1.97,Woman,2,Thur,Lunch
";

/// Same schema with the Portuguese labels of the source dataset.
pub const PORTUGUESE_CSV: &str = "\
total_bill,tip,sex,party_size,day,time_of_day
16.99,1.01,Mulher,2,Dom,Jantar
10.34,1.66,Homem,3,Sab,Almoço
21.01,3.50,Homem,3,Qui,Jantar
23.68,3.31,Homem,2,Sex,Almoço
";

/// Write CSV contents to a file in a fresh temporary directory.
pub fn write_csv(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("tips.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();

    (temp_dir, csv_path)
}

pub fn record(
    total_bill: f64,
    tip: f64,
    sex: Sex,
    party_size: u32,
    day: Day,
    time_of_day: TimeOfDay,
) -> Record {
    Record {
        total_bill,
        tip,
        sex,
        party_size,
        day,
        time_of_day,
    }
}

/// The two-record dataset with known aggregates: mean tip by sex is
/// {Man: 2.0, Woman: 3.0} and the overall mean tip is 2.5.
pub fn two_record_dataset() -> Vec<Record> {
    vec![
        record(10.0, 2.0, Sex::Man, 2, Day::Sun, TimeOfDay::Dinner),
        record(20.0, 3.0, Sex::Woman, 3, Day::Sat, TimeOfDay::Dinner),
    ]
}

/// A mixed in-memory dataset covering every grouping dimension.
pub fn sample_records() -> Vec<Record> {
    vec![
        record(16.99, 1.01, Sex::Woman, 2, Day::Sun, TimeOfDay::Dinner),
        record(10.34, 1.66, Sex::Man, 3, Day::Sun, TimeOfDay::Dinner),
        record(21.01, 3.50, Sex::Man, 3, Day::Sun, TimeOfDay::Dinner),
        record(23.68, 3.31, Sex::Man, 2, Day::Thu, TimeOfDay::Lunch),
        record(24.59, 3.61, Sex::Woman, 4, Day::Sat, TimeOfDay::Dinner),
        record(25.29, 4.71, Sex::Man, 4, Day::Sat, TimeOfDay::Dinner),
        record(8.77, 2.00, Sex::Man, 2, Day::Fri, TimeOfDay::Lunch),
        record(26.88, 3.12, Sex::Man, 4, Day::Sat, TimeOfDay::Dinner),
        record(15.04, 1.96, Sex::Man, 2, Day::Sun, TimeOfDay::Dinner),
        record(14.78, 3.23, Sex::Woman, 2, Day::Fri, TimeOfDay::Dinner),
        record(30.40, 5.60, Sex::Man, 6, Day::Sat, TimeOfDay::Dinner),
        record(12.02, 1.97, Sex::Woman, 2, Day::Thu, TimeOfDay::Lunch),
    ]
}
