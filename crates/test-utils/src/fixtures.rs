//! CSV fixtures in the transducer export layout.
//!
//! Exports come out of a MySQL table: `id,latitude,longitude,depth[,...]`
//! with a header row.

use std::fmt::Write as _;
use std::path::PathBuf;

/// Header row used by the fixtures.
pub const CSV_HEADER: &str = "id,latitude,longitude,depth,timestamp";

/// Three samples, the middle one an out-of-water reading.
pub const SCENARIO_CSV: &str = "\
id,latitude,longitude,depth
1,10.0,20.0,5.0
2,10.1,20.1,999999
3,10.2,20.2,7.0
";

/// Every row is an out-of-water reading.
pub const ALL_ERRORS_CSV: &str = "\
id,latitude,longitude,depth
1,10.0,20.0,1000000
2,10.1,20.1,-1000000
3,10.2,20.2,1000
";

/// Rows with only three columns.
pub const SHORT_ROWS_CSV: &str = "\
id,latitude,longitude
1,10.0,20.0
";

/// A depth value that is not a number.
pub const BAD_NUMBER_CSV: &str = "\
id,latitude,longitude,depth
1,10.0,20.0,5.0
2,10.1,20.1,deep
";

/// A latitude that parses as a float but is not a position.
pub const NAN_COORDINATE_CSV: &str = "\
id,latitude,longitude,depth
1,10.0,20.0,5.0
2,nan,20.1,6.0
3,10.2,20.2,7.0
4,10.0,20.2,8.0
";

/// Render `(latitude, longitude, depth)` samples as export CSV text.
pub fn samples_to_csv(samples: &[(f64, f64, f64)]) -> String {
    let mut csv = String::with_capacity(32 * (samples.len() + 1));
    csv.push_str(CSV_HEADER);
    csv.push('\n');
    for (i, (lat, lon, depth)) in samples.iter().enumerate() {
        let _ = writeln!(csv, "{},{},{},{},2016-06-{:02}", i + 1, lat, lon, depth, 1 + i % 28);
    }
    csv
}

/// A temporary directory holding one CSV file.
///
/// The directory is removed when this value is dropped.
pub struct CsvFixture {
    pub dir: tempfile::TempDir,
    pub path: PathBuf,
}

/// Write `contents` to `<tempdir>/<name>`.
pub fn write_csv_fixture(name: &str, contents: &str) -> std::io::Result<CsvFixture> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(name);
    std::fs::write(&path, contents)?;
    Ok(CsvFixture { dir, path })
}
