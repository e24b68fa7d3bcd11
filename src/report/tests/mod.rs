//! Test fixtures shared across the report parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod tokens_tests;

/// A realistic report: prose banner, scalar preamble, a performance
/// summary table (`Number` header) and a spanwise table (`r/R` header),
/// each bounded by delimiter banners.
pub fn sample_report() -> String {
    r#" ******************************************
 XTurb - Wind Turbine Analysis
 ******************************************

 Blade Name = NREL-PhaseVI
 Number of Blades = 2
 BRADIUS = 5.03

 Prediction results
 ------------------------------------------------------------
 Number   VWIND     RPM      PITCH    CT       CP
 1        7.000     72.000   3.000    0.520    0.360
 2        9.000     72.000   3.000    0.480    0.310
 ------------------------------------------------------------
 r/R      Chord    Twist    CL       CD
 0.250    0.1465   20.040   1.100    0.010
 0.500    0.1120   5.308    0.950    0.008
 0.750    0.0905   0.494    0.820    0.007
 1.000    0.0707   -1.816   0.000    0.005
 ------------------------------------------------------------
"#
    .to_string()
}

/// The minimal two-table shape from the format notes: one sealed table,
/// one trailing banner that never gains rows.
pub fn minimal_report() -> String {
    "Name = Test\n--- table 1 ---\nr/R   Chord\n0.25  0.10\n0.50  0.08\n--- table 2 ---\n"
        .to_string()
}

/// Helper to create a temporary report file with given content.
pub fn create_temp_report(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
