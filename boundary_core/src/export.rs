use std::{fmt::Write, io};

use crate::dataset::Point;

const HEADER: &str = "x1,x2,y";

/// Something able to hand a finished text blob to the user.
pub trait TextSink {
    /// Delivers `text` under the suggested file `name`.
    ///
    /// # Errors
    /// Returns an io error if the text could not be delivered.
    fn deliver(&mut self, name: &str, text: &str) -> io::Result<()>;
}

/// Writes `points` as CSV with an `x1,x2,y` header, one row per point in
/// generation order, without a trailing newline.
pub fn dataset_csv(points: &[Point]) -> String {
    let mut out = String::from(HEADER);
    for p in points {
        let _ = write!(out, "\n{},{},{}", p.x1, p.x2, p.y);
    }
    out
}

/// File name suggested for the dataset generated from `seed`.
pub fn dataset_file_name(seed: u32) -> String {
    format!("dataset_seed{seed}.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format() {
        let points = [
            Point {
                x1: 1.5,
                x2: -2.0,
                y: 0,
            },
            Point {
                x1: 0.1,
                x2: 10.0,
                y: 1,
            },
        ];

        assert_eq!(dataset_csv(&points), "x1,x2,y\n1.5,-2,0\n0.1,10,1");
    }

    #[test]
    fn empty_is_header_only() {
        assert_eq!(dataset_csv(&[]), "x1,x2,y");
    }

    #[test]
    fn file_name() {
        assert_eq!(dataset_file_name(42), "dataset_seed42.csv");
    }
}
