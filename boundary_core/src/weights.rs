use std::fmt::Write;

use log::debug;

const HEADER: &str = "w0,w1,w2";

/// Weights of the linear boundary `w0 + w1*x1 + w2*x2 = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightTriple {
    pub w0: f64,
    pub w1: f64,
    pub w2: f64,
}

/// The outcome of parsing a block of weight text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    /// Accepted rows, in input order.
    pub weights: Vec<WeightTriple>,
    /// 1-based source line numbers of the non-empty, non-header rows that
    /// were discarded.
    pub dropped: Vec<usize>,
}

/// Parses free-form text into a sequence of weight triples.
///
/// Never fails: malformed rows are skipped and the worst case is an empty
/// sequence.
pub fn parse(text: &str) -> Vec<WeightTriple> {
    parse_report(text).weights
}

/// Like [`parse`], also reporting which lines were dropped.
///
/// Lines may end in `\n`, `\r\n` or `\r`. Blank lines are ignored. A first
/// line mentioning `w0`, `w1` and `w2` (any case) is a header. Every other
/// line must start with three comma separated finite numbers; anything
/// after the third field is ignored.
pub fn parse_report(text: &str) -> ParseReport {
    let text = text.replace("\r\n", "\n");
    let mut lines = text
        .split(['\r', '\n'])
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .peekable();

    if lines.peek().is_some_and(|(_, first)| is_header(first)) {
        lines.next();
    }

    let mut report = ParseReport::default();
    for (line_no, line) in lines {
        match parse_row(line) {
            Some(w) => report.weights.push(w),
            None => {
                debug!(line = line_no; "dropped malformed weight row");
                report.dropped.push(line_no);
            }
        }
    }

    report
}

fn is_header(line: &str) -> bool {
    let line = line.to_ascii_lowercase();
    ["w0", "w1", "w2"].iter().all(|k| line.contains(k))
}

fn parse_row(line: &str) -> Option<WeightTriple> {
    let mut fields = line.split(',').map(str::trim);
    let mut next = || {
        fields
            .next()?
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    };

    Some(WeightTriple {
        w0: next()?,
        w1: next()?,
        w2: next()?,
    })
}

/// Writes `weights` as CSV with a `w0,w1,w2` header, readable by [`parse`].
pub fn to_csv(weights: &[WeightTriple]) -> String {
    let mut out = String::from(HEADER);
    for w in weights {
        let _ = write!(out, "\n{},{},{}", w.w0, w.w1, w.w2);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(w0: f64, w1: f64, w2: f64) -> WeightTriple {
        WeightTriple { w0, w1, w2 }
    }

    #[test]
    fn empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("\n \r\n\t\n").is_empty());
    }

    #[test]
    fn header_and_bad_row() {
        let got = parse("w0,w1,w2\n1,2,3\nbad,row\n4,5,6");
        assert_eq!(got, vec![w(1.0, 2.0, 3.0), w(4.0, 5.0, 6.0)]);
    }

    #[test]
    fn header_any_case_and_order() {
        let got = parse("  W2 ; W1 ; W0  \n1,2,3");
        assert_eq!(got, vec![w(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn only_first_line_can_be_header() {
        let report = parse_report("1,2,3\nw0,w1,w2\n4,5,6");
        assert_eq!(report.weights, vec![w(1.0, 2.0, 3.0), w(4.0, 5.0, 6.0)]);
        assert_eq!(report.dropped, vec![2]);
    }

    #[test]
    fn mixed_line_endings_and_spacing() {
        let got = parse("0.5 , -1 ,2\r\n\r\n3,4 ,  5\r6,7,8\n");
        assert_eq!(
            got,
            vec![w(0.5, -1.0, 2.0), w(3.0, 4.0, 5.0), w(6.0, 7.0, 8.0)]
        );
    }

    #[test]
    fn short_and_non_finite_rows_dropped() {
        let report = parse_report("1,2\n1,NaN,3\ninf,0,0\n1,2,x\n1e2,-2.5e-1,0");
        assert_eq!(report.weights, vec![w(100.0, -0.25, 0.0)]);
        assert_eq!(report.dropped, vec![1, 2, 3, 4]);
    }

    #[test]
    fn dropped_rows_report_source_lines() {
        let report = parse_report("w0,w1,w2\r\n\r\n1,2,3\r\nbad\r\n\n4,5,6\rnope,1,2\n");
        assert_eq!(report.weights, vec![w(1.0, 2.0, 3.0), w(4.0, 5.0, 6.0)]);
        assert_eq!(report.dropped, vec![4, 7]);
    }

    #[test]
    fn extra_fields_ignored() {
        assert_eq!(parse("1,2,3,4,five"), vec![w(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn csv_round_trip() {
        let weights = vec![
            w(0.1, -0.2, 0.30000000000000004),
            w(-1e-12, 123456.789, 0.0),
            w(f64::MAX, f64::MIN_POSITIVE, -7.0),
        ];

        let csv = to_csv(&weights);
        assert!(csv.starts_with("w0,w1,w2\n"));
        assert_eq!(parse(&csv), weights);
    }

    #[test]
    fn csv_empty_is_header_only() {
        assert_eq!(to_csv(&[]), "w0,w1,w2");
        assert!(parse(&to_csv(&[])).is_empty());
    }
}
