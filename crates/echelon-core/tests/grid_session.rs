//! End-to-end: text grid in, operation, text grid out.

use echelon_core::adapter::{FormatMode, egress, ingest};
use echelon_core::linalg::{invert, normalize, reduced_row_echelon_form};
use echelon_core::prelude::*;

/// Ingest, apply `op`, and write the outcome. `out` is only touched on success.
fn run_into(
    input: &TextGrid,
    out: &mut TextGrid,
    op: impl Fn(&Matrix) -> Result<Outcome>,
) -> Result<()> {
    let m = ingest(input)?;
    op(&m)?.write_to(out, FormatMode::default());
    Ok(())
}

fn run(input: &TextGrid, op: impl Fn(&Matrix) -> Result<Outcome>) -> Result<TextGrid> {
    let mut out = TextGrid::default();
    run_into(input, &mut out, op)?;
    Ok(out)
}

#[test]
fn invert_for_display() {
    let input = TextGrid::from_rows(&[["4", "7"], ["2", "6"]]);
    let out = run(&input, |m| invert(m).map(Outcome::from)).unwrap();
    assert_eq!(
        out,
        TextGrid::from_rows(&[["0.6", "-0.7"], ["-0.2", "0.4"]])
    );
}

#[test]
fn determinant_for_display() {
    let input = TextGrid::from_rows(&[["2", "0", "1"], ["1", "3", "2"], ["1", "1", "2"]]);
    let out = run(&input, |m| determinant(m).map(Outcome::Scalar)).unwrap();
    assert_eq!(out.to_string(), "6\n");
}

#[test]
fn rref_resizes_output() {
    let input = TextGrid::from_rows(&[["1", "2", "3"], ["4", "5", "6"]]);
    let mut out = TextGrid::from_rows(&[["stale"]]);
    let m: Matrix = ingest(&input).unwrap();
    egress(&reduced_row_echelon_form(&m), &mut out, FormatMode::default());
    assert_eq!(out, TextGrid::from_rows(&[["1", "0", "-1"], ["0", "1", "2"]]));
}

#[test]
fn errors_leave_output_alone() {
    let previous = TextGrid::from_rows(&[["9", "8"], ["7", "6"]]);
    let mut out = previous.clone();

    let input = TextGrid::from_rows(&[["1", "2"], ["2", "4"]]);
    assert_eq!(
        run_into(&input, &mut out, |m| invert(m).map(Outcome::from)),
        Err(CoreError::NonInvertibleMatrix)
    );
    assert_eq!(out, previous);

    let input = TextGrid::from_rows(&[["0", "0", "0"]]);
    assert_eq!(
        run_into(&input, &mut out, |m| normalize(m).map(Outcome::from)),
        Err(CoreError::ZeroVector)
    );
    assert_eq!(out, previous);

    let input = TextGrid::from_rows(&[["1", ""]]);
    assert!(matches!(
        run_into(&input, &mut out, |m| Ok(Outcome::from(m.clone()))),
        Err(CoreError::InvalidCell { column: 1, row: 0, .. })
    ));
    assert_eq!(out, previous);

    let input = TextGrid::from_rows(&[["1", "2"], ["3", "4"]]);
    run_into(&input, &mut out, |m| determinant(m).map(Outcome::Scalar)).unwrap();
    assert_eq!(out, TextGrid::from_rows(&[["-2"]]));
}
