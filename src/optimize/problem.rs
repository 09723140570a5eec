use crate::error::{Error, Result};
use crate::machine::Button;
use highs::{HighsModelStatus, RowProblem, Sense};
use log::warn;
use ndarray::Array2;

/// `counters x buttons` matrix with `A[j, i] = 1` iff button `i` increments counter `j`.
pub fn button_matrix(buttons: &[Button], counters: usize) -> Result<Array2<f64>> {
    let mut a = Array2::<f64>::zeros((counters, buttons.len()));
    for (i, button) in buttons.iter().enumerate() {
        for &j in button {
            if j >= counters {
                return Err(Error::IndexOutOfRange {
                    button: i,
                    index: j,
                    counters,
                });
            }
            a[[j, i]] = 1.;
        }
    }
    Ok(a)
}

/// Finds a non-negative integer `x` with `Ax = b` and the smallest `sum(x)`.
pub fn minimize_presses(a: &Array2<f64>, b: &[u64]) -> Result<Vec<u64>> {
    let (rows, cols) = a.dim();
    if b.len() != rows {
        return Err(Error::ShapeMismatch {
            rows,
            len: b.len(),
        });
    }

    // HiGHS wants at least one column
    if cols == 0 {
        return match b.iter().all(|&b_j| b_j == 0) {
            true => Ok(Vec::new()),
            false => Err(Error::NotOptimal(HighsModelStatus::Infeasible)),
        };
    }

    let mut pb = RowProblem::new();
    let x = (0..cols)
        .map(|_| pb.add_integer_column(1., 0..))
        .collect::<Vec<_>>();

    for (row, &b_j) in a.rows().into_iter().zip(b) {
        let a_j = row
            .iter()
            .zip(&x)
            .filter(|(a_ji, _)| **a_ji != 0.)
            .map(|(a_ji, col)| (*col, *a_ji))
            .collect::<Vec<_>>();
        let b_j = b_j as f64;
        pb.add_row(b_j..=b_j, a_j);
    }

    let mut model = pb.optimise(Sense::Minimise);
    model.set_option("output_flag", false);

    let solved = model.try_solve().map_err(Error::Solver)?;
    let status = solved.status();
    if status != HighsModelStatus::Optimal {
        warn!("problem status: {:?}", status);
        return Err(Error::NotOptimal(status));
    }

    let presses = solved
        .get_solution()
        .columns()
        .iter()
        .map(|x_i| x_i.round().max(0.) as u64)
        .collect::<Vec<_>>();

    // exact check, b_j above 2^53 is not representable in f64
    for (row, &b_j) in a.rows().into_iter().zip(b) {
        let ax_j = row
            .iter()
            .zip(&presses)
            .try_fold(0u64, |acc, (&a_ji, &p)| {
                (a_ji.round() as u64).checked_mul(p)?.checked_add(acc)
            });
        if ax_j != Some(b_j) {
            return Err(Error::Inexact);
        }
    }

    Ok(presses)
}
