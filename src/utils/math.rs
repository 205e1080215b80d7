/// Matrices whose determinant magnitude falls below this are treated as
/// singular.
pub const SINGULARITY_TOLERANCE: f64 = 1e-10;

/// Side length of `a` if it is a non-empty square matrix of finite values.
fn square_size(a: &[Vec<f64>]) -> Option<usize> {
    let n = a.len();
    if n == 0 {
        return None;
    }
    let well_formed = a
        .iter()
        .all(|row| row.len() == n && row.iter().all(|v| v.is_finite()));
    well_formed.then_some(n)
}

/// Index of the row at or below `col` with the largest magnitude in `col`.
fn pivot_row(m: &[Vec<f64>], col: usize) -> usize {
    (col..m.len())
        .max_by(|&i, &j| m[i][col].abs().total_cmp(&m[j][col].abs()))
        .unwrap_or(col)
}

/// Determinant by Gaussian elimination with partial pivoting.
///
/// `None` for empty, non-square, ragged or non-finite input.
pub fn determinant(a: &[Vec<f64>]) -> Option<f64> {
    let n = square_size(a)?;
    let mut m = a.to_vec();
    let mut det = 1.0;

    for col in 0..n {
        let p = pivot_row(&m, col);
        if m[p][col] == 0.0 {
            return Some(0.0);
        }
        if p != col {
            m.swap(p, col);
            det = -det;
        }
        let pivot = m[col][col];
        det *= pivot;
        for r in (col + 1)..n {
            let factor = m[r][col] / pivot;
            if factor == 0.0 {
                continue;
            }
            for c in col..n {
                m[r][c] -= factor * m[col][c];
            }
        }
    }
    Some(det)
}

/// Inverse of a square matrix, or `None` when `a` is not square or is
/// (numerically) singular.
pub fn matrix_inverse(a: &[Vec<f64>]) -> Option<Vec<Vec<f64>>> {
    let det = determinant(a)?;
    if det.abs() < SINGULARITY_TOLERANCE {
        return None;
    }

    let n = a.len();
    let mut m = a.to_vec();
    let mut inv: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            let mut row = vec![0.0; n];
            row[i] = 1.0;
            row
        })
        .collect();

    for col in 0..n {
        let p = pivot_row(&m, col);
        if m[p][col] == 0.0 {
            return None;
        }
        m.swap(p, col);
        inv.swap(p, col);

        let pivot = m[col][col];
        for c in 0..n {
            m[col][c] /= pivot;
            inv[col][c] /= pivot;
        }

        for r in 0..n {
            if r == col {
                continue;
            }
            let factor = m[r][col];
            if factor == 0.0 {
                continue;
            }
            for c in 0..n {
                m[r][c] -= factor * m[col][c];
                inv[r][c] -= factor * inv[col][c];
            }
        }
    }
    Some(inv)
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPS
    }

    fn matmul(a: &[Vec<f64>], b: &[Vec<f64>]) -> Vec<Vec<f64>> {
        let n = a.len();
        (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| (0..n).map(|k| a[i][k] * b[k][j]).sum())
                    .collect()
            })
            .collect()
    }

    fn assert_identity(m: &[Vec<f64>]) {
        for (i, row) in m.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(approx_eq(v, expected), "m[{i}][{j}] = {v}");
            }
        }
    }

    #[test]
    fn inverts_two_by_two() {
        let a = vec![vec![4.0, 7.0], vec![2.0, 6.0]];
        let inv = matrix_inverse(&a).unwrap();
        let expected = [[0.6, -0.7], [-0.2, 0.4]];
        for (row, exp) in inv.iter().zip(expected) {
            for (&v, e) in row.iter().zip(exp) {
                assert!(approx_eq(v, e));
            }
        }
    }

    #[test]
    fn product_with_inverse_is_identity() {
        let a = vec![
            vec![2.0, -1.0, 0.0],
            vec![-1.0, 2.0, -1.0],
            vec![0.0, -1.0, 2.0],
        ];
        let inv = matrix_inverse(&a).unwrap();
        assert_identity(&matmul(&a, &inv));
        assert_identity(&matmul(&inv, &a));
    }

    #[test]
    fn needs_row_exchange() {
        let a = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        assert!(approx_eq(determinant(&a).unwrap(), -1.0));
        assert_eq!(matrix_inverse(&a).unwrap(), a);
    }

    #[test]
    fn singular_and_malformed_give_none() {
        assert_eq!(matrix_inverse(&[vec![1.0, 2.0], vec![2.0, 4.0]]), None);
        assert_eq!(matrix_inverse(&[vec![1e-11]]), None);
        assert_eq!(matrix_inverse(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]), None);
        assert_eq!(matrix_inverse(&[]), None);
        assert_eq!(matrix_inverse(&[vec![1.0, 2.0], vec![3.0]]), None);
        assert_eq!(matrix_inverse(&[vec![f64::NAN]]), None);
    }

    #[test]
    fn determinant_of_triangular_is_diagonal_product() {
        let a = vec![
            vec![3.0, 1.0, 2.0],
            vec![0.0, 2.0, 5.0],
            vec![0.0, 0.0, 4.0],
        ];
        assert!(approx_eq(determinant(&a).unwrap(), 24.0));
        assert_eq!(determinant(&[vec![0.0, 0.0], vec![0.0, 0.0]]), Some(0.0));
    }
}
