/// Non-zero uniform B-spline basis functions on one knot span.
///
/// Returns the `degree + 1` blending weights at local parameter `u` in
/// `[0, 1]` for a span of a uniform knot vector with unit spacing. Entry
/// `r` weights the `r`-th control point of the span. Uses the Cox-de Boor
/// triangular scheme; every denominator equals `j`, so it never divides by
/// zero.
#[allow(clippy::cast_precision_loss)]
pub(super) fn uniform_basis(degree: usize, u: f64) -> Vec<f64> {
    let mut n = vec![0.0; degree + 1];
    let mut left = vec![0.0; degree + 1];
    let mut right = vec![0.0; degree + 1];
    n[0] = 1.0;

    for j in 1..=degree {
        left[j] = u + j as f64 - 1.0;
        right[j] = j as f64 - u;
        let mut saved = 0.0;
        for r in 0..j {
            let temp = n[r] / (right[r + 1] + left[j - r]);
            n[r] = saved + right[r + 1] * temp;
            saved = left[j - r] * temp;
        }
        n[j] = saved;
    }

    n
}
