use super::options::RefineOptions;
use crate::crossing::{have_opposite_signs, Crossing};
use crate::error::IsolineError;

/// Result of refining one bracket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootEstimate {
    /// Zero-crossing coordinate along the bracket axis.
    pub root: f64,
    /// Bisection steps taken.
    pub iterations: usize,
    /// `false` when the iteration cap stopped the search before the bracket
    /// shrank to `eps`.
    pub converged: bool,
}

/// Linear interpolation of the zero between `(lo, v_lo)` and `(hi, v_hi)`.
///
/// Written for opposite-sign endpoints. Returns `None` when `v_lo == v_hi`.
#[inline]
pub fn internal_division(lo: f64, hi: f64, v_lo: f64, v_hi: f64) -> Option<f64> {
    let denom = v_lo - v_hi;
    if denom == 0.0 {
        return None;
    }
    let c = v_lo / denom;
    Some(c * hi + (1.0 - c) * lo)
}

/// Bisect `crossing` down to `opts.eps`, then apply the linear correction on
/// the final bracket.
///
/// `eval` returns the shifted field at a coordinate along the crossing axis.
/// Each step keeps whichever half still pairs the midpoint with an
/// opposite-sign endpoint, testing against the upper end first.
pub fn bisect_root<G>(
    crossing: &Crossing,
    opts: &RefineOptions,
    mut eval: G,
) -> Result<RootEstimate, IsolineError>
where
    G: FnMut(f64) -> Result<f64, IsolineError>,
{
    let (mut x1, mut x2) = (crossing.lo, crossing.hi);
    let (mut v1, mut v2) = (crossing.v_lo, crossing.v_hi);
    let mut iterations = 0usize;

    while x2 - x1 > opts.eps && iterations < opts.max_iter {
        let xmid = (x1 + x2) / 2.0;
        let vmid = eval(xmid)?;
        if have_opposite_signs(vmid, v2) {
            x1 = xmid;
            v1 = vmid;
        } else {
            x2 = xmid;
            v2 = vmid;
        }
        iterations += 1;
    }

    let root = internal_division(x1, x2, v1, v2).ok_or(IsolineError::DegenerateBracket {
        axis: crossing.axis,
        node: crossing.node,
        value: v1,
    })?;
    Ok(RootEstimate {
        root,
        iterations,
        converged: !(x2 - x1 > opts.eps),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossing::Axis;

    fn bracket(lo: f64, hi: f64, v_lo: f64, v_hi: f64) -> Crossing {
        Crossing {
            axis: Axis::X,
            node: (4, 7),
            fixed: 0.0,
            lo,
            hi,
            v_lo,
            v_hi,
        }
    }

    #[test]
    fn linear_correction_hits_exact_root_of_a_line() {
        assert_eq!(internal_division(0.0, 1.0, -1.0, 1.0), Some(0.5));
        assert_eq!(internal_division(2.0, 4.0, -3.0, 1.0), Some(3.5));
        assert_eq!(internal_division(0.0, 1.0, 2.0, 2.0), None);
    }

    #[test]
    fn converges_on_sqrt_two() {
        let c = bracket(1.0, 2.0, -1.0, 2.0);
        let opts = RefineOptions::default();
        let est = bisect_root(&c, &opts, |x| Ok(x * x - 2.0)).unwrap();
        assert!(est.converged);
        assert!((est.root - 2f64.sqrt()).abs() < opts.eps, "root={}", est.root);
        // 1 / 2^20 < 1e-6 <= 1 / 2^19
        assert_eq!(est.iterations, 20);
    }

    #[test]
    fn iteration_cap_stops_early() {
        let c = bracket(0.0, 1.0, -1.0, 3.0);
        let opts = RefineOptions::default().with_max_iter(2);
        let mut calls = 0;
        let est = bisect_root(&c, &opts, |x| {
            calls += 1;
            Ok(4.0 * x - 1.0)
        })
        .unwrap();
        assert_eq!(calls, 2);
        assert_eq!(est.iterations, 2);
        assert!(!est.converged);
        // bracket [0, 0.25] with values -1 and 0 interpolates onto 0.25
        assert_eq!(est.root, 0.25);
    }

    #[test]
    fn zero_cap_is_pure_interpolation() {
        let c = bracket(0.0, 1.0, -1.0, 3.0);
        let opts = RefineOptions::default().with_max_iter(0);
        let est = bisect_root(&c, &opts, |_| panic!("no evaluation expected")).unwrap();
        assert_eq!(est.root, 0.25);
        assert!(!est.converged);
    }

    #[test]
    fn sub_ulp_tolerance_terminates_via_cap() {
        let c = bracket(1.0, 2.0, -1.0, 2.0);
        let opts = RefineOptions::default().with_eps(0.0).with_max_iter(200);
        let est = bisect_root(&c, &opts, |x| Ok(x * x - 2.0)).unwrap();
        assert_eq!(est.iterations, 200);
        assert!(!est.converged);
        assert!((est.root - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn degenerate_final_bracket_is_reported() {
        // Endpoints claim a sign change but share a value.
        let c = bracket(0.0, 1.0, 1.0, 1.0);
        let opts = RefineOptions::default().with_max_iter(0);
        let err = bisect_root(&c, &opts, |_| Ok(0.0)).unwrap_err();
        assert!(matches!(
            err,
            IsolineError::DegenerateBracket {
                axis: Axis::X,
                node: (4, 7),
                ..
            }
        ));
    }

    #[test]
    fn evaluation_errors_abort_the_search() {
        let c = bracket(0.0, 1.0, -1.0, 1.0);
        let err = bisect_root(&c, &RefineOptions::default(), |x| {
            Err(IsolineError::field(
                nalgebra::Point2::new(x, 0.0),
                "solver diverged",
            ))
        })
        .unwrap_err();
        assert!(matches!(err, IsolineError::FieldEvaluation { .. }));
    }
}
