//! Scalar field callbacks consumed by the extractor.
//!
//! A field maps a 2D point to a float. Every evaluation also receives a
//! caller-owned context `&C` which the extractor forwards untouched; it never
//! inspects or mutates it. The context must outlive the query, which the
//! borrow checker enforces.
//!
//! Fallible closures `Fn(&Point2<f64>, &C) -> Result<f64, E>` implement
//! [`ScalarField`] directly. Plain `f64`-returning closures are wrapped in
//! [`FieldFn`].

use nalgebra::Point2;
use std::convert::Infallible;

/// A scalar field over the plane, parameterized by an opaque context type.
pub trait ScalarField<C: ?Sized> {
    type Error: std::error::Error + Send + Sync + 'static;

    fn value(&self, p: &Point2<f64>, ctx: &C) -> Result<f64, Self::Error>;
}

impl<C, F, E> ScalarField<C> for F
where
    C: ?Sized,
    F: Fn(&Point2<f64>, &C) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    #[inline]
    fn value(&self, p: &Point2<f64>, ctx: &C) -> Result<f64, E> {
        self(p, ctx)
    }
}

/// Adapter for infallible field closures.
#[derive(Clone, Copy, Debug)]
pub struct FieldFn<F>(pub F);

impl<C, F> ScalarField<C> for FieldFn<F>
where
    C: ?Sized,
    F: Fn(&Point2<f64>, &C) -> f64,
{
    type Error = Infallible;

    #[inline]
    fn value(&self, p: &Point2<f64>, ctx: &C) -> Result<f64, Infallible> {
        Ok((self.0)(p, ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct OutsideBrillouinZone;

    impl std::fmt::Display for OutsideBrillouinZone {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "point outside the first Brillouin zone")
        }
    }

    impl std::error::Error for OutsideBrillouinZone {}

    fn eval<C, F: ScalarField<C>>(field: &F, p: Point2<f64>, ctx: &C) -> Result<f64, F::Error> {
        field.value(&p, ctx)
    }

    #[test]
    fn plain_closures_see_the_context() {
        let offset = 2.5f64;
        let field = FieldFn(|p: &Point2<f64>, off: &f64| p.x + p.y + *off);
        let v = eval(&field, Point2::new(1.0, 2.0), &offset).unwrap();
        assert_eq!(v, 5.5);
    }

    #[test]
    fn fallible_closures_propagate_errors() {
        let field = |p: &Point2<f64>, limit: &f64| {
            if p.x.abs() > *limit {
                Err(OutsideBrillouinZone)
            } else {
                Ok(p.x)
            }
        };
        assert_eq!(eval(&field, Point2::new(0.5, 0.0), &1.0).unwrap(), 0.5);
        assert!(eval(&field, Point2::new(3.0, 0.0), &1.0).is_err());
    }
}
