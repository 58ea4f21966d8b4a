//! Reducing a rational expression with the GCD engine.
//!
//! Builds the ratio (x^2 y + x y^2) / (x^2 - y^2), cancels the common
//! factor x + y, and prints the engine's cache diagnostics.

use darboux::prelude::*;

fn main() {
    let x = FlatPoly::var(0, 2);
    let y = FlatPoly::var(1, 2);

    // numerator: x^2 y + x y^2, denominator: x^2 - y^2
    let numerator = x.mul(&x).mul(&y).add(&x.mul(&y).mul(&y));
    let denominator = x.mul(&x).sub(&y.mul(&y));

    let engine = GcdEngine::new();
    let n = Coeff::from_poly(numerator.clone());
    let d = Coeff::from_poly(denominator.clone());

    let g = engine.gcd(&n, &d).expect("gcd of exact polynomials");
    println!("gcd      = {g}");

    let reduced_n = n.checked_div_exact(&g).expect("gcd divides numerator");
    let reduced_d = d.checked_div_exact(&g).expect("gcd divides denominator");
    println!("numerator   {numerator}  ->  {reduced_n}");
    println!("denominator {denominator}  ->  {reduced_d}");

    println!("stats: {}", engine.stats().snapshot());
}
