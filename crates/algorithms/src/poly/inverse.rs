//! Inversion in Z_p[x]/(x^N - 1) for p = 2, 3 and powers of two
//!
//! The small-prime inverses use the almost-inverse algorithm: f is divided by
//! x until its constant term is nonzero, the shift count k is recorded, and the
//! Bezout cofactor b of f against x^N - 1 is rotated by k at the end.

use super::integer::IntegerPolynomial;

impl IntegerPolynomial {
    /// Inverse mod 2, coefficients in `{0, 1}`
    pub fn invert_f2(&self) -> Option<IntegerPolynomial> {
        self.almost_inverse(2)
    }

    /// Inverse mod 3, coefficients in `{0, 1, 2}`
    pub fn invert_f3(&self) -> Option<IntegerPolynomial> {
        self.almost_inverse(3)
    }

    /// Inverse mod `q`, a power of two, coefficients in `[0, q)`
    ///
    /// Starts from the inverse mod 2 and doubles the working modulus with the
    /// Newton step F = F(2 - f F).
    pub fn invert_fq(&self, q: i32) -> Option<IntegerPolynomial> {
        let mut fq = self.invert_f2()?;
        let mut v = 2;
        while v < q {
            v *= 2;
            let ff = self.mult_mod(&fq, v).ok()?.mult_mod(&fq, v).ok()?;
            fq.mult_scalar(2);
            fq.sub(&ff);
            fq.mod_positive(v);
        }
        Some(fq)
    }

    fn almost_inverse(&self, p: i32) -> Option<IntegerPolynomial> {
        let n = self.len();
        if n == 0 {
            return None;
        }

        let mut k = 0usize;
        let mut b = vec![0i32; n + 1];
        b[0] = 1;
        let mut c = vec![0i32; n + 1];
        let mut f: Vec<i32> = self.coeffs.iter().map(|x| x.rem_euclid(p)).collect();
        f.push(0);
        // x^N - 1
        let mut g = vec![0i32; n + 1];
        g[0] = p - 1;
        g[n] = 1;

        loop {
            while f[0] == 0 {
                for i in 1..=n {
                    f[i - 1] = f[i];
                    c[n + 1 - i] = c[n - i];
                }
                f[n] = 0;
                c[0] = 0;
                k += 1;
                if f.iter().all(|&x| x == 0) {
                    return None;
                }
            }

            if f[1..].iter().all(|&x| x == 0) {
                break;
            }

            if degree(&f) < degree(&g) {
                core::mem::swap(&mut f, &mut g);
                core::mem::swap(&mut b, &mut c);
            }

            if p == 3 && f[0] == g[0] {
                sub_assign_mod(&mut f, &g, p);
                sub_assign_mod(&mut b, &c, p);
            } else {
                add_assign_mod(&mut f, &g, p);
                add_assign_mod(&mut b, &c, p);
            }
        }

        // x^N = 1
        b[0] = (b[0] + b[n]) % p;

        // f is now a unit constant, its own inverse mod 2 and mod 3
        let k = k % n;
        let mut inv = vec![0i32; n];
        for i in 0..n {
            inv[(i + n - k) % n] = (f[0] * b[i]) % p;
        }
        Some(IntegerPolynomial::from_coeffs(inv))
    }
}

fn degree(a: &[i32]) -> usize {
    a.iter().rposition(|&x| x != 0).unwrap_or(0)
}

fn add_assign_mod(a: &mut [i32], b: &[i32], p: i32) {
    for (x, &y) in a.iter_mut().zip(b) {
        *x = (*x + y) % p;
    }
}

fn sub_assign_mod(a: &mut [i32], b: &[i32], p: i32) {
    for (x, &y) in a.iter_mut().zip(b) {
        *x = (*x - y).rem_euclid(p);
    }
}
