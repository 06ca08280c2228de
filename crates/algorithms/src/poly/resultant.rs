//! Resultant of a polynomial against x^N - 1
//!
//! The integer resultant is assembled by CRT from resultants modulo a run of
//! primes. Reconstruction stops once the centered CRT value has been the same
//! for a number of consecutive primes, so the result is probabilistic: it is
//! wrong if the true value only stabilises later. Callers that depend on the
//! value must check it, for example that `rho * f == res` in the ring.

use std::collections::VecDeque;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use super::bigdecimal::BigDecimalPolynomial;
use super::bigint::BigIntPolynomial;
use super::integer::IntegerPolynomial;
use super::primes::PrimeIterator;
use crate::error::{Error, Result};
use pqlat_common::math_common::{mod_inv, mod_pow};

/// Consecutive equal CRT values required by [`IntegerPolynomial::resultant`]
pub const DEFAULT_AGREEMENTS: usize = 3;

/// Resultant and cofactor modulo `modulus`
///
/// `rho * f == res (mod x^N - 1, modulus)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModularResultant {
    pub rho: BigIntPolynomial,
    pub res: BigInt,
    pub modulus: BigInt,
}

impl ModularResultant {
    /// CRT-combine two results with coprime moduli
    pub fn combine(a: &ModularResultant, b: &ModularResultant) -> ModularResultant {
        let modulus = &a.modulus * &b.modulus;
        // x * m_b + y * m_a = 1
        let e = b.modulus.extended_gcd(&a.modulus);
        let ka = &e.x * &b.modulus;
        let kb = &e.y * &a.modulus;

        let rho = a
            .rho
            .coeffs
            .iter()
            .zip(&b.rho.coeffs)
            .map(|(ra, rb)| (ra * &ka + rb * &kb).mod_floor(&modulus))
            .collect();
        let res = (&a.res * &ka + &b.res * &kb).mod_floor(&modulus);

        ModularResultant {
            rho: BigIntPolynomial::from_coeffs(rho),
            res,
            modulus,
        }
    }
}

/// Resultant over the integers, reconstructed modulo `modulus`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resultant {
    /// Cofactor with `rho * f == res (mod x^N - 1)`, centered
    pub rho: BigIntPolynomial,
    /// The resultant, centered
    pub res: BigInt,
    /// Product of the primes used
    pub modulus: BigInt,
}

impl Resultant {
    /// `rho / res` to `places` decimal places, the inverse of f over Q
    pub fn rational_inverse(&self, places: u32) -> Result<BigDecimalPolynomial> {
        if self.res.is_zero() {
            return Err(Error::polynomial(
                "Resultant::rational_inverse",
                "polynomial is not invertible over Q",
            ));
        }
        BigDecimalPolynomial::from_ratio(&self.rho, &self.res, places)
    }
}

impl IntegerPolynomial {
    /// Resultant with x^N - 1, stopping after [`DEFAULT_AGREEMENTS`] equal values
    pub fn resultant(&self) -> Result<Resultant> {
        self.resultant_with(DEFAULT_AGREEMENTS)
    }

    /// Resultant with x^N - 1, stopping after `agreements` equal CRT values
    pub fn resultant_with(&self, agreements: usize) -> Result<Resultant> {
        if agreements == 0 {
            return Err(Error::param("agreements", "must be at least 1"));
        }
        if self.is_empty() {
            return Err(Error::param("N", "polynomial is empty"));
        }

        let mut modular = VecDeque::new();
        let mut prime_product = BigInt::one();
        let mut res = BigInt::one();
        let mut equal_count = 1usize;

        let mut primes = PrimeIterator::new();
        loop {
            let p = primes.next().ok_or(Error::Processing {
                operation: "IntegerPolynomial::resultant",
                details: "prime supply exhausted",
            })?;
            let step = self.resultant_mod(p);
            let p = BigInt::from(p);

            // x * p + y * P = 1
            let e = p.extended_gcd(&prime_product);
            let previous = res.clone();
            let product = &prime_product * &p;
            res = (&res * &e.x * &p + &step.res * &e.y * &prime_product).mod_floor(&product);
            prime_product = product;

            let half = &prime_product / 2;
            if res > half {
                res -= &prime_product;
            }

            modular.push_back(step);

            if res == previous {
                equal_count += 1;
            } else {
                equal_count = 1;
            }
            if equal_count >= agreements {
                break;
            }
        }

        while modular.len() > 1 {
            let (a, b) = match (modular.pop_front(), modular.pop_front()) {
                (Some(a), Some(b)) => (a, b),
                _ => break,
            };
            modular.push_back(ModularResultant::combine(&a, &b));
        }

        let mut rho = modular
            .pop_front()
            .map(|m| m.rho)
            .unwrap_or_else(|| BigIntPolynomial::new(self.len()));
        rho.mod_center(&prime_product);

        Ok(Resultant {
            rho,
            res,
            modulus: prime_product,
        })
    }

    /// Resultant with x^N - 1 modulo the prime `p`
    ///
    /// Runs the Euclidean algorithm on (x^N - 1, f) over Z_p, tracking the
    /// cofactor of f. A zero resultant yields a zero cofactor.
    pub fn resultant_mod(&self, p: u32) -> ModularResultant {
        let n = self.len();
        let pm = p as i64;
        let zero = || ModularResultant {
            rho: BigIntPolynomial::new(n),
            res: BigInt::zero(),
            modulus: BigInt::from(p),
        };

        let m = n + 1;
        let mut a = vec![0i64; m];
        a[0] = pm - 1;
        a[n] = 1;
        let mut b: Vec<i64> = self.coeffs.iter().map(|&c| (c as i64).rem_euclid(pm)).collect();
        b.push(0);
        let mut v1 = vec![0i64; m];
        let mut v2 = vec![0i64; m];
        v2[0] = 1;

        let mut da = n;
        let mut db = degree(&b);
        let mut ta = da;
        let mut r = 1i64;

        while db > 0 {
            let inv = match mod_inv(b[db], pm) {
                Some(inv) => inv,
                None => return zero(),
            };
            let c = inv * a[da] % pm;
            let k = da - db;
            for i in k..m {
                a[i] = (a[i] - b[i - k] * c).rem_euclid(pm);
                v1[i] = (v1[i] - v2[i - k] * c).rem_euclid(pm);
            }

            da = degree(&a);
            if da < db {
                r = r * mod_pow(b[db] as u64, (ta - da) as u64, p as u64) as i64 % pm;
                if ta % 2 == 1 && db % 2 == 1 {
                    r = (pm - r) % pm;
                }
                core::mem::swap(&mut a, &mut b);
                core::mem::swap(&mut v1, &mut v2);
                core::mem::swap(&mut da, &mut db);
                ta = da;
            }
        }

        r = r * mod_pow(b[0] as u64, da as u64, p as u64) as i64 % pm;
        let inv = match mod_inv(b[0], pm) {
            Some(inv) => inv,
            None => return zero(),
        };
        let scale = inv * r % pm;

        for v in &mut v2 {
            *v = *v * scale % pm;
        }
        // x^N = 1
        v2[0] = (v2[0] + v2[n]) % pm;
        v2.truncate(n);

        ModularResultant {
            rho: BigIntPolynomial::from_coeffs(v2.into_iter().map(BigInt::from).collect()),
            res: BigInt::from(r),
            modulus: BigInt::from(p),
        }
    }
}

fn degree(a: &[i64]) -> usize {
    a.iter().rposition(|&x| x != 0).unwrap_or(0)
}
