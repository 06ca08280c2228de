//! Coefficient-wise arithmetic in Z_q[x]/(x^N + 1)

pub(crate) fn add_mod(a: &[u32], b: &[u32], q: u32) -> Vec<u32> {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| ((x as u64 + y as u64) % q as u64) as u32)
        .collect()
}

pub(crate) fn sub_mod(a: &[u32], b: &[u32], q: u32) -> Vec<u32> {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| ((x as u64 + q as u64 - y as u64) % q as u64) as u32)
        .collect()
}
