//! GF(2^8) arithmetic with the reduction polynomial
//! x^8 + x^4 + x^3 + x + 1 (0x11B).

/// Multiply by x: shift left, reduce when the shifted-out bit was set.
pub fn xtime(a: u8) -> u8 {
    let shifted = a << 1;
    if a & 0x80 != 0 { shifted ^ 0x1B } else { shifted }
}

/// Binary ("Russian peasant") multiplication: one xtime step per
/// multiplier bit, conditional accumulation.
pub fn gf_mul(a: u8, b: u8) -> u8 {
    let mut result: u8 = 0;
    let mut a_val = a;
    let mut b_val = b;

    for _ in 0..8 {
        if b_val & 1 != 0 {
            result ^= a_val;
        }
        a_val = xtime(a_val);
        b_val >>= 1;
    }

    result
}
