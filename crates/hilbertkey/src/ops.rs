//! Bit primitives shared by the table generator and the codec.
//!
//! The trailing-zero and population counts are the branchy binary-search and
//! SWAR forms from Hacker's Delight. They turn single-bit axis masks into axis
//! indices, so their results have to agree with `u64::trailing_zeros` and
//! `u64::count_ones` bit for bit.

/// Number of trailing zero bits in a 32-bit word, or `32` when `x == 0`.
pub const fn ntz32(x: u32) -> u32 {
    if x == 0 {
        return 32;
    }
    let mut x = x;
    let mut n = 1;
    if x & 0x0000_ffff == 0 {
        n += 16;
        x >>= 16;
    }
    if x & 0x0000_00ff == 0 {
        n += 8;
        x >>= 8;
    }
    if x & 0x0000_000f == 0 {
        n += 4;
        x >>= 4;
    }
    if x & 0x0000_0003 == 0 {
        n += 2;
        x >>= 2;
    }
    n - (x & 1)
}

/// Number of trailing zero bits in a 64-bit word, or `64` when `x == 0`.
pub const fn ntz64(x: u64) -> u32 {
    if x == 0 {
        return 64;
    }
    let mut x = x;
    let mut n = 1;
    if x & 0x0000_0000_ffff_ffff == 0 {
        n += 32;
        x >>= 32;
    }
    if x & 0x0000_0000_0000_ffff == 0 {
        n += 16;
        x >>= 16;
    }
    if x & 0x0000_0000_0000_00ff == 0 {
        n += 8;
        x >>= 8;
    }
    if x & 0x0000_0000_0000_000f == 0 {
        n += 4;
        x >>= 4;
    }
    if x & 0x0000_0000_0000_0003 == 0 {
        n += 2;
        x >>= 2;
    }
    n - (x & 1) as u32
}

/// Number of set bits in a 32-bit word.
pub const fn pop32(x: u32) -> u32 {
    let mut x = x;
    x = (x & 0x5555_5555) + ((x >> 1) & 0x5555_5555);
    x = (x & 0x3333_3333) + ((x >> 2) & 0x3333_3333);
    x = (x & 0x0f0f_0f0f) + ((x >> 4) & 0x0f0f_0f0f);
    x = (x & 0x00ff_00ff) + ((x >> 8) & 0x00ff_00ff);
    (x & 0x0000_ffff) + ((x >> 16) & 0x0000_ffff)
}

/// Number of set bits in a 64-bit word.
pub const fn pop64(x: u64) -> u32 {
    let mut x = x;
    x = (x & 0x5555_5555_5555_5555) + ((x >> 1) & 0x5555_5555_5555_5555);
    x = (x & 0x3333_3333_3333_3333) + ((x >> 2) & 0x3333_3333_3333_3333);
    x = (x & 0x0f0f_0f0f_0f0f_0f0f) + ((x >> 4) & 0x0f0f_0f0f_0f0f_0f0f);
    x = (x & 0x00ff_00ff_00ff_00ff) + ((x >> 8) & 0x00ff_00ff_00ff_00ff);
    x = (x & 0x0000_ffff_0000_ffff) + ((x >> 16) & 0x0000_ffff_0000_ffff);
    ((x & 0x0000_0000_ffff_ffff) + ((x >> 32) & 0x0000_0000_ffff_ffff)) as u32
}

/// Isolate the lowest set bit of `x` (`0b0101_1000 -> 0b0000_1000`).
#[inline]
pub const fn lowest_bit(x: u64) -> u64 {
    x & x.wrapping_neg()
}

/// Bitmask with the `width` least-significant bits set. Widths of 64 and above
/// saturate to `u64::MAX`.
#[inline]
pub const fn bitmask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Extract `len` bits of `word` starting at bit `pos` (FORTRAN `IBITS`).
///
/// Bits beyond the top of the word read as zero, so any `pos` is accepted.
#[inline]
pub const fn ibits(word: u64, pos: u32, len: u32) -> u64 {
    match word.checked_shr(pos) {
        Some(w) => w & bitmask(len),
        None => 0,
    }
}

/// Convert a binary index to its Binary Reflected Gray Code (BRGC) form.
pub const fn graycode(x: u64) -> u64 {
    x ^ (x >> 1)
}

/// Inverse Gray code: recover binary from a BRGC value `x`.
pub const fn igraycode(x: u64) -> u64 {
    let mut g = x;
    let mut b = x;
    while g != 0 {
        g >>= 1;
        b ^= g;
    }
    b
}
