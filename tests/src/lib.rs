//! Cross-module suites for `decfmt-lib`.
//!
//! Each suite generates one `#[test]` per case so a failure names the exact
//! value that broke.

#![no_std]

#[cfg(test)]
mod extreme_tests;

/// `POWERS_OF_TEN[i] == 10^i` for every power that fits in a `u64`.
pub const POWERS_OF_TEN: [u64; 20] = {
    let mut table = [1u64; 20];
    let mut i = 1;
    while i < table.len() {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
};
