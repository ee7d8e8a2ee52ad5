use crate::error::TableError;

/// Nombre d'entrées de la table — une par valeur 8 bits.
pub const TABLE_LEN: usize = 256;

/// Sentinelle pour `n = 0` (log2(0) est indéfini).
///
/// Downstream consumers rely on `-1` specifically as the out-of-band
/// marker; do not substitute another value.
pub const SENTINEL: i8 = -1;

/// Lookup table mapping `n` in 0..=255 → `floor(log2(n))`.
///
/// Pre-computed at compile time for O(1) per-lookup cost. Entry 0 is
/// [`SENTINEL`]; every other entry `i` satisfies
/// `2^table[i] <= i < 2^(table[i]+1)`.
///
/// # Example
/// ```
/// use l2g_core::table::{LOG2_TABLE, SENTINEL};
/// assert_eq!(LOG2_TABLE[0], SENTINEL);
/// assert_eq!(LOG2_TABLE[255], 7);
/// ```
pub const LOG2_TABLE: [i8; TABLE_LEN] = build_table();

/// Construit la table par comptage de zéros de tête (bit-length - 1).
const fn build_table() -> [i8; TABLE_LEN] {
    let mut table = [SENTINEL; TABLE_LEN];
    let mut n = 1usize;
    while n < TABLE_LEN {
        table[n] = (usize::BITS - 1 - n.leading_zeros()) as i8;
        n += 1;
    }
    table
}

/// Map an 8-bit value to `floor(log2(n))`, or [`SENTINEL`] for 0.
///
/// # Example
/// ```
/// use l2g_core::table::floor_log2;
/// assert_eq!(floor_log2(0), -1);
/// assert_eq!(floor_log2(1), 0);
/// assert_eq!(floor_log2(200), 7);
/// ```
#[inline(always)]
#[must_use]
pub const fn floor_log2(n: u8) -> i8 {
    LOG2_TABLE[n as usize]
}

/// Vérifie qu'une liste d'entrées est une table log2 valide.
///
/// Checks, in order: length 256, the sentinel at index 0, and the
/// `2^e <= i < 2^(e+1)` bound for every index 1..=255. The bound pins
/// each entry to its exact exponent, so monotonicity follows.
///
/// # Errors
/// Retourne la première violation d'invariant rencontrée.
pub fn verify(entries: &[i8]) -> Result<(), TableError> {
    if entries.len() != TABLE_LEN {
        return Err(TableError::WrongLength { got: entries.len() });
    }
    if entries[0] != SENTINEL {
        return Err(TableError::BadSentinel { got: entries[0] });
    }
    for (i, &e) in entries.iter().enumerate().skip(1) {
        // Borne d'abord l'exposant pour garder les shifts valides.
        if !(0..=7).contains(&e) || (1usize << e) > i || i >= (1usize << (e + 1)) {
            return Err(TableError::OutOfRange { index: i, value: e });
        }
    }
    log::debug!("table vérifiée : {TABLE_LEN} entrées, sentinelle {SENTINEL}");
    Ok(())
}
