/// Table de log base 2 pour entrées 8 bits, et son émission en texte source.
///
/// This crate contains the precomputed `floor(log2(n))` table for
/// `n` in 0..=255, the run-length emitter that renders it as rows of
/// comma-terminated source literals, and the parse/verify helpers used
/// to cross-check the emitted text.

pub mod emit;
pub mod error;
pub mod table;

pub use emit::emit_table;
pub use error::TableError;
pub use table::{LOG2_TABLE, SENTINEL, TABLE_LEN, floor_log2};
