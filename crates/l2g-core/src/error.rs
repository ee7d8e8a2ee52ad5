use thiserror::Error;

/// Errors from parsing or verifying an emitted table.
#[derive(Error, Debug)]
pub enum TableError {
    /// A token in the emitted text is not a valid integer.
    #[error("Entrée invalide à la position {index} : {text:?}")]
    Parse {
        /// Flat position of the offending token.
        index: usize,
        /// The token as found in the text.
        text: String,
    },

    /// The flat entry list does not contain exactly 256 values.
    #[error("Longueur invalide : {got} entrées au lieu de 256")]
    WrongLength {
        /// Number of entries found.
        got: usize,
    },

    /// Entry 0 is not the `-1` sentinel.
    #[error("Sentinelle manquante à l'index 0 : {got} au lieu de -1")]
    BadSentinel {
        /// Value found at index 0.
        got: i8,
    },

    /// An entry violates `2^e <= i < 2^(e+1)`.
    #[error("Exposant hors bornes à l'index {index} : {value}")]
    OutOfRange {
        /// Index of the offending entry.
        index: usize,
        /// The entry value.
        value: i8,
    },
}
