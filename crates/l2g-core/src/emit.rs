use std::io::{self, Write};

use crate::error::TableError;
use crate::table::TABLE_LEN;

/// Largeur d'une rangée régulière — 16 colonnes, comme la déclaration cible.
const ROW_WIDTH: usize = 16;

/// Rangées fixes pour les index 0..=15.
///
/// The low indices do not follow the power-of-two rows-of-16 pattern:
/// the sentinel sits at 0, and exponents 0 and 1 share a row. They are
/// transcribed verbatim instead of generated.
const HEAD_ROWS: [&[i8]; 3] = [
    &[-1, 0, 1, 1],
    &[2, 2, 2, 2],
    &[3, 3, 3, 3, 3, 3, 3, 3],
];

/// Émet la table log2 complète sur `out`, par plages d'exposant.
///
/// Each row is the values joined by `", "` with a trailing comma and
/// newline, so rows splice directly into an array initializer. For
/// exponent `k >= 4` the range `[2^k, 2^(k+1))` holds `2^k` identical
/// entries, emitted as `2^k / 16` rows of 16 repeated `k`s.
///
/// Deterministic: two calls produce byte-identical output.
///
/// # Errors
/// Propage toute erreur d'écriture sur `out`.
///
/// # Example
/// ```
/// let mut buf = Vec::new();
/// l2g_core::emit_table(&mut buf).unwrap();
/// assert!(buf.starts_with(b"-1, 0, 1, 1,\n"));
/// ```
pub fn emit_table<W: Write>(out: &mut W) -> io::Result<()> {
    for row in HEAD_ROWS {
        write_row(out, row)?;
    }
    for k in 4..=7i8 {
        let rows = (1usize << k) / ROW_WIDTH;
        for _ in 0..rows {
            write_row(out, &[k; ROW_WIDTH])?;
        }
    }
    Ok(())
}

/// Écrit une rangée : valeurs jointes par `", "`, virgule finale, newline.
fn write_row<W: Write>(out: &mut W, values: &[i8]) -> io::Result<()> {
    let mut first = true;
    for v in values {
        if first {
            write!(out, "{v}")?;
            first = false;
        } else {
            write!(out, ", {v}")?;
        }
    }
    writeln!(out, ",")
}

/// Reconstruit la liste plate d'entrées depuis un texte émis.
///
/// Splits on commas across all lines; trailing commas leave empty
/// tokens, which are skipped.
///
/// # Errors
/// Retourne [`TableError::Parse`] au premier jeton non entier.
pub fn parse_entries(text: &str) -> Result<Vec<i8>, TableError> {
    let mut entries = Vec::with_capacity(TABLE_LEN);
    for token in text.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value = token.parse::<i8>().map_err(|_| TableError::Parse {
            index: entries.len(),
            text: token.to_string(),
        })?;
        entries.push(value);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{LOG2_TABLE, verify};

    fn emitted() -> String {
        let mut buf = Vec::new();
        emit_table(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn parses_back_to_the_table() {
        let entries = parse_entries(&emitted()).unwrap();
        assert_eq!(entries.len(), TABLE_LEN);
        assert_eq!(entries.as_slice(), &LOG2_TABLE[..]);
        assert!(verify(&entries).is_ok());
    }

    #[test]
    fn row_structure_matches_exponent_ranges() {
        let text = emitted();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], "-1, 0, 1, 1,");
        assert_eq!(lines[1], "2, 2, 2, 2,");
        assert_eq!(lines[2], "3, 3, 3, 3, 3, 3, 3, 3,");
        for line in &lines[3..] {
            assert_eq!(line.split(", ").count(), 16);
        }
        for line in &lines {
            assert!(line.ends_with(','), "rangée sans virgule finale : {line:?}");
        }
    }

    #[test]
    fn emission_is_idempotent() {
        assert_eq!(emitted(), emitted());
    }

    #[test]
    fn run_lengths_double_per_exponent() {
        let text = emitted();
        for (k, expected_rows) in [(4, 1usize), (5, 2), (6, 4), (7, 8)] {
            let row = format!("{k}, ").repeat(15) + &format!("{k},");
            let count = text.lines().filter(|l| *l == row).count();
            assert_eq!(count, expected_rows, "exposant {k}");
        }
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = parse_entries("1, 2, trois, 4,").unwrap_err();
        assert!(matches!(err, TableError::Parse { index: 2, .. }));
    }

    #[test]
    fn parse_tolerates_trailing_commas_and_blank_lines() {
        let entries = parse_entries("-1, 0,\n\n1, 1,\n").unwrap();
        assert_eq!(entries, vec![-1, 0, 1, 1]);
    }
}
