use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use l2g_core::table::{LOG2_TABLE, TABLE_LEN};

pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Auto-contrôle des invariants de la table
    l2g_core::table::verify(&LOG2_TABLE).context("table log2 invalide")?;

    // 4. Émettre sur stdout
    log::info!("Émission de la table log2 ({TABLE_LEN} entrées)...");
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    l2g_core::emit_table(&mut out).context("Échec d'écriture sur stdout")?;
    out.flush().context("Échec du flush de stdout")?;

    Ok(())
}
