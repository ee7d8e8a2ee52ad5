use clap::Parser;

/// log2gen — émet une table floor(log2) 8 bits en texte source.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
