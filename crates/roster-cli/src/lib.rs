//! CLI argument parsing for roster.

use camino::Utf8PathBuf;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Browse employees and jobs as sortable, filterable tables")]
pub struct Args {
    /// Data directory holding employees.json and jobs.json
    #[arg(default_value = ".")]
    pub dir: Utf8PathBuf,

    /// Color theme (dark or light)
    #[arg(long, default_value = "dark")]
    pub theme: String,

    /// Append logs to this file instead of discarding them
    #[arg(long)]
    pub log_file: Option<Utf8PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["roster"]);
        assert_eq!(args.dir, Utf8PathBuf::from("."));
        assert_eq!(args.theme, "dark");
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_explicit_dir_and_theme() {
        let args = Args::parse_from(["roster", "/srv/hr", "--theme", "light"]);
        assert_eq!(args.dir, Utf8PathBuf::from("/srv/hr"));
        assert_eq!(args.theme, "light");
    }
}
