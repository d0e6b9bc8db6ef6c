use crate::infrastructure::clipboard::ClipboardBackend;
use crate::theme::PaletteType;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "gitbuddy",
    version,
    about = "Browse common git commands, fill in their placeholders and copy them"
)]
pub struct Cli {
    /// Start with this search term
    pub search: Vec<String>,

    /// Config file (default: ~/.config/gitbuddy/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub theme: Option<PaletteType>,

    /// Where copied commands go
    #[arg(long, value_enum)]
    pub clipboard: Option<ClipboardBackend>,

    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    #[must_use]
    pub fn initial_search(&self) -> Option<String> {
        (!self.search.is_empty()).then(|| self.search.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["gitbuddy"]);
        assert_eq!(cli.initial_search(), None);
        assert!(cli.theme.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn test_flags_and_search_words() {
        let cli = Cli::parse_from([
            "gitbuddy",
            "--theme",
            "catppuccinmocha",
            "--clipboard",
            "osc52",
            "--debug",
            "set",
            "upstream",
        ]);
        assert_eq!(cli.theme, Some(PaletteType::CatppuccinMocha));
        assert_eq!(cli.clipboard, Some(ClipboardBackend::Osc52));
        assert!(cli.debug);
        assert_eq!(cli.initial_search().as_deref(), Some("set upstream"));
    }

    #[test]
    fn test_rejects_unknown_theme() {
        assert!(Cli::try_parse_from(["gitbuddy", "--theme", "solarized"]).is_err());
    }
}
