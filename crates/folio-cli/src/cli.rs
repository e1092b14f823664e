//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use folio_core::HeroProfile;

/// folio: portfolio hero section with a typewriter text cycler
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to hero profile (default: ~/.folio/hero.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Phrase to cycle through; repeat to build the list (replaces the profile's phrases)
    #[arg(short, long = "phrase", value_name = "TEXT")]
    pub phrases: Vec<String>,

    /// Delay between typed characters, in milliseconds
    #[arg(long, value_name = "MS")]
    pub type_ms: Option<u64>,

    /// Delay between deleted characters, in milliseconds
    #[arg(long, value_name = "MS")]
    pub delete_ms: Option<u64>,

    /// Pause after a phrase is fully typed, in milliseconds
    #[arg(long, value_name = "MS")]
    pub hold_ms: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Log file path
    #[arg(long, default_value = "/tmp/folio.log")]
    pub log_file: PathBuf,

    /// Print the effective hero profile as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Print the first STEPS typewriter ticks (virtual time) instead of opening the TUI
    #[arg(long, value_name = "STEPS")]
    pub trace: Option<usize>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded profile
    pub fn apply_overrides(&self, profile: &mut HeroProfile) {
        let typewriter = &mut profile.typewriter;
        if !self.phrases.is_empty() {
            typewriter.phrases = self.phrases.clone();
        }
        if let Some(ms) = self.type_ms {
            typewriter.type_interval_ms = ms;
        }
        if let Some(ms) = self.delete_ms {
            typewriter.delete_interval_ms = ms;
        }
        if let Some(ms) = self.hold_ms {
            typewriter.hold_ms = ms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::CyclerConfig;

    #[test]
    fn test_no_flags_keeps_profile() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        let mut profile = HeroProfile::default();
        cli.apply_overrides(&mut profile);
        assert_eq!(profile, HeroProfile::default());
        assert_eq!(cli.log_file, PathBuf::from("/tmp/folio.log"));
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "folio", "-p", "Hi", "--phrase", "Bye", "--type-ms", "10", "--delete-ms", "5",
            "--hold-ms", "20",
        ])
        .unwrap();

        let mut profile = HeroProfile::default();
        cli.apply_overrides(&mut profile);

        let expected = CyclerConfig::new(["Hi", "Bye"])
            .with_type_interval(10)
            .with_delete_interval(5)
            .with_hold(20);
        assert_eq!(profile.typewriter, expected);
    }

    #[test]
    fn test_interval_override_keeps_phrases() {
        let cli = Cli::try_parse_from(["folio", "--hold-ms", "0"]).unwrap();
        let mut profile = HeroProfile::default();
        cli.apply_overrides(&mut profile);

        assert_eq!(profile.typewriter.phrases, CyclerConfig::hero().phrases);
        assert_eq!(profile.typewriter.hold_ms, 0);
    }

    #[test]
    fn test_trace_flag() {
        let cli = Cli::try_parse_from(["folio", "--trace", "12", "-c", "hero.toml"]).unwrap();
        assert_eq!(cli.trace, Some(12));
        assert_eq!(cli.config, Some(PathBuf::from("hero.toml")));
    }

    #[test]
    fn test_rejects_negative_interval() {
        assert!(Cli::try_parse_from(["folio", "--type-ms", "-5"]).is_err());
    }
}
