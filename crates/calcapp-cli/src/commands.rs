//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};

/// CalcApp: interactive calculator for exact decimal arithmetic
#[derive(Parser, Debug)]
#[command(name = "calcapp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Diagnostic log verbosity on stderr (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (no diagnostic logging)
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output for warnings (auto, always, never)
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorArg,

    /// Primary decimal separator for operands; "." is always accepted too
    #[arg(long, value_enum, default_value = "invariant")]
    pub locale: LocaleArg,
}

/// Color argument
#[derive(ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Numeric locale argument
#[derive(ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum LocaleArg {
    /// "." decimal separator
    #[default]
    Invariant,
    /// "," decimal separator
    Comma,
}

impl From<LocaleArg> for calcapp::NumberLocale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Invariant => Self::Invariant,
            LocaleArg::Comma => Self::Comma,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;
    use calcapp::NumberLocale;

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_defaults() {
            let cli = Cli::parse_from(["calcapp"]);
            assert_eq!(cli.verbose, 0);
            assert!(!cli.quiet);
            assert_eq!(cli.color, ColorArg::Auto);
            assert_eq!(cli.locale, LocaleArg::Invariant);
        }

        #[test]
        fn test_parse_verbose_count() {
            let cli = Cli::parse_from(["calcapp", "-vv"]);
            assert_eq!(cli.verbose, 2);
        }

        #[test]
        fn test_parse_quiet() {
            let cli = Cli::parse_from(["calcapp", "--quiet"]);
            assert!(cli.quiet);
        }

        #[test]
        fn test_parse_color_never() {
            let cli = Cli::parse_from(["calcapp", "--color", "never"]);
            assert_eq!(cli.color, ColorArg::Never);
        }

        #[test]
        fn test_parse_comma_locale() {
            let cli = Cli::parse_from(["calcapp", "--locale", "comma"]);
            assert_eq!(cli.locale, LocaleArg::Comma);
        }

        #[test]
        fn test_reject_unknown_locale() {
            assert!(Cli::try_parse_from(["calcapp", "--locale", "klingon"]).is_err());
        }

        #[test]
        fn test_cli_definition_is_consistent() {
            use clap::CommandFactory;
            Cli::command().debug_assert();
        }
    }

    mod conversion_tests {
        use super::*;

        #[test]
        fn test_color_arg_into_choice() {
            assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
            assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
            assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
        }

        #[test]
        fn test_locale_arg_into_locale() {
            assert_eq!(
                NumberLocale::from(LocaleArg::Invariant),
                NumberLocale::Invariant
            );
            assert_eq!(NumberLocale::from(LocaleArg::Comma), NumberLocale::Comma);
        }
    }
}
