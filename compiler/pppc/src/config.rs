//! Command-line configuration.

use std::path::PathBuf;

use ppp_diagnostic::emitter::ColorMode;

/// Source file read when none is given.
pub const DEFAULT_SOURCE: &str = "main.ppp";

/// What the driver was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Compile and interpret (the default).
    Run,
    /// Stop after type checking.
    Check,
    /// Dump the token stream.
    Lex,
    /// Dump the expression forest.
    Tree,
    /// Dump the linearized program.
    Ops,
    /// Print the long explanation of an error code.
    Explain(String),
    Help,
    Version,
}

/// Settings shared by every file-based command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub path: PathBuf,
    pub color: ColorMode,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            path: PathBuf::from(DEFAULT_SOURCE),
            color: ColorMode::Auto,
        }
    }
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub config: RunConfig,
}

impl Invocation {
    /// Parse arguments (program name excluded).
    ///
    /// The first bare word may name a command; the next bare word is the
    /// source path. `--color` may appear anywhere.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, String> {
        let mut command = None;
        let mut path = None;
        let mut config = RunConfig::default();
        let mut args = args.iter().map(AsRef::as_ref);

        while let Some(arg) = args.next() {
            if let Some(mode) = arg.strip_prefix("--color=") {
                config.color = mode.parse()?;
                continue;
            }
            match arg {
                "--color" => {
                    let mode = args.next().ok_or("`--color` needs a value")?;
                    config.color = mode.parse()?;
                }
                "--explain" | "explain" if command.is_none() => {
                    let code = args.next().ok_or("`--explain` needs an error code")?;
                    command = Some(Command::Explain(code.to_string()));
                }
                "help" | "--help" | "-h" if command.is_none() => command = Some(Command::Help),
                "version" | "--version" | "-V" if command.is_none() => {
                    command = Some(Command::Version);
                }
                "run" | "check" | "lex" | "tree" | "ops" if command.is_none() && path.is_none() => {
                    command = Some(match arg {
                        "check" => Command::Check,
                        "lex" => Command::Lex,
                        "tree" => Command::Tree,
                        "ops" => Command::Ops,
                        _ => Command::Run,
                    });
                }
                flag if flag.starts_with('-') => return Err(format!("unknown option `{flag}`")),
                file if path.is_none() => path = Some(PathBuf::from(file)),
                extra => return Err(format!("unexpected argument `{extra}`")),
            }
        }

        if let Some(path) = path {
            config.path = path;
        }
        Ok(Invocation {
            command: command.unwrap_or(Command::Run),
            config,
        })
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Invocation {
        Invocation::parse(args).unwrap()
    }

    #[test]
    fn test_no_arguments_runs_main() {
        let inv = parse(&[]);
        assert_eq!(inv.command, Command::Run);
        assert_eq!(inv.config, RunConfig::default());
        assert_eq!(inv.config.path, PathBuf::from("main.ppp"));
    }

    #[test]
    fn test_commands_with_paths() {
        assert_eq!(parse(&["run", "a.ppp"]).config.path, PathBuf::from("a.ppp"));
        assert_eq!(parse(&["check", "b.ppp"]).command, Command::Check);
        assert_eq!(parse(&["lex"]).command, Command::Lex);
        assert_eq!(parse(&["tree", "x"]).command, Command::Tree);
        assert_eq!(parse(&["ops", "x"]).command, Command::Ops);
    }

    #[test]
    fn test_bare_path_runs_it() {
        let inv = parse(&["demo.ppp"]);
        assert_eq!(inv.command, Command::Run);
        assert_eq!(inv.config.path, PathBuf::from("demo.ppp"));
    }

    #[test]
    fn test_color_forms() {
        assert_eq!(parse(&["--color=never"]).config.color, ColorMode::Never);
        assert_eq!(
            parse(&["check", "--color", "always", "f.ppp"]).config.color,
            ColorMode::Always
        );
        assert!(Invocation::parse(&["--color=loud"]).is_err());
        assert!(Invocation::parse(&["--color"]).is_err());
    }

    #[test]
    fn test_explain() {
        assert_eq!(
            parse(&["--explain", "E2001"]).command,
            Command::Explain("E2001".to_string())
        );
        assert!(Invocation::parse(&["--explain"]).is_err());
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse(&["help"]).command, Command::Help);
        assert_eq!(parse(&["-h"]).command, Command::Help);
        assert_eq!(parse(&["--version"]).command, Command::Version);
    }

    #[test]
    fn test_rejects_unknown_and_extra_arguments() {
        assert_eq!(
            Invocation::parse(&["--fast"]).unwrap_err(),
            "unknown option `--fast`"
        );
        assert_eq!(
            Invocation::parse(&["run", "a.ppp", "b.ppp"]).unwrap_err(),
            "unexpected argument `b.ppp`"
        );
    }

    #[test]
    fn test_command_word_after_path_is_a_second_path() {
        assert!(Invocation::parse(&["a.ppp", "check"]).is_err());
    }
}
