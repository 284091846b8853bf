use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use despeckle::{BorderMode, Config};

pub const USAGE: &str = "\
Usage: despeckle [OPTIONS] [INPUT [OUTPUT]]

Applies a parallel 3x3 median filter to an RGB image.

Options:
  -c, --config <FILE>      YAML or JSON config file
  -w, --workers <N>        Number of worker threads / row bands
  -b, --border <MODE>      Border ring contents: fill (black) or copy
  -l, --log-level <LEVEL>  Tracing filter, e.g. info or despeckle=debug
  -h, --help               Print this help";

/// Command line as given, before it is merged with a config file.
#[derive(Debug, Default, PartialEq)]
pub struct CliArgs {
    pub help: bool,
    pub config: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub workers: Option<usize>,
    pub border: Option<BorderMode>,
    pub log_level: Option<String>,
}

impl CliArgs {
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut positional = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = |name: &str| {
                args.next()
                    .with_context(|| format!("Missing value for {name}"))
            };

            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "-c" | "--config" => parsed.config = Some(PathBuf::from(value(arg.as_str())?)),
                "-w" | "--workers" => {
                    let raw = value(arg.as_str())?;
                    let workers = raw
                        .parse()
                        .with_context(|| format!("Invalid worker count: {raw}"))?;
                    parsed.workers = Some(workers);
                }
                "-b" | "--border" => {
                    parsed.border = Some(match value(arg.as_str())?.as_str() {
                        "fill" => BorderMode::default(),
                        "copy" => BorderMode::Copy,
                        other => bail!("Unknown border mode: {other}"),
                    });
                }
                "-l" | "--log-level" => parsed.log_level = Some(value(arg.as_str())?),
                flag if flag.starts_with('-') && flag.len() > 1 => bail!("Unknown option: {flag}"),
                _ => positional.push(PathBuf::from(&arg)),
            }
        }

        let mut positional = positional.into_iter();
        parsed.input = positional.next();
        parsed.output = positional.next();
        if let Some(extra) = positional.next() {
            bail!("Unexpected argument: {}", extra.display());
        }

        Ok(parsed)
    }

    /// Defaults, then the config file, then explicit command line values.
    pub fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(input) = self.input {
            config.input_path = input;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(workers) = self.workers {
            config.num_workers = workers;
        }
        if let Some(border) = self.border {
            config.border = border;
        }
        if let Some(log_level) = self.log_level {
            config.log_level = log_level;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs> {
        CliArgs::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        let config = parse(&[]).unwrap().into_config().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_positional_paths_and_flags() {
        let args = parse(&["in.png", "-w", "8", "out.png", "--border", "copy"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("in.png")));
        assert_eq!(args.output, Some(PathBuf::from("out.png")));
        assert_eq!(args.workers, Some(8));

        let config = args.into_config().unwrap();
        assert_eq!(config.num_workers, 8);
        assert_eq!(config.border, BorderMode::Copy);
        assert_eq!(config.output_path, PathBuf::from("out.png"));
    }

    #[test]
    fn test_help_flag() {
        assert!(parse(&["--help"]).unwrap().help);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse(&["--workers"]).is_err());
        assert!(parse(&["--workers", "many"]).is_err());
        assert!(parse(&["--border", "mirror"]).is_err());
        assert!(parse(&["--frobnicate"]).is_err());
        assert!(parse(&["a.png", "b.png", "c.png"]).is_err());
    }
}
