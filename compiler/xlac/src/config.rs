//! Run configuration assembled from command-line flags and the environment.

use std::path::{Path, PathBuf};

use xla_diagnostic::emitter::ColorMode;
use xla_eval::{
    DirectoryResources, Interpreter, SharedPrintHandler, UnboundAtoms, DEFAULT_MAX_DEPTH,
};

use crate::CliError;

/// Environment variable naming the resource directory.
pub const RESOURCES_ENV: &str = "XLA_RESOURCES";

/// Directory used when neither the flag nor the variable names one.
pub const DEFAULT_RESOURCES_DIR: &str = "resources";

/// Everything a command needs besides the source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub path: PathBuf,
    /// Resource directory to load, if any.
    pub resources: Option<PathBuf>,
    /// Unbound untyped atoms are errors instead of literals.
    pub strict: bool,
    pub color: ColorMode,
    pub max_depth: usize,
}

impl RunConfig {
    /// Defaults for `path`: no resources, literal atoms, automatic color.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RunConfig {
            path: path.into(),
            resources: None,
            strict: false,
            color: ColorMode::Auto,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Build a config from the arguments following the subcommand.
    ///
    /// The resource directory comes from `--resources`, then `XLA_RESOURCES`,
    /// then `./resources` when that directory exists.
    pub fn from_args(args: &[String]) -> Result<Self, CliError> {
        let env_resources = std::env::var_os(RESOURCES_ENV).map(PathBuf::from);
        let mut config = Self::from_args_and_env(args, env_resources)?;
        if config.resources.is_none() && Path::new(DEFAULT_RESOURCES_DIR).is_dir() {
            config.resources = Some(PathBuf::from(DEFAULT_RESOURCES_DIR));
        }
        Ok(config)
    }

    /// [`RunConfig::from_args`] with the environment passed in and no
    /// filesystem probing.
    pub fn from_args_and_env(
        args: &[String],
        env_resources: Option<PathBuf>,
    ) -> Result<Self, CliError> {
        let mut path = None;
        let mut resources = None;
        let mut strict = false;
        let mut color = ColorMode::Auto;
        let mut max_depth = DEFAULT_MAX_DEPTH;

        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();
            if arg == "--resources" {
                let dir = args
                    .get(i + 1)
                    .ok_or_else(|| CliError::MissingValue(arg.to_owned()))?;
                resources = Some(PathBuf::from(dir));
                i += 2;
                continue;
            }

            if let Some(dir) = arg.strip_prefix("--resources=") {
                resources = Some(PathBuf::from(dir));
            } else if arg == "--strict" {
                strict = true;
            } else if let Some(value) = arg.strip_prefix("--color=") {
                color = ColorMode::parse(value).ok_or_else(|| invalid("--color", value))?;
            } else if let Some(value) = arg.strip_prefix("--max-depth=") {
                max_depth = value
                    .parse()
                    .ok()
                    .filter(|&n: &usize| n > 0)
                    .ok_or_else(|| invalid("--max-depth", value))?;
            } else if arg.starts_with('-') {
                return Err(CliError::UnknownOption(arg.to_owned()));
            } else if path.is_none() {
                path = Some(PathBuf::from(arg));
            } else {
                return Err(CliError::UnknownOption(arg.to_owned()));
            }
            i += 1;
        }

        Ok(RunConfig {
            path: path.ok_or(CliError::MissingPath)?,
            resources: resources.or(env_resources),
            strict,
            color,
            max_depth,
        })
    }

    /// The path as shown in diagnostics.
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    /// An interpreter configured from this run: output sink, resource
    /// table, unbound-atom policy and depth limit.
    pub fn interpreter(&self, print_handler: SharedPrintHandler) -> Result<Interpreter, CliError> {
        let policy = if self.strict {
            UnboundAtoms::Error
        } else {
            UnboundAtoms::Literal
        };
        let mut builder = Interpreter::builder()
            .print_handler(print_handler)
            .unbound_atoms(policy)
            .max_depth(self.max_depth);
        if let Some(dir) = &self.resources {
            builder = builder.resources(DirectoryResources::load(dir)?);
        }
        Ok(builder.build())
    }
}

fn invalid(flag: &str, value: &str) -> CliError {
    CliError::InvalidValue {
        flag: flag.to_owned(),
        value: value.to_owned(),
    }
}
