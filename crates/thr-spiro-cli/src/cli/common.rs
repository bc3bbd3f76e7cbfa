//! Common utilities shared across CLI commands.

use std::path::PathBuf;
use std::str::FromStr;

use thr_spiro::{Config, Generator, Trajectory};

/// Pull the global `--config FILE` flag out of the argument list.
///
/// Returns the config path (if given) and the remaining arguments in order.
pub fn take_config_flag(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let mut config = None;
    let mut rest = Vec::with_capacity(args.len());

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                let path = args.get(i).ok_or("--config requires a file path")?;
                config = Some(path.clone());
            }
            other => rest.push(other.to_string()),
        }
        i += 1;
    }

    Ok((config, rest))
}

/// Read the value following a flag and parse it.
///
/// Advances `i` past the value.
pub fn flag_value<T: FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    *i += 1;
    let raw = args
        .get(*i)
        .ok_or_else(|| format!("{} requires a value", flag))?;
    raw.parse()
        .map_err(|e| format!("invalid value for {}: {:?} ({})", flag, raw, e))
}

/// Output-related flags shared by `preset` and `custom`.
#[derive(Debug, Default)]
pub struct OutputArgs {
    pub name: Option<String>,
    pub dir: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub json: bool,
}

impl OutputArgs {
    /// Try to consume the flag at `args[*i]`. Returns false if it is not an
    /// output flag.
    pub fn parse_flag(&mut self, args: &[String], i: &mut usize) -> Result<bool, String> {
        match args[*i].as_str() {
            "-o" | "--output" => self.name = Some(flag_value(args, i, "--output")?),
            "--dir" => self.dir = Some(flag_value(args, i, "--dir")?),
            "--catalog" => self.catalog = Some(flag_value(args, i, "--catalog")?),
            "--json" => self.json = true,
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Apply `--dir` and `--catalog` on top of a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.dir {
            config.output_dir = dir.clone();
        }
        if let Some(catalog) = &self.catalog {
            config.catalog = Some(catalog.clone());
        }
    }
}

/// Load the YAML config if one was given, else the defaults.
pub fn load_config(path: Option<&str>) -> Result<Config, String> {
    match path {
        Some(path) => Config::load(path).map_err(|e| e.to_string()),
        None => Ok(Config::default()),
    }
}

/// Build a generator, turning library errors into CLI messages.
pub fn build_generator(config: Config) -> Result<Generator, String> {
    Generator::new(config).map_err(|e| e.to_string())
}

/// Print a trajectory to stdout as a JSON array of `{theta, rho}` points.
pub fn print_trajectory_json(trajectory: &Trajectory) -> Result<(), String> {
    let json = serde_json::to_string(trajectory).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}
