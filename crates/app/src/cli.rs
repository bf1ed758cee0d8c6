//! Command-line resolution for the visualizer: seed and grid geometry.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_GRID_WIDTH: usize = 20;
pub const DEFAULT_GRID_HEIGHT: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub seed: SeedChoice,
    pub width: usize,
    pub height: usize,
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Entropy seed for launches without `--seed`: wall clock, pid, and a
/// process-local counter, mixed so near-simultaneous launches diverge.
pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

/// Scans `--seed`, `--width`, and `--height` (separate or `=`-inline
/// values). Unrecognized arguments are ignored; duplicate flags and
/// non-numeric values are rejected.
pub fn resolve_options(args: &[String], generated_seed: u64) -> Result<CliOptions, String> {
    let mut seed = None;
    let mut width = None;
    let mut height = None;

    let mut index = 1_usize;
    while index < args.len() {
        let argument = args[index].as_str();

        let (flag, inline_value) = match argument.split_once('=') {
            Some((flag, value)) => (flag, Some(value.to_string())),
            None => (argument, None),
        };

        let slot = match flag {
            "--seed" => &mut seed,
            "--width" => &mut width,
            "--height" => &mut height,
            _ => {
                index += 1;
                continue;
            }
        };

        let value = match inline_value {
            Some(value) => value,
            None => {
                index += 1;
                match args.get(index) {
                    Some(value) => value.clone(),
                    None => return Err(format!("missing value for {flag}")),
                }
            }
        };

        if slot.is_some() {
            return Err(format!("{flag} provided more than once"));
        }
        *slot = Some(parse_numeric_value(flag, &value)?);
        index += 1;
    }

    Ok(CliOptions {
        seed: match seed {
            Some(seed) => SeedChoice::Cli(seed),
            None => SeedChoice::Generated(generated_seed),
        },
        width: width.map_or(DEFAULT_GRID_WIDTH, |value| value as usize),
        height: height.map_or(DEFAULT_GRID_HEIGHT, |value| value as usize),
    })
}

fn parse_numeric_value(flag: &str, raw_value: &str) -> Result<u64, String> {
    raw_value.parse::<u64>().map_err(|_| format!("value '{raw_value}' for {flag} must be a number"))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn defaults_apply_when_no_flags_are_given() {
        let options = resolve_options(&as_args(&["carver"]), 9_876_543).expect("should resolve");
        assert_eq!(options.seed, SeedChoice::Generated(9_876_543));
        assert_eq!(options.width, DEFAULT_GRID_WIDTH);
        assert_eq!(options.height, DEFAULT_GRID_HEIGHT);
    }

    #[test]
    fn parses_flags_with_separate_and_inline_values() {
        let args = as_args(&["carver", "--seed", "4242", "--width=30", "--height", "12"]);
        let options = resolve_options(&args, 1).expect("valid flags should parse");
        assert_eq!(options.seed, SeedChoice::Cli(4_242));
        assert_eq!(options.width, 30);
        assert_eq!(options.height, 12);
    }

    #[test]
    fn unrecognized_arguments_are_ignored() {
        let args = as_args(&["carver", "--verbose", "--seed=7"]);
        let options = resolve_options(&args, 1).expect("unknown flags should be skipped");
        assert_eq!(options.seed, SeedChoice::Cli(7));
    }

    #[test]
    fn errors_when_a_flag_has_no_value() {
        let err = resolve_options(&as_args(&["carver", "--width"]), 1)
            .expect_err("missing value should error");
        assert!(err.contains("missing"), "error should explain the missing value: {err}");
    }

    #[test]
    fn errors_when_a_value_is_not_a_number() {
        let err = resolve_options(&as_args(&["carver", "--height=tall"]), 1)
            .expect_err("non-numeric value should error");
        assert!(err.contains("number"), "error should explain the numeric requirement: {err}");
    }

    #[test]
    fn errors_when_a_flag_repeats() {
        let err = resolve_options(&as_args(&["carver", "--seed=1", "--seed", "2"]), 1)
            .expect_err("duplicate flags should be rejected");
        assert!(err.contains("more than once"), "error should explain the duplicate: {err}");
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        assert_ne!(
            generate_runtime_seed(),
            generate_runtime_seed(),
            "runtime seed generation should vary per call"
        );
    }
}
