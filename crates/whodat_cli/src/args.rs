use std::path::PathBuf;

use whodat::pricing::{parse_numeric_input, PricingInputs};

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Price { inputs: PricingInputs, json: bool },
    Guess { seed: Option<u64>, reveal: bool },
    Config,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cli {
    pub command: Command,
    pub verbose: bool,
    pub config_path: Option<PathBuf>,
}

pub fn usage_text() -> &'static str {
    "whodat - Pokémon reveal and toy pricing from the terminal

Usage: whodat [-v] [--config <file>] <command> [args]

Commands:
  price <base> <reduction%> <shipping> [--json]
                        Sell price at a 50% profit margin
  guess [--seed N] [--reveal]
                        Fetch a random Pokémon, reveal it on Enter
  config                Show the config file path and effective settings
  help                  Show this message

Environment:
  WHODAT_CATALOG_URL    Override the catalog API root"
}

/// Parse everything after the program name.
pub fn parse_args(args: &[String]) -> Result<Cli, CliError> {
    let mut verbose = false;
    let mut config_path = None;
    let mut rest: Vec<&str> = Vec::new();

    let mut it = args.iter().map(String::as_str);
    while let Some(a) = it.next() {
        match a {
            "-v" | "--verbose" => verbose = true,
            "--config" => {
                let p = it
                    .next()
                    .ok_or_else(|| CliError::usage("--config needs a file path"))?;
                config_path = Some(PathBuf::from(p));
            }
            _ => rest.push(a),
        }
    }

    let command = match rest.first().copied() {
        None | Some("help") | Some("-h") | Some("--help") => Command::Help,
        Some("price") => parse_price(&rest[1..])?,
        Some("guess") => parse_guess(&rest[1..])?,
        Some("config") => Command::Config,
        Some(other) => return Err(CliError::usage(format!("unknown command '{other}'"))),
    };

    Ok(Cli {
        command,
        verbose,
        config_path,
    })
}

fn parse_price(args: &[&str]) -> Result<Command, CliError> {
    let json = args.contains(&"--json");
    let numbers: Vec<&str> = args.iter().copied().filter(|a| *a != "--json").collect();
    let [base, reduction, shipping] = numbers.as_slice() else {
        return Err(CliError::usage(
            "price needs exactly three values: <base> <reduction%> <shipping>",
        ));
    };

    // Same leniency as the web form: unparseable text becomes NaN.
    Ok(Command::Price {
        inputs: PricingInputs::new(
            parse_numeric_input(base),
            parse_numeric_input(reduction),
            parse_numeric_input(shipping),
        ),
        json,
    })
}

fn parse_guess(args: &[&str]) -> Result<Command, CliError> {
    let mut seed = None;
    let mut reveal = false;

    let mut it = args.iter().copied();
    while let Some(a) = it.next() {
        match a {
            "--reveal" => reveal = true,
            "--seed" => {
                let v = it
                    .next()
                    .ok_or_else(|| CliError::usage("--seed needs a number"))?;
                let n = v
                    .parse::<u64>()
                    .map_err(|_| CliError::usage(format!("--seed expects an integer, got '{v}'")))?;
                seed = Some(n);
            }
            other => return Err(CliError::usage(format!("unexpected argument '{other}'"))),
        }
    }

    Ok(Command::Guess { seed, reveal })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn no_arguments_means_help() {
        assert_eq!(parse_args(&[]).unwrap().command, Command::Help);
    }

    #[test]
    fn price_takes_three_numbers() {
        let cli = parse_args(&args("price 100 10 5")).unwrap();
        assert_eq!(
            cli.command,
            Command::Price {
                inputs: PricingInputs::new(100.0, 10.0, 5.0),
                json: false
            }
        );
    }

    #[test]
    fn price_json_flag_can_go_anywhere() {
        let cli = parse_args(&args("price --json 1 2 3")).unwrap();
        assert!(matches!(cli.command, Command::Price { json: true, .. }));
    }

    #[test]
    fn price_with_wrong_arity_is_a_usage_error() {
        assert!(matches!(
            parse_args(&args("price 1 2")),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn non_numeric_price_input_becomes_nan() {
        let cli = parse_args(&args("price abc 0 0")).unwrap();
        match cli.command {
            Command::Price { inputs, .. } => assert!(inputs.base_price.is_nan()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn guess_flags_and_globals() {
        let cli = parse_args(&args("-v --config /tmp/w.json guess --seed 42 --reveal")).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config_path, Some(PathBuf::from("/tmp/w.json")));
        assert_eq!(
            cli.command,
            Command::Guess {
                seed: Some(42),
                reveal: true
            }
        );
    }

    #[test]
    fn bad_seed_and_unknown_command_are_rejected() {
        assert!(parse_args(&args("guess --seed x")).is_err());
        assert!(parse_args(&args("guess --seed")).is_err());
        assert!(parse_args(&args("dance")).is_err());
    }
}
