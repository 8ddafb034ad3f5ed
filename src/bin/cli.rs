use clap::{Parser, Subcommand};
use form_validator::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "form-validator")]
#[command(about = "Validate form values, field groups and passwords against declarative rules")]
#[command(version)]
struct Cli {
    /// JSON file with message and pattern overrides
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a single value
    Check {
        /// JSON file holding the validation rule
        #[arg(short, long)]
        rule: Option<PathBuf>,
        /// Value to validate
        #[arg(short, long, default_value = "")]
        value: String,
    },
    /// Validate every field of a form
    Group {
        /// JSON file describing the form tree
        #[arg(short, long)]
        form: PathBuf,
        /// JSON file holding the group-level rule
        #[arg(short, long)]
        rule: Option<PathBuf>,
    },
    /// Check password length and character-class diversity
    Password {
        #[arg(short, long)]
        value: String,
        #[arg(long, default_value_t = 8)]
        min: usize,
        #[arg(long, default_value_t = 64)]
        max: usize,
        /// Required number of character classes
        #[arg(long, default_value_t = 3)]
        classes: usize,
    },
    /// Count the character classes present in a value
    Classes {
        #[arg(short, long)]
        value: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = run(cli);
    if let Err(e) = &outcome {
        eprintln!("error: {e}");
    }
    ExitCode::from(exit_status(&outcome))
}

/// 0 for valid input, 1 for invalid input, 2 when the input could not be checked.
fn exit_status(outcome: &Result<bool>) -> u8 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

/// Returns whether the input was valid.
fn run(cli: Cli) -> Result<bool> {
    let validator = match &cli.config {
        Some(path) => Validator::from_config(&ValidatorConfig::from_file(path)?)?,
        None => Validator::new(),
    };

    match cli.command {
        Commands::Check { rule, value } => {
            let rule = load_rule(rule.as_deref())?;
            let outcome = validator.validate(&value, &rule);
            print_json(&outcome)?;
            Ok(outcome.is_valid())
        }
        Commands::Group { form, rule } => {
            let rule = rule.as_deref().map(|path| load_rule(Some(path))).transpose()?;
            let tree = FormTree::from_json(&read(&form)?)?.with_validator(Arc::new(validator.clone()));
            let outcome = validator.validate_group(&tree, rule.as_ref());
            print_json(&outcome)?;
            Ok(outcome.is_valid())
        }
        Commands::Password {
            value,
            min,
            max,
            classes,
        } => {
            let outcome = validator.validate_password(&value, LengthRange::new(min, max), classes);
            print_json(&outcome)?;
            Ok(outcome.is_valid())
        }
        Commands::Classes { value } => {
            println!("{}", number_of_character_classes(&value));
            Ok(true)
        }
    }
}

fn load_rule(path: Option<&Path>) -> Result<ValidationRule> {
    match path {
        Some(path) => ValidationRule::from_json(&read(path)?),
        None => Ok(ValidationRule::default()),
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        FormValidatorError::config(format!("Failed to read {}: {e}", path.display()))
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
