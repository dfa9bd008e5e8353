//! CLI entry point for vouch-probe.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! Checks are evaluated in `probe`, plans are resolved by `vouch-settings`.

mod probe;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use probe::CheckForm;
use vouch_core::PolicyKind;
use vouch_settings::{Overrides, ProbeCase};

#[derive(Parser, Debug)]
#[command(
    name = "vouch-probe",
    version,
    about = "Evaluate vouch checks and observe how each policy reacts"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check `value <= bound` once under the given policy.
    Run {
        /// Policy to apply (ignore|assume|verify).
        #[arg(long)]
        policy: PolicyKind,

        #[arg(long, allow_negative_numbers = true)]
        value: i64,

        #[arg(long, allow_negative_numbers = true)]
        bound: i64,

        /// Message reported when a verify check fails.
        #[arg(long, default_value = "")]
        message: String,

        /// Entry point to evaluate the check with (macro|fn).
        #[arg(long, default_value_t = CheckForm::Macro)]
        form: CheckForm,
    },

    /// Run every case of a probe plan, in order.
    Plan {
        /// Path to the plan TOML.
        #[arg(long, default_value = "vouch.toml")]
        config: Utf8PathBuf,

        /// Run only the named case.
        #[arg(long)]
        case: Option<String>,

        /// Override the policy of every case.
        #[arg(long)]
        policy: Option<String>,
    },

    /// Describe what a policy does with a violated condition.
    Explain { policy: PolicyKind },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.cmd {
        Commands::Run {
            policy,
            value,
            bound,
            message,
            form,
        } => cmd_run(
            ProbeCase {
                name: "run".to_string(),
                policy,
                value,
                bound,
                message,
            },
            form,
        ),
        Commands::Plan {
            config,
            case,
            policy,
        } => cmd_plan(&config, Overrides { policy, case }),
        Commands::Explain { policy } => {
            println!("{policy}: {}", policy.describe());
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("vouch-probe error: {err:#}");
        std::process::exit(1);
    }
}

fn cmd_run(case: ProbeCase, form: CheckForm) -> anyhow::Result<()> {
    let outcome = probe::run_case(&case, form)?;
    println!("{}", outcome.summary(&case));
    Ok(())
}

fn cmd_plan(config: &Utf8Path, overrides: Overrides) -> anyhow::Result<()> {
    let text =
        std::fs::read_to_string(config).with_context(|| format!("read plan: {config}"))?;
    let cfg = vouch_settings::parse_config_toml(&text).context("parse plan")?;
    let plan = vouch_settings::resolve_config(cfg, overrides).context("resolve plan")?;

    if plan.cases.is_empty() {
        eprintln!("vouch-probe: plan {config} has no cases");
        return Ok(());
    }

    for case in &plan.cases {
        let outcome = probe::run_case(case, CheckForm::Macro)?;
        println!("{}", outcome.summary(case));
    }
    Ok(())
}
