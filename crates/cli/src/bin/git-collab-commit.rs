//! `git collab-commit`: `git commit` with the author email drawn at random
//! from the current collab, so code-hosting credit spreads across the group.

use std::ffi::OsString;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use gitcollab_cli::{commit, init_logging, Invocation};

const LONG_ABOUT: &str = "\
Commits changes to the repository using `git commit`, but randomly chooses
the author email from the members of the collab. For GitHub to assign credit
for the commit activity, each member's email must be linked to their GitHub
account.

All arguments are passed through to `git commit`.";

/// Commit as the current collab with a randomly drawn author email.
#[derive(Parser, Debug)]
#[command(
    name = "git-collab-commit",
    about,
    long_about = LONG_ABOUT,
    override_usage = "git collab-commit [options_for_git_commit]"
)]
struct Cli {
    /// Arguments for `git commit`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    git_args: Vec<OsString>,
}

/// Arguments to forward to `git commit`, exactly as given.
///
/// clap consumes a `--` that comes before any other argument, but git needs
/// it to tell pathspecs from revisions, so it is put back.
fn git_args_from<I, T>(argv: I) -> Result<Vec<OsString>, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let mut git_args = Cli::try_parse_from(&argv)?.git_args;
    if argv.get(1).is_some_and(|arg| arg == "--") {
        git_args.insert(0, OsString::from("--"));
    }
    Ok(git_args)
}

fn main() -> ExitCode {
    init_logging();

    let git_args = match git_args_from(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    match run(&git_args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(git_args: &[OsString]) -> Result<i32> {
    let invocation = Invocation::from_env()?;
    let mut stdout = std::io::stdout().lock();
    commit::run(&mut stdout, &invocation, git_args, &mut rand::thread_rng())
}
