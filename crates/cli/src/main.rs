//! `git collab`: configure git authors when pair or mob programming.
//!
//! Resolves collaborator initials through the nearest `.collabs` file and
//! stores the combined name, email, and initials in git config.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use gitcollab_cli::{collab, init_logging, Invocation};

const LONG_ABOUT: &str = "\
Configures git authors when pair or mob programming.

    git collab sp js
    user.name=Josh Susser and Sam Pierson
    user.email=collab+jsusser+sam@example.com

Create a `.collabs` config file in the project root or your home folder:

    # .collabs - configuration for 'git collab'
    collabs:
      # <initials>: <Firstname> <Lastname>[; <email-id>]
      eh: Edward Hieatt
      js: Josh Susser; jsusser
      sf: Serguei Filimonov; serguei
    # if the email section is present, email will be set
    # if you leave it out, email will not be touched
    email:
      prefix: collab
      domain: example.com
      # no_solo_prefix: true
    #global: true
    # custom addresses used by `git collab-commit`
    #email_addresses:
    #  zr: zach.robinson@example.com

By default this affects the current project (.git/config). Use --global or
add `global: true` to your `.collabs` file to set the global git
configuration for all projects (~/.gitconfig, or the file named by
GIT_CONFIG_GLOBAL).

Run without initials to unset the identity.";

/// Configure git authors when pair or mob programming.
#[derive(Parser, Debug)]
#[command(name = "git-collab", version, about, long_about = LONG_ABOUT)]
struct Cli {
    /// Modify global git options instead of local.
    #[arg(short, long)]
    global: bool,

    /// Collaborator initials as listed in `.collabs`.
    initials: Vec<String>,
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let invocation = Invocation::from_env()?;
    let mut stdout = std::io::stdout().lock();
    collab::run(&mut stdout, &invocation, cli.global, &cli.initials)
}
