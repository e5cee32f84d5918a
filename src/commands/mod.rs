// Commands module - handles CLI command execution

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

pub mod compare;
pub mod demo;

pub use compare::handle_compare;
pub use demo::handle_demo;

/// Write the completion script for `shell` to `out`
pub fn write_completion<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = crate::cli::Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
}

/// Print the completion script for `shell` on stdout
pub fn handle_completion(shell: Shell) -> Result<()> {
    tracing::debug!("generating {} completion", shell);
    let mut stdout = std::io::stdout().lock();
    write_completion(shell, &mut stdout);
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completion_names_binary_and_commands() {
        let mut out = Vec::new();
        write_completion(Shell::Bash, &mut out);
        let script = String::from_utf8(out).expect("utf8");

        assert!(script.contains("assertify"));
        assert!(script.contains("compare"));
        assert!(script.contains("--no-diff"));
    }

    #[test]
    fn test_every_shell_produces_a_script() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::Elvish, Shell::PowerShell] {
            let mut out = Vec::new();
            write_completion(shell, &mut out);
            assert!(!out.is_empty(), "{shell} completion is empty");
        }
    }
}
