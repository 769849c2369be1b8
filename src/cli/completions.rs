//! Shell completions generation.

use clap_complete::Shell;

/// Write completions for `shell` to stdout.
pub fn run(shell: Shell) -> crate::error::Result<()> {
    let mut cmd = <super::Cli as clap::CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "rorschach", &mut std::io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_mention_flags() {
        let mut cmd = <super::super::Cli as clap::CommandFactory>::command();
        let mut buf = Vec::new();
        clap_complete::generate(Shell::Bash, &mut cmd, "rorschach", &mut buf);

        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("--rainbow"));
        assert!(script.contains("--github"));
    }
}
