//! Yes/no confirmation used before overwriting an installed agent.

use std::io::{self, BufRead, Write};

pub trait Confirm {
    /// Ask a yes/no question. Anything but an explicit yes is a no.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<C: Confirm + ?Sized> Confirm for &mut C {
    fn confirm(&mut self, prompt: &str) -> bool {
        (**self).confirm(prompt)
    }
}

/// `y` or `yes`, case-insensitive, surrounding whitespace ignored
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Prompts on a writer and reads one answer line from a reader.
pub struct LineConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LineConfirm<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout, answer from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        let _ = write!(self.output, "{} [y/N] ", prompt);
        let _ = self.output.flush();

        let mut input = String::new();
        match self.input.read_line(&mut input) {
            Ok(0) => {
                // EOF: keep the next output line off the prompt line
                let _ = writeln!(self.output);
                false
            }
            Ok(_) => is_affirmative(&input),
            Err(e) => {
                tracing::debug!(error = %e, "failed to read confirmation");
                false
            }
        }
    }
}

/// Answers yes without asking (`add --force`)
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(input: &str) -> (bool, String) {
        let mut output = Vec::new();
        let result = LineConfirm::new(Cursor::new(input.as_bytes()), &mut output)
            .confirm("Overwrite qa-lead?");
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("YES\n"));
        assert!(is_affirmative("  Yes "));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("yep"));
    }

    #[test]
    fn test_line_confirm_yes() {
        let (result, output) = answer("y\n");
        assert!(result);
        assert_eq!(output, "Overwrite qa-lead? [y/N] ");
    }

    #[test]
    fn test_line_confirm_default_is_no() {
        assert!(!answer("\n").0);
        assert!(!answer("no\n").0);
    }

    #[test]
    fn test_line_confirm_eof_is_no() {
        let (result, output) = answer("");
        assert!(!result);
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_line_confirm_reads_one_line_per_prompt() {
        let mut output = Vec::new();
        let mut confirm = LineConfirm::new(Cursor::new("yes\nno\n".as_bytes()), &mut output);
        assert!(confirm.confirm("first?"));
        assert!(!confirm.confirm("second?"));
        assert!(!confirm.confirm("third?"));
    }

    #[test]
    fn test_always_confirm() {
        assert!(AlwaysConfirm.confirm("anything?"));
    }
}
