use std::ffi::OsString;

/// Known subcommands that should NOT trigger installer routing.
/// These match the Commands enum variants in kebab-case.
pub const KNOWN_SUBCOMMANDS: &[&str] = &["add", "list", "info", "init", "help"];

/// Global flags that may precede a subcommand
const GLOBAL_FLAGS: &[&str] = &["-v", "--verbose"];

/// Route CLI arguments to the appropriate command.
///
/// A bare invocation or one that starts with installer flags is handed to
/// `init`, so `mern-agents --all` behaves like `mern-agents init --all`.
///
/// # Routing Logic
///
/// Leading global flags (`-v`, `--verbose`) are skipped, then the first
/// remaining argument decides:
///
/// - `--help`, `-h`, `--version`, `-V`: unchanged
/// - a known subcommand: unchanged
/// - nothing left, or any other flag: insert "init" after the program name
/// - any other word: unchanged, clap reports it as an unknown subcommand
///
/// # Examples
///
/// ```text
/// mern-agents                 -> mern-agents init
/// mern-agents --all           -> mern-agents init --all
/// mern-agents -v list         -> mern-agents -v list (unchanged)
/// mern-agents add qa-lead     -> mern-agents add qa-lead (unchanged)
/// mern-agents frobnicate      -> mern-agents frobnicate (rejected by clap)
/// ```
pub fn route_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let decisive = args
        .iter()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .find(|arg| !GLOBAL_FLAGS.contains(&arg.as_str()));

    let route_to_init = match decisive {
        None => true,
        Some(arg) if matches!(arg.as_str(), "--help" | "-h" | "--version" | "-V") => false,
        Some(arg) if KNOWN_SUBCOMMANDS.contains(&arg.as_str()) => false,
        Some(arg) => arg.starts_with('-'),
    };

    if !route_to_init {
        return args;
    }

    let mut routed = Vec::with_capacity(args.len() + 1);
    match args.split_first() {
        Some((program, rest)) => {
            routed.push(program.clone());
            routed.push("init".into());
            routed.extend_from_slice(rest);
        }
        None => routed.push("init".into()),
    }
    routed
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to convert string slices to Vec<OsString>
    fn args(items: &[&str]) -> Vec<OsString> {
        items.iter().map(|s| (*s).into()).collect()
    }

    #[test]
    fn test_empty_args_defaults_to_init() {
        let output = route_args(args(&["mern-agents"]));
        assert_eq!(output, args(&["mern-agents", "init"]));
    }

    #[test]
    fn test_no_args_at_all_defaults_to_init() {
        let input: Vec<OsString> = vec![];
        assert_eq!(route_args(input), args(&["init"]));
    }

    #[test]
    fn test_help_and_version_not_routed() {
        for flag in ["--help", "-h", "--version", "-V"] {
            let input = args(&["mern-agents", flag]);
            assert_eq!(route_args(input.clone()), input, "{} should not be routed", flag);
        }
    }

    #[test]
    fn test_all_known_subcommands_unchanged() {
        for subcommand in KNOWN_SUBCOMMANDS {
            let input = args(&["mern-agents", subcommand]);
            let output = route_args(input.clone());
            assert_eq!(
                output, input,
                "Subcommand '{}' should not be modified",
                subcommand
            );
        }
    }

    #[test]
    fn test_flags_route_to_init() {
        let output = route_args(args(&["mern-agents", "--all", "--yes"]));
        assert_eq!(output, args(&["mern-agents", "init", "--all", "--yes"]));
    }

    #[test]
    fn test_verbose_before_subcommand_unchanged() {
        let input = args(&["mern-agents", "-v", "list"]);
        assert_eq!(route_args(input.clone()), input);
    }

    #[test]
    fn test_verbose_alone_routes_to_init() {
        let output = route_args(args(&["mern-agents", "--verbose"]));
        assert_eq!(output, args(&["mern-agents", "init", "--verbose"]));
    }

    #[test]
    fn test_unknown_word_left_for_clap() {
        let input = args(&["mern-agents", "frobnicate", "x"]);
        assert_eq!(route_args(input.clone()), input);
    }
}
