//! Flags shared by the script commands.

use gotochan_diagnostic::emitter::ColorMode;

/// Configuration for `gotochan run` (and the color flag of the other
/// commands).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Diagnostic coloring on stderr.
    pub color: ColorMode,
    /// Print the version banner and the end-of-program footer.
    pub banner: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            color: ColorMode::Auto,
            banner: true,
        }
    }
}

impl RunOptions {
    /// Parse the flags that follow the file path.
    pub fn parse<S: AsRef<str>>(flags: &[S]) -> Result<Self, String> {
        let mut options = RunOptions::default();
        for flag in flags {
            let flag = flag.as_ref();
            if let Some(value) = flag.strip_prefix("--color=") {
                options.color = ColorMode::from_flag(value).ok_or_else(|| {
                    format!("invalid color mode '{value}' (expected auto, always or never)")
                })?;
            } else if flag == "--quiet" || flag == "-q" {
                options.banner = false;
            } else {
                return Err(format!("unknown option '{flag}'"));
            }
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let none: [&str; 0] = [];
        assert_eq!(RunOptions::parse(&none), Ok(RunOptions::default()));
    }

    #[test]
    fn test_flags() {
        assert_eq!(
            RunOptions::parse(&["--color=never", "--quiet"]),
            Ok(RunOptions {
                color: ColorMode::Never,
                banner: false,
            })
        );
        assert_eq!(
            RunOptions::parse(&["-q"]).map(|options| options.banner),
            Ok(false)
        );
    }

    #[test]
    fn test_bad_flags() {
        assert_eq!(
            RunOptions::parse(&["--color=blue"]),
            Err("invalid color mode 'blue' (expected auto, always or never)".to_string())
        );
        assert_eq!(
            RunOptions::parse(&["--fast"]),
            Err("unknown option '--fast'".to_string())
        );
    }
}
