use std::path::PathBuf;

use clap::Parser;
use scrolltint_core::{BlendOptions, InvalidPointPolicy, OrderPolicy};
use scrolltint_view::ScrollConfig;

/// Open a page whose background follows the scroll position.
#[derive(Parser, Debug)]
#[command(name = "scrolltint", version)]
pub struct Cli {
    /// Page to open (.tint). Opens a bundled demo when omitted.
    pub page: Option<PathBuf>,

    /// Window title; defaults to the page file name.
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, default_value_t = 960.0)]
    pub width: f64,

    #[arg(long, default_value_t = 720.0)]
    pub height: f64,

    /// Drop malformed color points instead of disabling the effect.
    #[arg(long)]
    pub skip_invalid: bool,

    /// Disable the effect when color points are not in document order.
    #[arg(long)]
    pub reject_unsorted: bool,

    /// Pixels scrolled per wheel notch or arrow key.
    #[arg(long, default_value_t = 40.0)]
    pub line_height: f32,

    /// Log filter, e.g. `debug` or `scrolltint_core=trace`. Overrides RUST_LOG.
    #[arg(long)]
    pub log: Option<String>,
}

impl Cli {
    pub fn blend_options(&self) -> BlendOptions {
        BlendOptions {
            invalid: if self.skip_invalid {
                InvalidPointPolicy::Skip
            } else {
                InvalidPointPolicy::Abort
            },
            order: if self.reject_unsorted {
                OrderPolicy::Reject
            } else {
                OrderPolicy::Sort
            },
        }
    }

    pub fn scroll_config(&self) -> ScrollConfig {
        ScrollConfig::default().with_line_height(self.line_height)
    }

    pub fn window_title(&self) -> String {
        if let Some(t) = &self.title {
            return t.clone();
        }
        self.page
            .as_deref()
            .and_then(|p| p.file_stem())
            .map_or_else(|| "scrolltint demo".to_string(), |s| s.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("scrolltint").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_match_the_classic_behavior() {
        let cli = parse(&[]);
        assert_eq!(cli.blend_options(), BlendOptions::default());
        assert_eq!(cli.scroll_config(), ScrollConfig::default());
        assert_eq!(cli.window_title(), "scrolltint demo");
    }

    #[test]
    fn flags_map_to_policies() {
        let cli = parse(&["--skip-invalid", "--reject-unsorted", "--line-height", "12"]);
        assert_eq!(
            cli.blend_options(),
            BlendOptions { invalid: InvalidPointPolicy::Skip, order: OrderPolicy::Reject }
        );
        assert_eq!(cli.scroll_config().line_height, 12.0);
    }

    #[test]
    fn title_falls_back_to_file_stem() {
        assert_eq!(parse(&["pages/sunset.tint"]).window_title(), "sunset");
        assert_eq!(parse(&["x.tint", "--title", "Hi"]).window_title(), "Hi");
    }

    #[test]
    fn bad_numbers_are_rejected() {
        assert!(Cli::try_parse_from(["scrolltint", "--width", "wide"]).is_err());
    }
}
