use anyhow::{Context, Result};
use clap::Parser;

use scrolltint_engine::logging::{LoggingConfig, init_logging};
use scrolltint_view::Application;

mod cli;

use cli::Cli;

const DEMO_PAGE: &str = include_str!("../pages/demo.tint");

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(match &cli.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    let source = match &cli.page {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read page {}", path.display()))?,
        None => DEMO_PAGE.to_string(),
    };

    log::info!("opening {}", cli.page.as_deref().map_or("demo page".into(), |p| p.display().to_string()));

    Application::new()
        .title(cli.window_title())
        .size(cli.width, cli.height)
        .blend_options(cli.blend_options())
        .scroll_config(cli.scroll_config())
        .run(&source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrolltint_core::BlendOptions;
    use scrolltint_view::{PageView, ScrollConfig};

    #[test]
    fn demo_page_installs_every_point() {
        let doc = scrolltint_page::parse_str(DEMO_PAGE).unwrap();
        assert_eq!(doc.select_with_attr("data-color-point").len(), 5);

        let view = PageView::new(&doc, "demo".into(), BlendOptions::default(), ScrollConfig::default());
        assert!(view.host().has_scroll_listener());
    }
}
