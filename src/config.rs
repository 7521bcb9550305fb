use clap::Parser;
use url::Url;

pub const DEFAULT_URL: &str = "https://runescape.com";

/// Fetch one page and print its title, h1-h3 headings and links.
#[derive(Debug, Parser)]
#[command(name = "pagescan", version, about)]
pub struct Cli {
    /// Absolute URL of the page to scan
    #[arg(env = "PAGESCAN_URL", default_value = DEFAULT_URL, value_parser = Url::parse)]
    url: Url,
}

impl Cli {
    pub fn target(&self) -> &Url {
        &self.url
    }
}
