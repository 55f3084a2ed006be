use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
pub struct Args {
    #[clap(
        short = 'a',
        long = "account",
        help = "GitHub account whose repositories are featured",
        env = "PORTFOLIO_GITHUB_ACCOUNT",
        default_value = "armand0e"
    )]
    pub account: String,

    #[clap(
        short = 's',
        long = "section",
        help = "Portfolio section to render",
        value_enum,
        default_value = "all"
    )]
    pub section: Section,

    #[clap(
        short = 'c',
        long = "category",
        help = "Featured-project category filter",
        default_value = "All"
    )]
    pub category: String,

    #[clap(
        short = 't',
        long = "theme",
        help = "Color theme",
        value_enum,
        default_value = "system"
    )]
    pub theme: Theme,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Section {
    All,
    Home,
    About,
    Experience,
    Projects,
    Contact,
}

impl Section {
    pub fn includes(self, other: Section) -> bool {
        self == Section::All || self == other
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Theme {
    /// Light renders plain text, dark forces color, system defers to
    /// terminal detection.
    pub fn apply(self) {
        match self {
            Theme::Light => colored::control::set_override(false),
            Theme::Dark => colored::control::set_override(true),
            Theme::System => {}
        }
    }
}
