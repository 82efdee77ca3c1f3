use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Settings file. Defaults to $RANGELINE_CONFIG_PATH or ~/.rangeline/config.json
    #[clap(short = 'c', long, help = "settings file path")]
    config: Option<String>,

    /// Script of input events, one per line. Reads stdin when omitted.
    #[clap(short = 's', long, help = "event script path")]
    script: Option<String>,

    #[clap(short = 'v', long, help = "enable debug logging")]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    config: Option<String>,
    script: Option<String>,
    verbose: bool,
}

impl CommandLineArgs {
    fn from_clap(args: ClapArgs) -> Self {
        Self {
            config: args.config,
            script: args.script,
            verbose: args.verbose,
        }
    }

    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
