use clap::{CommandFactory, Parser};
use std::ffi::OsString;

/// Two-letter short flags clap cannot express, and the long flags they stand for
pub const SHORT_ALIASES: [(&str, &str); 2] = [("-bd", "--msbuilddate"), ("-ed", "--edateonly")];

#[derive(Debug, Clone, PartialEq, Parser)]
#[command(
    name = "version2k",
    about = "Derive build identifiers and date-encoded version numbers",
    disable_version_flag = true
)]
pub struct Args {
    #[arg(
        short = 'v',
        long = "version",
        num_args = 1..=2,
        value_names = ["PATH", "build"],
        help = "Print the first line of a version file, stamping a .0000 placeholder; with 'build', print only the build id"
    )]
    pub version: Option<Vec<String>>,

    #[arg(short = 'b', long, help = "Print today's build day (days since 2000-01-01, UTC)")]
    pub msbuild: bool,

    #[arg(
        short = 'd',
        long,
        value_name = "DAYS",
        allow_negative_numbers = true,
        help = "Print the calendar date of a build day"
    )]
    pub msdate: Option<i64>,

    #[arg(
        long,
        value_name = "DATE",
        help = "Print the build day of YYYY-MM-DD, YYYY/MM/DD or YYYYMMDD [short: -bd]"
    )]
    pub msbuilddate: Option<String>,

    #[arg(short = 'e', long, help = "Print the UTC timestamp as YYYYMMDD.HHMM")]
    pub edate: bool,

    #[arg(long, help = "Print the UTC date as YYYYMMDD [short: -ed]")]
    pub edateonly: bool,
}

impl Args {
    /// Usage text as printed for a bare invocation
    pub fn help_text() -> String {
        Args::command().render_help().to_string()
    }
}

/// Rewrite `-bd` and `-ed` into their long forms
///
/// Left alone, clap would read `-bd` as the cluster `-b -d`. Both the bare flag
/// and the `-bd=VALUE` spelling are rewritten; everything after `--` is kept.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_terminator = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_terminator {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                after_terminator = true;
                return arg;
            }

            for (short, long) in SHORT_ALIASES {
                if text == short {
                    return OsString::from(long);
                }
                if let Some(value) = text.strip_prefix(short).and_then(|rest| rest.strip_prefix('=')) {
                    return OsString::from(format!("{}={}", long, value));
                }
            }
            arg
        })
        .collect()
}
