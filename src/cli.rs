use agecalc::{Format, TextStyle};
use chrono::NaiveDate;
use clap::Parser;

/// agecalc - elapsed age in years, months and days
#[derive(Parser, Debug)]
#[command(name = "agecalc")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Day of birth (1-31)
    pub day: String,

    /// Month of birth (1-12)
    pub month: String,

    /// Year of birth (1000 up to the current year)
    pub year: String,

    /// Compute the age as of this date instead of today (YYYY-MM-DD)
    #[arg(long, env = "AGECALC_TODAY")]
    pub today: Option<NaiveDate>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Print the age on a single line
    #[arg(long)]
    pub summary: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn text_style(&self) -> TextStyle {
        if self.summary {
            TextStyle::Summary
        } else {
            TextStyle::Panel
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_components_as_raw_text() {
        let cli = Cli::try_parse_from(["agecalc", "15", "abc", "-3"]).unwrap();
        assert_eq!(
            (cli.day.as_str(), cli.month.as_str(), cli.year.as_str()),
            ("15", "abc", "-3")
        );
        assert_eq!(cli.format, Format::Text);
        assert_eq!(cli.text_style(), TextStyle::Panel);
    }

    #[test]
    fn parses_reference_date_and_flags() {
        let cli = Cli::try_parse_from([
            "agecalc",
            "1",
            "2",
            "2000",
            "--today",
            "2024-05-15",
            "--format",
            "json",
            "--summary",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 5, 15));
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.text_style(), TextStyle::Summary);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_malformed_reference_date() {
        let parsed = Cli::try_parse_from(["agecalc", "1", "2", "2000", "--today", "15/05/2024"]);
        assert!(parsed.is_err());
    }
}
