use clap::{
    Arg, ArgAction, ArgMatches, Command, CommandFactory, FromArgMatches, command, error::ErrorKind,
};
use jiff::{Zoned, tz::TimeZone};

use pcal::{Numerals, clap_helper::*, parser::parse_datetime};

#[derive(Debug, PartialEq)]
pub enum When {
    /// Delay the value as far as possible.
    Now,
    /// The given time.
    Given(Zoned),
}

#[derive(Debug, PartialEq)]
pub struct Args {
    /// A `strftime` format replacing the default Persian line.
    pub format: Option<String>,
    pub timezone: TimeZone,
    pub when: When,
    pub time: bool,
    pub digits: Numerals,
    pub debug: bool,
}

impl Args {
    pub const DEBUG_LONG: &str = "debug";
    pub const UTC_LONG: &str = "utc";
    pub const DATE_LONG: &str = "date";
    pub const TIME_LONG: &str = "time";
    pub const DIGITS_LONG: &str = "digits";
    pub const DIGITS_PAIRS: StaticMap<Numerals> = StaticMap(&[
        ("latin", Numerals::Latin),
        ("persian", Numerals::Persian),
    ]);
    pub const POSITIONAL_ID: &str = "format";

    pub fn args() -> [Arg; 6] {
        [
            Arg::new(Self::DEBUG_LONG)
                .long(Self::DEBUG_LONG)
                .help("enable debug logs in STDERR")
                .action(ArgAction::SetTrue),
            Arg::new(Self::UTC_LONG)
                .long(Self::UTC_LONG)
                .short('u')
                .visible_alias("universal")
                .help("as if timezone is Coordinated Universal Time (UTC)")
                .action(ArgAction::SetTrue),
            Arg::new(Self::DATE_LONG)
                .long(Self::DATE_LONG)
                .short('d')
                .overrides_with(Self::DATE_LONG)
                .help("as if `now` is the given (`%Y/%m/%d` or free-form like \"yesterday\")"),
            Arg::new(Self::TIME_LONG)
                .long(Self::TIME_LONG)
                .short('t')
                .help("also print the time in Persian digits")
                .action(ArgAction::SetTrue),
            Arg::new(Self::DIGITS_LONG)
                .long(Self::DIGITS_LONG)
                .value_name("DIGITS")
                .ignore_case(true)
                .help("digits of the date line")
                .value_parser(Self::DIGITS_PAIRS),
            Arg::new(Self::POSITIONAL_ID)
                .value_name("+FORMAT")
                .help("a `strftime` format (after a `+`) with Jalali fields and Persian names"),
        ]
    }
}

impl CommandFactory for Args {
    fn command() -> Command {
        command!(/* with version, about and author */)
            .after_help(
                "Without a +FORMAT the date is printed as \"<weekday>، <day> <month> <year>\".\n\
                 Date directives (%Y %m %d %B %A ...) are Jalali, the rest follow\n\
                 https://docs.rs/jiff/latest/jiff/fmt/strtime/index.html",
            )
            .args(Self::args())
    }

    fn command_for_update() -> Command {
        Self::command()
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            format: None,
            timezone: TimeZone::system(),
            when: When::Now,
            time: false,
            digits: Numerals::default(),
            debug: false,
        }
    }
}

impl FromArgMatches for Args {
    fn from_arg_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let mut v = Self::default();
        v.update_from_arg_matches(matches)?;
        Ok(v)
    }

    fn update_from_arg_matches(&mut self, matches: &ArgMatches) -> Result<(), clap::Error> {
        if matches.get_flag(Self::UTC_LONG) {
            self.timezone = TimeZone::UTC;
        };

        self.debug = self.debug || matches.get_flag(Self::DEBUG_LONG);
        self.time = self.time || matches.get_flag(Self::TIME_LONG);

        if let Some(v) = matches.get_one::<Numerals>(Self::DIGITS_LONG) {
            self.digits = *v;
        }

        if let Some(v) = matches.get_one::<String>(Self::DATE_LONG) {
            let now = Zoned::now().with_time_zone(self.timezone.clone());
            self.when = match parse_datetime(v, &now) {
                Ok(v) => When::Given(v),
                Err(e) => return Err(Self::error(ErrorKind::InvalidValue, e)),
            };
        }

        if let Some(input) = matches.get_one::<String>(Self::POSITIONAL_ID) {
            match input.strip_prefix('+') {
                Some(format) => self.format = Some(format.to_owned()),
                None => {
                    return Err(Self::error(
                        ErrorKind::InvalidValue,
                        format!("expected a +FORMAT, got `{input}`"),
                    ));
                }
            }
        }

        Ok(())
    }
}
