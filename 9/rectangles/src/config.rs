use std::str::FromStr;

use crate::error::ConfigError;
use crate::rectangle::Measure;

/// Which enclosure test the search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Test the rectangle against runs of exterior points along each edge.
    #[default]
    Boundary,
    /// Test the rectangle against every exterior point individually.
    ExteriorPoints,
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boundary" => Ok(Strategy::Boundary),
            "exterior" => Ok(Strategy::ExteriorPoints),
            _ => Err(ConfigError::InvalidValue {
                flag: "--strategy".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Measure {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tiles" => Ok(Measure::Tiles),
            "span" => Ok(Measure::Span),
            _ => Err(ConfigError::InvalidValue {
                flag: "--measure".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub strategy: Strategy,
    pub measure: Measure,
    /// Validate candidates on the rayon thread pool.
    pub parallel: bool,
}

impl SearchConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_measure(mut self, measure: Measure) -> Self {
        self.measure = measure;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Parses `<input> [--strategy boundary|exterior] [--measure tiles|span] [--parallel]`,
    /// program name already stripped. Returns the input path alongside the config.
    pub fn from_args<I>(args: I) -> Result<(String, SearchConfig), ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut input = None;
        let mut config = SearchConfig::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--strategy" => config.strategy = value_of(&arg, args.next())?.parse()?,
                "--measure" => config.measure = value_of(&arg, args.next())?.parse()?,
                "--parallel" => config.parallel = true,
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()));
                }
                path => {
                    if input.replace(path.to_string()).is_some() {
                        return Err(ConfigError::UnknownFlag(path.to_string()));
                    }
                }
            }
        }

        let input = input.ok_or(ConfigError::MissingInput)?;
        Ok((input, config))
    }
}

fn value_of(flag: &str, value: Option<String>) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: String::new(),
    })
}
