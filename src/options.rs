//! Formatting options: the separator placed between elements, and the strings that open and
//! close the printed sequence.

use std::borrow::Cow;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};
use tracing::debug;

pub const DEFAULT_SEPARATOR: &str = ", ";
pub const DEFAULT_BEGIN: &str = "{";
pub const DEFAULT_END: &str = "}";

/// The keys of a partial options override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Param {
    #[strum(to_string = "separator", serialize = "sep")]
    Separator,

    #[strum(to_string = "begin", serialize = "start", serialize = "prefix")]
    Begin,

    #[strum(to_string = "end", serialize = "finish", serialize = "suffix")]
    End,
}

pub type Params = FxHashMap<Param, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    #[serde(default = "default_separator")]
    pub separator: Cow<'static, str>,

    #[serde(default = "default_begin")]
    pub begin: Cow<'static, str>,

    #[serde(default = "default_end")]
    pub end: Cow<'static, str>,
}

fn default_separator() -> Cow<'static, str> {
    Cow::Borrowed(DEFAULT_SEPARATOR)
}

fn default_begin() -> Cow<'static, str> {
    Cow::Borrowed(DEFAULT_BEGIN)
}

fn default_end() -> Cow<'static, str> {
    Cow::Borrowed(DEFAULT_END)
}

impl FormatOptions {
    pub const DEFAULT: FormatOptions = FormatOptions {
        separator: Cow::Borrowed(DEFAULT_SEPARATOR),
        begin: Cow::Borrowed(DEFAULT_BEGIN),
        end: Cow::Borrowed(DEFAULT_END),
    };

    /// Positional form: all three strings given explicitly.
    pub fn new(
        separator: impl Into<Cow<'static, str>>,
        begin: impl Into<Cow<'static, str>>,
        end: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            separator: separator.into(),
            begin: begin.into(),
            end: end.into(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_begin(mut self, begin: impl Into<Cow<'static, str>>) -> Self {
        self.begin = begin.into();
        self
    }

    pub fn with_end(mut self, end: impl Into<Cow<'static, str>>) -> Self {
        self.end = end.into();
        self
    }

    /// Builds options from a partial parameter map. Keys absent from `params` take their
    /// documented defaults, never the empty string.
    pub fn from_params(params: &Params) -> Self {
        Self::DEFAULT.overlay(params)
    }

    /// Returns a copy of these options with every parameter present in `params` replaced.
    pub fn overlay(&self, params: &Params) -> Self {
        let pick = |param: Param, current: &Cow<'static, str>| match params.get(&param) {
            Some(value) => Cow::Owned(value.clone()),
            None => current.clone(),
        };
        Self {
            separator: pick(Param::Separator, &self.separator),
            begin: pick(Param::Begin, &self.begin),
            end: pick(Param::End, &self.end),
        }
    }

    /// Overlays textual `key`/`value` pairs on the defaults. Unrecognised keys are skipped.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self::from_params(&parse_params(pairs))
    }

    pub fn get(&self, param: Param) -> &str {
        match param {
            Param::Separator => &self.separator,
            Param::Begin => &self.begin,
            Param::End => &self.end,
        }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<&Params> for FormatOptions {
    fn from(params: &Params) -> Self {
        Self::from_params(params)
    }
}

/// Collects textual `key`/`value` pairs into a [Params] map. Keys that do not name a [Param]
/// are dropped; when a key repeats, the last value wins.
pub fn parse_params<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Params {
    let mut params = Params::default();
    for (key, value) in pairs {
        match Param::from_str(key.trim()) {
            Ok(param) => {
                params.insert(param, value.to_string());
            }
            Err(_) => debug!("ignoring unrecognised parameter {key:?}"),
        }
    }
    params
}

/// Splits a `key=value` argument. Only the first `=` delimits; the value may itself contain `=`.
pub fn split_pair(arg: &str) -> Option<(&str, &str)> {
    arg.split_once('=')
}
