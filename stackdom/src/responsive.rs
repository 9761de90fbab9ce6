//! Responsive values: a single value, or one value per breakpoint.
//!
//! Breakpoints cascade mobile-first: a value set at `md` applies at `md`
//! and every wider breakpoint until another key overrides it.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Breakpoint {
    #[default]
    Base,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Base,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }
}

impl FromStr for Breakpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bp| bp.name() == s)
            .ok_or_else(|| Error::UnknownBreakpoint(s.to_string()))
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Responsive<T> {
    Value(T),
    Breakpoints(BTreeMap<Breakpoint, T>),
}

impl<T> Responsive<T> {
    pub fn from_breakpoints(entries: impl IntoIterator<Item = (Breakpoint, T)>) -> Self {
        Self::Breakpoints(entries.into_iter().collect())
    }

    /// Value in effect at `bp`, cascading up from narrower breakpoints.
    pub fn at(&self, bp: Breakpoint) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Breakpoints(map) => map.range(..=bp).next_back().map(|(_, value)| value),
        }
    }

    pub fn is_responsive(&self) -> bool {
        matches!(self, Self::Breakpoints(_))
    }

    /// Breakpoints that carry a value. A plain value reports `Base`.
    pub fn breakpoints(&self) -> Vec<Breakpoint> {
        match self {
            Self::Value(_) => vec![Breakpoint::Base],
            Self::Breakpoints(map) => map.keys().copied().collect(),
        }
    }

    pub fn entries(&self) -> Vec<(Breakpoint, &T)> {
        match self {
            Self::Value(value) => vec![(Breakpoint::Base, value)],
            Self::Breakpoints(map) => map.iter().map(|(bp, value)| (*bp, value)).collect(),
        }
    }

    /// Transform every per-breakpoint value, keeping the keys.
    pub fn map<U>(&self, mut transform: impl FnMut(&T) -> U) -> Responsive<U> {
        match self {
            Self::Value(value) => Responsive::Value(transform(value)),
            Self::Breakpoints(map) => Responsive::Breakpoints(
                map.iter().map(|(bp, value)| (*bp, transform(value))).collect(),
            ),
        }
    }
}

impl<T: Default> Default for Responsive<T> {
    fn default() -> Self {
        Self::Value(T::default())
    }
}

impl<T> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// Parses `"row"` as a plain value and `"base:column md:row"` as a
/// breakpoint mapping.
impl<T> FromStr for Responsive<T>
where
    T: FromStr<Err = Error>,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.contains(':') {
            return s.parse().map(Self::Value);
        }

        let mut map = BTreeMap::new();
        for token in s.split_whitespace() {
            let (bp, value) = match token.split_once(':') {
                Some((bp, value)) => (bp.parse()?, value),
                None => (Breakpoint::Base, token),
            };
            map.insert(bp, value.parse()?);
        }
        Ok(Self::Breakpoints(map))
    }
}

/// Map a value-or-mapping through `transform`, breakpoint by breakpoint.
pub fn resolve<T, U>(value: &Responsive<T>, transform: impl FnMut(&T) -> U) -> Responsive<U> {
    value.map(transform)
}
