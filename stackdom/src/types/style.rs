use std::collections::{BTreeMap, BTreeSet};

use super::{Prop, Value};
use crate::responsive::{Breakpoint, Responsive};

/// Target of a nested style rule, relative to the element (`&`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Selector {
    /// Every child after the first: `& > *:not(style) ~ *:not(style)`.
    SiblingsAfterFirst,
    Custom(String),
}

impl Selector {
    pub fn custom(selector: impl Into<String>) -> Self {
        Self::Custom(selector.into())
    }

    pub fn as_css(&self) -> &str {
        match self {
            Self::SiblingsAfterFirst => "& > *:not(style) ~ *:not(style)",
            Self::Custom(selector) => selector,
        }
    }
}

/// Declarative style object: property values, each possibly responsive,
/// plus nested rules keyed by selector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    props: BTreeMap<Prop, Responsive<Value>>,
    nested: BTreeMap<Selector, Style>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, prop: Prop, value: impl Into<Value>) -> Self {
        self.insert(prop, Responsive::Value(value.into()));
        self
    }

    pub fn set_responsive(mut self, prop: Prop, value: Responsive<Value>) -> Self {
        self.insert(prop, value);
        self
    }

    pub fn nested(mut self, selector: Selector, style: Style) -> Self {
        self.nested.insert(selector, style);
        self
    }

    pub fn insert(&mut self, prop: Prop, value: Responsive<Value>) {
        self.props.insert(prop, value);
    }

    pub fn remove(&mut self, prop: Prop) -> Option<Responsive<Value>> {
        self.props.remove(&prop)
    }

    pub fn get(&self, prop: Prop) -> Option<&Responsive<Value>> {
        self.props.get(&prop)
    }

    /// Value of `prop` at the base breakpoint.
    pub fn base(&self, prop: Prop) -> Option<&Value> {
        self.get(prop).and_then(|value| value.at(Breakpoint::Base))
    }

    pub fn contains(&self, prop: Prop) -> bool {
        self.props.contains_key(&prop)
    }

    pub fn get_nested(&self, selector: &Selector) -> Option<&Style> {
        self.nested.get(selector)
    }

    pub fn props(&self) -> impl Iterator<Item = (Prop, &Responsive<Value>)> {
        self.props.iter().map(|(prop, value)| (*prop, value))
    }

    pub fn nested_rules(&self) -> impl Iterator<Item = (&Selector, &Style)> {
        self.nested.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty() && self.nested.is_empty()
    }

    /// Apply `patch` on top of this style. Keys present in the patch win,
    /// and a shorthand in the patch also clears the sides it covers;
    /// nested rules merge recursively.
    pub fn merge(&mut self, patch: &Style) {
        for (prop, value) in &patch.props {
            for longhand in prop.longhands() {
                self.props.remove(longhand);
            }
            self.props.insert(*prop, value.clone());
        }
        for (selector, style) in &patch.nested {
            self.nested.entry(selector.clone()).or_default().merge(style);
        }
    }

    pub fn merged(mut self, patch: &Style) -> Self {
        self.merge(patch);
        self
    }

    /// Flatten a breakpoint-keyed mapping of styles into one style whose
    /// property values are responsive.
    ///
    /// Values are evaluated at every breakpoint named by either the outer
    /// mapping or a property value inside it, so an outer mapping (e.g. by
    /// direction) and an inner one (e.g. by spacing) each cascade on their
    /// own.
    pub fn from_responsive(styles: Responsive<Style>) -> Style {
        let map = match styles {
            Responsive::Value(style) => return style,
            Responsive::Breakpoints(map) => map,
        };

        let mut breakpoints: BTreeSet<Breakpoint> = map.keys().copied().collect();
        let mut props = BTreeSet::new();
        let mut selectors = BTreeSet::new();
        for style in map.values() {
            for (prop, value) in &style.props {
                props.insert(*prop);
                breakpoints.extend(value.breakpoints());
            }
            selectors.extend(style.nested.keys().cloned());
        }

        let mut result = Style::new();

        for prop in props {
            let per_breakpoint: BTreeMap<Breakpoint, Value> = breakpoints
                .iter()
                .filter_map(|bp| {
                    cascade(&map, *bp)
                        .and_then(|style| style.props.get(&prop))
                        .and_then(|value| value.at(*bp))
                        .map(|value| (*bp, value.clone()))
                })
                .collect();
            if !per_breakpoint.is_empty() {
                result.props.insert(prop, collapse(per_breakpoint));
            }
        }

        for selector in selectors {
            let inner = map
                .iter()
                .map(|(bp, style)| {
                    let nested = style.nested.get(&selector).cloned().unwrap_or_default();
                    (*bp, nested)
                })
                .collect();
            let nested = Style::from_responsive(Responsive::Breakpoints(inner));
            if !nested.is_empty() {
                result.nested.insert(selector, nested);
            }
        }

        result
    }
}

fn cascade(map: &BTreeMap<Breakpoint, Style>, bp: Breakpoint) -> Option<&Style> {
    map.range(..=bp).next_back().map(|(_, style)| style)
}

/// Drop entries that repeat the value already cascading from a narrower
/// breakpoint; a lone base entry becomes a plain value.
fn collapse(map: BTreeMap<Breakpoint, Value>) -> Responsive<Value> {
    let mut kept: BTreeMap<Breakpoint, Value> = BTreeMap::new();
    for (bp, value) in map {
        if kept.values().next_back() != Some(&value) {
            kept.insert(bp, value);
        }
    }

    if kept.len() == 1 && kept.contains_key(&Breakpoint::Base) {
        if let Some(value) = kept.remove(&Breakpoint::Base) {
            return Responsive::Value(value);
        }
    }
    Responsive::Breakpoints(kept)
}
