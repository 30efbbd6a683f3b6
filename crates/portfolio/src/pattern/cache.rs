use super::{shape::PatternStyle, svg::data_uri};
use hashbrown::HashMap;
use std::{cell::RefCell, rc::Rc};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct PatternKey {
    seed: String,
    size: u32,
    style: PatternStyle,
}

/// Rendered data URIs keyed by everything that influences the output.
/// Entries are never evicted; the site only ever renders a few dozen seeds.
#[derive(Debug, Default)]
pub struct PatternCache {
    entries: HashMap<PatternKey, Rc<str>>,
}

impl PatternCache {
    pub fn data_uri(&mut self, seed: &str, size: u32, style: PatternStyle) -> Rc<str> {
        let key = PatternKey {
            seed: seed.to_string(),
            size,
            style,
        };
        self.entries
            .entry(key)
            .or_insert_with(|| Rc::from(data_uri(seed, size, style)))
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cache handle shared through the component tree.
#[derive(Clone, Default)]
pub struct SharedPatternCache(Rc<RefCell<PatternCache>>);

impl SharedPatternCache {
    pub fn data_uri(&self, seed: &str, size: u32, style: PatternStyle) -> Rc<str> {
        self.0.borrow_mut().data_uri(seed, size, style)
    }
}

impl PartialEq for SharedPatternCache {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
