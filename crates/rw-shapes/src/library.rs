//! Name-keyed template registry.

use std::collections::HashMap;

use rw_core::ShapeId;

use crate::builtin;
use crate::template::ShapeTemplate;

/// Registry of shape templates keyed by name.
///
/// Starts with the four built-ins.  Templates registered later (for example
/// from [`load_templates_csv`][crate::load_templates_csv]) are added by name
/// and replace any existing entry with the same name, built-ins included.
///
/// Custom names are case-sensitive.  Built-in names also match in any case,
/// so `"bunny"` finds the `"Bunny"` entry even after it has been replaced.
#[derive(Clone, Debug)]
pub struct ShapeLibrary {
    templates: HashMap<String, ShapeTemplate>,
}

impl ShapeLibrary {
    /// A library holding only the built-in silhouettes.
    pub fn builtin() -> Self {
        let templates = ShapeId::ALL
            .into_iter()
            .map(|id| (id.as_str().to_owned(), builtin::lookup(id)))
            .collect();
        Self { templates }
    }

    /// Add or replace a template.  Returns the template previously stored
    /// under the same name, if any.
    pub fn register(&mut self, template: ShapeTemplate) -> Option<ShapeTemplate> {
        let name = template.name().to_owned();
        let previous = self.templates.insert(name, template);
        if let Some(prev) = &previous {
            log::info!("replaced shape template {:?}", prev.name());
        }
        previous
    }

    /// Register every template from `templates`.
    pub fn extend<I: IntoIterator<Item = ShapeTemplate>>(&mut self, templates: I) {
        for t in templates {
            self.register(t);
        }
    }

    /// Borrow the template stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&ShapeTemplate> {
        self.templates.get(name).or_else(|| {
            let id = name.parse::<ShapeId>().ok()?;
            self.templates.get(id.as_str())
        })
    }

    /// Template for `name`; unknown names resolve to the single-point
    /// template.  Never fails.
    pub fn lookup(&self, name: &str) -> ShapeTemplate {
        match self.get(name) {
            Some(t) => t.clone(),
            None => {
                log::debug!("no shape named {name:?}; using single-point template");
                ShapeTemplate::origin_only(name)
            }
        }
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for ShapeLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}
