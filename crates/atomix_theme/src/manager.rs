//! Theme registry and manager
//!
//! [`ThemeRegistry`] stores composed themes under registry keys with an
//! optional alias layer. [`ThemeManager`] drives the active theme: it
//! resolves a name through its registry, renders the CSS variable block,
//! and replaces the single style slot held by its [`StyleSink`].

use std::time::{SystemTime, UNIX_EPOCH};

use rustc_hash::FxHashMap;

use crate::css::{
    generate_css_variables, CssOptions, StyleSink, DEFAULT_PREFIX, DEFAULT_SELECTOR,
    DEFAULT_STYLE_ID,
};
use crate::error::ThemeError;
use crate::theme::Theme;

/// Named store of composed themes.
///
/// Aliases resolve one level deep: an alias points at a registry key,
/// never at another alias.
#[derive(Debug, Default)]
pub struct ThemeRegistry {
    themes: FxHashMap<String, Theme>,
    aliases: FxHashMap<String, String>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a theme under a key, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, theme: Theme) {
        let name = name.into();
        tracing::debug!(name = %name, theme = %theme.name, "registering theme");
        self.themes.insert(name, theme);
    }

    /// Remove a theme and any aliases that pointed at it.
    pub fn unregister(&mut self, name: &str) -> Option<Theme> {
        let removed = self.themes.remove(name);
        if removed.is_some() {
            self.aliases.retain(|_, target| target != name);
        }
        removed
    }

    /// Look up a theme by key or alias.
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.resolve(name).and_then(|key| self.themes.get(key))
    }

    /// Whether a key or alias resolves to a registered theme.
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Registered theme keys, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.themes.keys().cloned().collect();
        names.sort();
        names
    }

    /// Point an alias at a registered theme key.
    ///
    /// Fails with [`ThemeError::AliasTarget`] when the target is not
    /// registered.
    pub fn add_alias(
        &mut self,
        alias: impl Into<String>,
        target: impl Into<String>,
    ) -> Result<(), ThemeError> {
        let target = target.into();
        if !self.themes.contains_key(&target) {
            return Err(ThemeError::AliasTarget(target));
        }
        self.aliases.insert(alias.into(), target);
        Ok(())
    }

    /// Drop an alias. Returns whether it existed.
    pub fn remove_alias(&mut self, alias: &str) -> bool {
        self.aliases.remove(alias).is_some()
    }

    /// Remove all themes and aliases.
    pub fn clear(&mut self) {
        self.themes.clear();
        self.aliases.clear();
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Canonical registry key for a name, following at most one alias hop.
    fn resolve<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        if self.themes.contains_key(name) {
            return Some(name);
        }
        self.aliases
            .get(name)
            .map(String::as_str)
            .filter(|target| self.themes.contains_key(*target))
    }
}

/// Record of one completed theme switch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeChange {
    pub previous: Option<String>,
    pub current: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

/// Callback invoked after every theme switch.
pub type ThemeChangeCallback = Box<dyn Fn(&ThemeChange)>;

/// Construction options for [`ThemeManager`].
#[derive(Clone, Debug)]
pub struct ManagerOptions {
    /// Theme to activate at construction, when set.
    pub default_theme: Option<String>,
    pub prefix: String,
    pub selector: String,
    pub style_id: String,
}

impl Default for ManagerOptions {
    fn default() -> Self {
        Self {
            default_theme: None,
            prefix: DEFAULT_PREFIX.to_string(),
            selector: DEFAULT_SELECTOR.to_string(),
            style_id: DEFAULT_STYLE_ID.to_string(),
        }
    }
}

/// Owner of the active theme and its style slot.
///
/// The manager writes every switch through one sink slot, so readers of
/// the generated styles always observe a single atomic replace.
pub struct ThemeManager {
    registry: ThemeRegistry,
    active: Option<String>,
    sink: Box<dyn StyleSink>,
    options: ManagerOptions,
    subscribers: FxHashMap<usize, ThemeChangeCallback>,
    next_subscriber: usize,
    last_change: Option<ThemeChange>,
}

impl ThemeManager {
    /// Build a manager over a populated registry.
    ///
    /// When `options.default_theme` names a theme it is activated
    /// immediately; an unresolvable default is an error.
    pub fn new(
        registry: ThemeRegistry,
        sink: Box<dyn StyleSink>,
        options: ManagerOptions,
    ) -> Result<Self, ThemeError> {
        let mut manager = Self {
            registry,
            active: None,
            sink,
            options,
            subscribers: FxHashMap::default(),
            next_subscriber: 0,
            last_change: None,
        };
        if let Some(default_theme) = manager.options.default_theme.clone() {
            manager.set_theme(&default_theme)?;
        }
        Ok(manager)
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ThemeRegistry {
        &mut self.registry
    }

    /// Canonical key of the active theme.
    pub fn active_theme(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The most recent switch record.
    pub fn last_change(&self) -> Option<&ThemeChange> {
        self.last_change.as_ref()
    }

    /// Switch to a registered theme by key or alias.
    ///
    /// Resolves the name, renders the CSS variable block, replaces the
    /// sink slot, then notifies subscribers. Switching to the already
    /// active theme is a no-op.
    pub fn set_theme(&mut self, name: &str) -> Result<(), ThemeError> {
        let canonical = self
            .registry
            .resolve(name)
            .ok_or_else(|| ThemeError::ThemeNotFound(name.to_string()))?
            .to_string();

        if self.active.as_deref() == Some(canonical.as_str()) {
            return Ok(());
        }

        let theme = match self.registry.themes.get(&canonical) {
            Some(theme) => theme,
            None => return Err(ThemeError::ThemeNotFound(name.to_string())),
        };

        let css = generate_css_variables(
            theme,
            &CssOptions {
                selector: self.options.selector.clone(),
                prefix: self.options.prefix.clone(),
                style_id: self.options.style_id.clone(),
            },
        );
        self.sink.apply(&self.options.style_id, &css);

        let change = ThemeChange {
            previous: self.active.clone(),
            current: canonical.clone(),
            timestamp: now_millis(),
        };
        self.active = Some(canonical);

        tracing::debug!(
            previous = ?change.previous,
            current = %change.current,
            "theme switched"
        );

        for callback in self.subscribers.values() {
            callback(&change);
        }
        self.last_change = Some(change);

        Ok(())
    }

    /// Register a change callback. Returns the id used to unsubscribe.
    pub fn subscribe(&mut self, callback: ThemeChangeCallback) -> usize {
        let id = self.next_subscriber;
        self.next_subscriber += 1;
        self.subscribers.insert(id, callback);
        id
    }

    /// Remove a change callback. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: usize) -> bool {
        self.subscribers.remove(&id).is_some()
    }

    /// Clear the style slot and deactivate the current theme.
    pub fn dispose(&mut self) {
        self.sink.dispose(&self.options.style_id);
        self.active = None;
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::compose::create_theme;
    use crate::css::MemorySink;
    use crate::theme::{PaletteColorOptions, PaletteOptions, ThemeOptions};

    fn theme(name: &str, primary: &str) -> Theme {
        create_theme(ThemeOptions {
            name: Some(name.to_string()),
            palette: Some(PaletteOptions {
                primary: Some(PaletteColorOptions::from_main(primary)),
                ..PaletteOptions::default()
            }),
            ..ThemeOptions::default()
        })
    }

    fn registry() -> ThemeRegistry {
        let mut registry = ThemeRegistry::new();
        registry.register("light", theme("Light", "#7AFFD7"));
        registry.register("dark", theme("Dark", "#1976D2"));
        registry
    }

    #[test]
    fn registry_lookup_and_names() {
        let registry = registry();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("light"));
        assert!(!registry.contains("missing"));
        assert_eq!(registry.names(), ["dark", "light"]);
        assert_eq!(registry.get("light").map(|t| t.name.as_str()), Some("Light"));
    }

    #[test]
    fn alias_resolves_to_target() {
        let mut registry = registry();
        registry.add_alias("default", "light").unwrap();
        assert!(registry.contains("default"));
        assert_eq!(
            registry.get("default").map(|t| t.name.as_str()),
            Some("Light")
        );
        assert!(registry.remove_alias("default"));
        assert!(!registry.contains("default"));
    }

    #[test]
    fn alias_to_missing_target_is_an_error() {
        let mut registry = registry();
        let err = registry.add_alias("default", "missing").unwrap_err();
        assert!(matches!(err, ThemeError::AliasTarget(name) if name == "missing"));
    }

    #[test]
    fn unregister_drops_dependent_aliases() {
        let mut registry = registry();
        registry.add_alias("default", "light").unwrap();
        assert!(registry.unregister("light").is_some());
        assert!(!registry.contains("default"));
        assert_eq!(registry.names(), ["dark"]);
    }

    #[test]
    fn default_theme_is_applied_at_construction() {
        let sink = Rc::new(RefCell::new(MemorySink::new()));
        let manager = ThemeManager::new(
            registry(),
            Box::new(Rc::clone(&sink)),
            ManagerOptions {
                default_theme: Some("light".to_string()),
                ..ManagerOptions::default()
            },
        )
        .unwrap();

        assert_eq!(manager.active_theme(), Some("light"));
        let sink = sink.borrow();
        let css = sink.get(DEFAULT_STYLE_ID).unwrap();
        assert!(css.contains("--atomix-primary: #7AFFD7;"));
    }

    #[test]
    fn unknown_default_theme_fails_construction() {
        let result = ThemeManager::new(
            registry(),
            Box::new(MemorySink::new()),
            ManagerOptions {
                default_theme: Some("missing".to_string()),
                ..ManagerOptions::default()
            },
        );
        assert!(matches!(
            result,
            Err(ThemeError::ThemeNotFound(name)) if name == "missing"
        ));
    }

    #[test]
    fn switching_replaces_the_single_slot() {
        let sink = Rc::new(RefCell::new(MemorySink::new()));
        let mut manager = ThemeManager::new(
            registry(),
            Box::new(Rc::clone(&sink)),
            ManagerOptions::default(),
        )
        .unwrap();

        manager.set_theme("light").unwrap();
        manager.set_theme("dark").unwrap();
        manager.set_theme("light").unwrap();
        manager.set_theme("dark").unwrap();

        let sink = sink.borrow();
        assert_eq!(sink.len(), 1);
        let css = sink.get(DEFAULT_STYLE_ID).unwrap();
        assert!(css.contains("--atomix-primary: #1976D2;"));
    }

    #[test]
    fn switching_through_an_alias_records_the_canonical_name() {
        let mut registry = registry();
        registry.add_alias("default", "dark").unwrap();
        let mut manager = ThemeManager::new(
            registry,
            Box::new(MemorySink::new()),
            ManagerOptions::default(),
        )
        .unwrap();

        manager.set_theme("default").unwrap();
        assert_eq!(manager.active_theme(), Some("dark"));
        let change = manager.last_change().unwrap();
        assert_eq!(change.previous, None);
        assert_eq!(change.current, "dark");
        assert!(change.timestamp > 0);
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let mut manager = ThemeManager::new(
            registry(),
            Box::new(MemorySink::new()),
            ManagerOptions::default(),
        )
        .unwrap();
        let err = manager.set_theme("missing").unwrap_err();
        assert!(matches!(err, ThemeError::ThemeNotFound(name) if name == "missing"));
    }

    #[test]
    fn subscribers_observe_switches_until_removed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut manager = ThemeManager::new(
            registry(),
            Box::new(MemorySink::new()),
            ManagerOptions::default(),
        )
        .unwrap();

        let sink = Rc::clone(&seen);
        let id = manager.subscribe(Box::new(move |change| {
            sink.borrow_mut().push(change.current.clone());
        }));

        manager.set_theme("light").unwrap();
        manager.set_theme("dark").unwrap();
        assert!(manager.unsubscribe(id));
        manager.set_theme("light").unwrap();

        assert_eq!(*seen.borrow(), ["light", "dark"]);
        assert!(!manager.unsubscribe(id));
    }

    #[test]
    fn repeat_switch_to_active_theme_is_a_no_op() {
        let seen = Rc::new(RefCell::new(0u32));
        let mut manager = ThemeManager::new(
            registry(),
            Box::new(MemorySink::new()),
            ManagerOptions::default(),
        )
        .unwrap();

        let count = Rc::clone(&seen);
        manager.subscribe(Box::new(move |_| *count.borrow_mut() += 1));

        manager.set_theme("light").unwrap();
        manager.set_theme("light").unwrap();
        assert_eq!(*seen.borrow(), 1);
    }

    #[test]
    fn dispose_clears_the_slot() {
        let sink = Rc::new(RefCell::new(MemorySink::new()));
        let mut manager = ThemeManager::new(
            registry(),
            Box::new(Rc::clone(&sink)),
            ManagerOptions {
                default_theme: Some("light".to_string()),
                ..ManagerOptions::default()
            },
        )
        .unwrap();

        manager.dispose();
        assert!(sink.borrow().is_empty());
        assert_eq!(manager.active_theme(), None);
    }
}
