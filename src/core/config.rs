//! Purpose: Type-keyed default value registry consulted when a decode fails.
//! Exports: `Configuration`, `ConfigurationBuilder`, `ConfigurationProvider`.
//! Invariants: A finalized `Configuration` has no mutating methods; clones share entries.
//! Invariants: `lookup::<T>()` only ever returns a value registered for exactly `T`.
//! Invariants: The baseline snapshot is built once per process and never changes.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Immutable mapping from type identity to a fallback value, scoped to one
/// decode call. Cloning copies the entry table but shares the boxed values.
#[derive(Clone, Default)]
pub struct Configuration {
    defaults: HashMap<TypeId, Entry>,
}

#[derive(Clone)]
struct Entry {
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

impl Configuration {
    /// Configuration with no entries at all; every decode failure propagates.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Copy of the process-wide baseline: every primitive scalar kind mapped
    /// to its zero value (false, 0, 0.0, "").
    pub fn baseline() -> Self {
        static BASELINE: OnceLock<Configuration> = OnceLock::new();
        BASELINE.get_or_init(build_baseline).clone()
    }

    /// Builder seeded from the baseline.
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder {
            defaults: Self::baseline().defaults,
        }
    }

    /// Builder starting from no entries.
    pub fn builder_empty() -> ConfigurationBuilder {
        ConfigurationBuilder {
            defaults: HashMap::new(),
        }
    }

    /// Checked retrieval. `None` means "no fallback registered for `T`",
    /// which callers treat as a signal, never as an error.
    pub fn lookup<T: Clone + Send + Sync + 'static>(&self) -> Option<T> {
        self.defaults
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.value.downcast_ref::<T>())
            .cloned()
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.defaults.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self
            .defaults
            .values()
            .map(|entry| entry.type_name)
            .collect();
        names.sort_unstable();
        f.debug_struct("Configuration")
            .field("registered", &names)
            .finish()
    }
}

/// Mutable staging area for one configuration. `finish` freezes it; there is
/// no way back from `Configuration` to a builder other than copying.
pub struct ConfigurationBuilder {
    defaults: HashMap<TypeId, Entry>,
}

impl ConfigurationBuilder {
    /// Register `value` as the fallback for exactly `T`, overwriting any
    /// prior entry for that type.
    pub fn register<T: Clone + Send + Sync + 'static>(mut self, value: T) -> Self {
        self.defaults.insert(
            TypeId::of::<T>(),
            Entry {
                type_name: type_name::<T>(),
                value: Arc::new(value),
            },
        );
        self
    }

    pub fn finish(self) -> Configuration {
        Configuration {
            defaults: self.defaults,
        }
    }
}

/// A named capability exposing one fixed configuration, selected at the call
/// site via the `*_with` entry points.
pub trait ConfigurationProvider {
    fn configuration() -> Configuration;
}

/// Provider for the plain baseline; what the un-suffixed entry points use.
pub struct BaselineProvider;

impl ConfigurationProvider for BaselineProvider {
    fn configuration() -> Configuration {
        Configuration::baseline()
    }
}

fn build_baseline() -> Configuration {
    Configuration::builder_empty()
        .register(false)
        .register(0i8)
        .register(0i16)
        .register(0i32)
        .register(0i64)
        .register(0u8)
        .register(0u16)
        .register(0u32)
        .register(0u64)
        .register(0f32)
        .register(0f64)
        .register(String::new())
        .finish()
}

#[cfg(test)]
mod tests {
    use super::{BaselineProvider, Configuration, ConfigurationProvider};

    #[test]
    fn baseline_covers_every_scalar_kind() {
        let config = Configuration::baseline();
        assert_eq!(config.lookup::<bool>(), Some(false));
        assert_eq!(config.lookup::<i8>(), Some(0));
        assert_eq!(config.lookup::<i16>(), Some(0));
        assert_eq!(config.lookup::<i32>(), Some(0));
        assert_eq!(config.lookup::<i64>(), Some(0));
        assert_eq!(config.lookup::<u8>(), Some(0));
        assert_eq!(config.lookup::<u16>(), Some(0));
        assert_eq!(config.lookup::<u32>(), Some(0));
        assert_eq!(config.lookup::<u64>(), Some(0));
        assert_eq!(config.lookup::<f32>(), Some(0.0));
        assert_eq!(config.lookup::<f64>(), Some(0.0));
        assert_eq!(config.lookup::<String>(), Some(String::new()));
        assert_eq!(config.len(), 12);
    }

    #[test]
    fn lookup_miss_is_none_not_error() {
        #[derive(Clone, Debug, PartialEq)]
        struct Unregistered;
        assert_eq!(Configuration::baseline().lookup::<Unregistered>(), None);
        assert!(!Configuration::baseline().contains::<Unregistered>());
    }

    #[test]
    fn register_overwrites_prior_entry_for_same_type() {
        let config = Configuration::builder()
            .register(7u64)
            .register(9u64)
            .finish();
        assert_eq!(config.lookup::<u64>(), Some(9));
    }

    #[test]
    fn registered_compound_values_round_trip_by_exact_type() {
        #[derive(Clone, Debug, PartialEq)]
        struct Stop {
            name: String,
        }
        let fallback = vec![Stop {
            name: "depot".to_string(),
        }];
        let config = Configuration::builder().register(fallback.clone()).finish();
        assert_eq!(config.lookup::<Vec<Stop>>(), Some(fallback));
        // A different static type never sees the entry.
        assert_eq!(config.lookup::<Vec<String>>(), None);
    }

    #[test]
    fn empty_configuration_has_no_entries() {
        let config = Configuration::empty();
        assert!(config.is_empty());
        assert_eq!(config.lookup::<String>(), None);
    }

    #[test]
    fn builder_copies_do_not_touch_the_baseline() {
        let customized = Configuration::builder().register(41i64).finish();
        assert_eq!(customized.lookup::<i64>(), Some(41));
        assert_eq!(Configuration::baseline().lookup::<i64>(), Some(0));
    }

    #[test]
    fn baseline_provider_exposes_the_baseline() {
        let provided = BaselineProvider::configuration();
        assert_eq!(provided.len(), Configuration::baseline().len());
    }

    #[test]
    fn debug_lists_registered_type_names() {
        let config = Configuration::builder_empty().register(true).finish();
        assert!(format!("{config:?}").contains("bool"));
    }
}
