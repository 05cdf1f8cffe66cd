//! `HashMap` helpers
//!
//! Output order of [`keys`] and [`values`] follows the map's iteration order,
//! which is unspecified.

use std::collections::HashMap;
use std::hash::Hash;

/// All keys of the map
pub fn keys<K: Clone, V>(map: &HashMap<K, V>) -> Vec<K> {
    map.keys().cloned().collect()
}

/// All values of the map
pub fn values<K, V: Clone>(map: &HashMap<K, V>) -> Vec<V> {
    map.values().cloned().collect()
}

/// Index `values` by the key `key_fn` derives from each one
///
/// Later values replace earlier ones with the same key.
pub fn create_map<K: Eq + Hash, V: Clone>(values: &[V], mut key_fn: impl FnMut(&V) -> K) -> HashMap<K, V> {
    let mut map = HashMap::with_capacity(values.len());
    for value in values {
        map.insert(key_fn(value), value.clone());
    }
    map
}

/// New map with every value transformed by `f`
pub fn map_values<K: Eq + Hash + Clone, V, R>(map: &HashMap<K, V>, mut f: impl FnMut(&V) -> R) -> HashMap<K, R> {
    map.iter().map(|(key, value)| (key.clone(), f(value))).collect()
}

/// New map with every key transformed by `f`
///
/// If `f` sends two keys to the same new key, only one of their values
/// survives.
pub fn map_keys<K, K2: Eq + Hash, V: Clone>(map: &HashMap<K, V>, mut f: impl FnMut(&K) -> K2) -> HashMap<K2, V> {
    map.iter().map(|(key, value)| (f(key), value.clone())).collect()
}
