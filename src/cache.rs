use crate::math::WyHashBuilder;
use std::{collections::HashMap, fmt, hash::Hash};

/// A lazily filled map. When an item is looked up, and it does not exist, it
/// gets created with a builder function. Entries are never removed: once a
/// value has been built for a key, that exact value is returned for every
/// later lookup, for the life of the cache. This also means the map grows with
/// every new key it sees, so it should only be handed keys from some bounded
/// region.
///
/// The builder is allowed to be stateful (it might be drawing random numbers).
/// The first value it returns for a key is pinned, so `get` stays consistent
/// even when the builder is not.
///
/// The key is copy because the builder takes it by value, and we still need it
/// for the map insert afterwards. This map is meant to be used with small
/// keys, so the Copy restriction is worthwhile.
///
/// Example:
/// ```
/// use bb_noise::Cache;
/// use std::sync::{Arc, Mutex};
///
/// // An atomic would work too, but a Mutex<i32> is clearer. The closure must
/// // be `Send`, so the counter is shared through the mutex.
/// let num_calls = Arc::new(Mutex::new(0));
/// let num_calls_clone = num_calls.clone();
/// let mut cache = Cache::new(move |key| {
///   *num_calls_clone.lock().unwrap() += 1;
///   key * key
/// });
///
/// assert_eq!(*cache.get(4), 16);
/// assert_eq!(*cache.get(4), 16); // This will not call the builder.
/// assert_eq!(*num_calls.lock().unwrap(), 1);
///
/// assert_eq!(*cache.get(9), 81); // This calls the builder again.
/// assert_eq!(*num_calls.lock().unwrap(), 2);
/// assert_eq!(*cache.get(9), 81); // This won't call the builder.
/// assert_eq!(*num_calls.lock().unwrap(), 2);
/// ```
pub struct Cache<K, V> {
  data:    HashMap<K, V, WyHashBuilder>,
  builder: Box<dyn FnMut(K) -> V + Send>,
}

impl<K, V> Cache<K, V> {
  /// Creates an empty cache. Nothing is allocated until the first lookup.
  pub fn new<F: FnMut(K) -> V + Send + 'static>(builder: F) -> Self {
    Cache { data: HashMap::with_hasher(WyHashBuilder), builder: Box::new(builder) }
  }
}

impl<K, V> Cache<K, V>
where
  K: Eq + Hash + Copy,
{
  /// Looks up the given key. If it is not present, the builder runs to create
  /// its value. Either way, a reference into the map is returned.
  pub fn get(&mut self, key: K) -> &V {
    if !self.data.contains_key(&key) {
      let value = (self.builder)(key);
      self.data.insert(key, value);
    }
    &self.data[&key]
  }
}

impl<K, V> fmt::Debug for Cache<K, V> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("Cache").field("size", &self.data.len()).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use std::sync::{Arc, Mutex};

  #[test]
  fn cache_get() {
    let mut cache = Cache::new(|key| key + 10);
    assert_eq!(*cache.get(5), 15);
  }

  #[test]
  fn builder_runs_once_per_key() {
    let calls = Arc::new(Mutex::new(0));
    let calls_clone = calls.clone();
    let mut cache = Cache::new(move |key: (i32, i32)| {
      *calls_clone.lock().unwrap() += 1;
      key.0 + key.1
    });

    for _ in 0..10 {
      assert_eq!(*cache.get((2, 3)), 5);
    }
    assert_eq!(*calls.lock().unwrap(), 1);

    for x in 0..5 {
      for y in 0..4 {
        cache.get((x, y));
      }
    }
    // 20 distinct keys were looked up in total, and (2, 3) was already present.
    assert_eq!(*calls.lock().unwrap(), 20);
  }

  #[test]
  fn stateful_builders_get_pinned() {
    let mut next = 0;
    let mut cache = Cache::new(move |_key: u8| {
      next += 1;
      next
    });

    assert_eq!(*cache.get(7), 1);
    assert_eq!(*cache.get(7), 1);
    assert_eq!(*cache.get(200), 2);
    assert_eq!(*cache.get(7), 1);
    assert_eq!(*cache.get(200), 2);
  }

  #[test]
  fn extreme_keys() {
    let mut cache = Cache::new(|key: i32| i64::from(key) * 2);
    assert_eq!(*cache.get(i32::MIN), i64::from(i32::MIN) * 2);
    assert_eq!(*cache.get(i32::MAX), i64::from(i32::MAX) * 2);
    assert_eq!(*cache.get(-1), -2);
    assert_eq!(format!("{cache:?}"), "Cache { size: 3 }");
  }
}
