//! Кэш последнего вычисления для производных селекторов.
//!
//! Хранит пару `(ключ, результат)` и пересчитывает значение только когда ключ
//! меняется. Для снимков состояния ключ сравнивается по указателю (см.
//! `Snapshot`), поэтому одинаковые по содержимому, но разные снимки считаются
//! новыми входными данными.

use std::sync::Arc;

#[derive(Debug)]
pub struct Memoized<K, V> {
    last: Option<(K, Arc<V>)>,
    recomputations: u64,
}

impl<K: PartialEq, V> Memoized<K, V> {
    pub fn new() -> Self {
        Self {
            last: None,
            recomputations: 0,
        }
    }

    /// Значение из кэша для `key`; при смене ключа вычисляется заново.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> Arc<V> {
        if let Some((last_key, value)) = &self.last {
            if *last_key == key {
                return Arc::clone(value);
            }
        }

        let value = Arc::new(compute());
        self.recomputations += 1;
        self.last = Some((key, Arc::clone(&value)));
        value
    }

    /// Сколько раз значение вычислялось
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}

impl<K: PartialEq, V> Default for Memoized<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
