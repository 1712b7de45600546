//! Version-keyed memoization.
//!
//! `CachedValue<T>` remembers the input version a value was derived from.
//! Owners bump their version whenever an input changes; a lookup at a
//! different version is a miss and recomputes.

#[derive(Debug, Clone)]
pub struct CachedValue<T> {
    value: Option<T>,
    computed_at_version: u64,
}

impl<T> Default for CachedValue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CachedValue<T> {
    pub const fn new() -> Self {
        Self {
            value: None,
            computed_at_version: 0,
        }
    }

    /// The cached value if it was computed at `current_version`
    pub fn get(&self, current_version: u64) -> Option<&T> {
        if self.computed_at_version == current_version {
            self.value.as_ref()
        } else {
            None
        }
    }

    pub fn set(&mut self, value: T, version: u64) {
        self.value = Some(value);
        self.computed_at_version = version;
    }

    pub fn is_valid(&self, current_version: u64) -> bool {
        self.value.is_some() && self.computed_at_version == current_version
    }

    pub fn invalidate(&mut self) {
        self.value = None;
    }

    pub fn version(&self) -> u64 {
        self.computed_at_version
    }

    /// Return the cached value for `version`, computing and storing it on a miss
    pub fn get_or_compute<F, E>(&mut self, version: u64, compute: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let cached = self
            .value
            .take()
            .filter(|_| self.computed_at_version == version);
        let value = match cached {
            Some(value) => value,
            None => compute()?,
        };
        self.computed_at_version = version;
        Ok(self.value.insert(value))
    }
}
