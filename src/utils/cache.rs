/// Memoization cell keyed on a monotonically increasing epoch counter.
///
/// The owner bumps its epoch whenever the inputs of the cached value change;
/// the value is recomputed on the next access from a newer epoch.
#[derive(Debug, Clone)]
pub struct EpochCache<T> {
    entry: Option<(u64, T)>,
}

impl<T> Default for EpochCache<T> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<T> EpochCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a value computed at `epoch` is held.
    pub fn is_fresh(&self, epoch: u64) -> bool {
        matches!(self.entry, Some((e, _)) if e == epoch)
    }

    pub fn get_or_compute<F>(&mut self, epoch: u64, compute: F) -> &T
    where
        F: FnOnce() -> T,
    {
        if !self.is_fresh(epoch) {
            self.entry = None;
        }
        &self.entry.get_or_insert_with(|| (epoch, compute())).1
    }
}
