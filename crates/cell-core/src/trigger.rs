/// Latch that lets each watched element fire at most once.
///
/// Keys are small indices assigned by the caller (the position of the
/// element in the watched list). Intersection can flap in and out while the
/// browser delivers queued entries; only the first intersecting report for a
/// key returns `true`.
#[derive(Clone, Debug, Default)]
pub struct TriggerOnce {
    fired: Vec<bool>,
}

impl TriggerOnce {
    pub fn new(len: usize) -> Self {
        Self {
            fired: vec![false; len],
        }
    }

    /// Feed one intersection report. Returns `true` exactly once per key,
    /// on its first intersecting report.
    pub fn report(&mut self, key: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        if key >= self.fired.len() {
            self.fired.resize(key + 1, false);
        }
        !std::mem::replace(&mut self.fired[key], true)
    }

    pub fn has_fired(&self, key: usize) -> bool {
        self.fired.get(key).copied().unwrap_or(false)
    }

    /// True once every key has fired; the watcher can disconnect.
    pub fn all_fired(&self) -> bool {
        self.fired.iter().all(|&f| f)
    }
}
