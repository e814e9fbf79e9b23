//! Locking around the projection library

use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

/// How calls into the projection library are synchronized
///
/// Older projection libraries are not reentrant and need every call
///   serialized behind one lock shared by all transforms; newer ones need
///   nothing.  The policy is chosen when a
///   [ProjTransform](../proj_transform/struct.ProjTransform.html) is built.
#[derive(Debug,Clone)]
pub enum ProjLock {
    /// Calls run concurrently
    Reentrant,
    /// Calls are serialized on the shared mutex
    Serialized(Arc<Mutex<()>>),
}

impl ProjLock {
    /// New serialized policy with its own mutex
    ///
    /// Clone the result to share it between transforms
    pub fn serialized() -> Self {
        ProjLock::Serialized(Arc::new(Mutex::new(())))
    }
    /// Serialized policy on the mutex shared by the whole process
    pub fn process_wide() -> Self {
        static LOCK: OnceLock<Arc<Mutex<()>>> = OnceLock::new();
        ProjLock::Serialized(LOCK.get_or_init(|| Arc::new(Mutex::new(()))).clone())
    }
    /// Calls under this policy are serialized
    pub fn is_serialized(&self) -> bool {
        matches!(self, ProjLock::Serialized(_))
    }
    /// Hold for the duration of one projection call
    ///
    /// A poisoned lock guards no data and is taken anyway
    pub fn acquire(&self) -> Option<MutexGuard<'_, ()>> {
        match self {
            ProjLock::Reentrant => None,
            ProjLock::Serialized(m) => Some(m.lock().unwrap_or_else(|e| e.into_inner())),
        }
    }
}

/// `Reentrant`, or `process_wide()` with the `serialize-projections` feature
impl Default for ProjLock {
    fn default() -> Self {
        if cfg!(feature = "serialize-projections") {
            ProjLock::process_wide()
        } else {
            ProjLock::Reentrant
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_wide_is_shared() {
        let (a, b) = (ProjLock::process_wide(), ProjLock::process_wide());
        match (a, b) {
            (ProjLock::Serialized(a), ProjLock::Serialized(b)) => assert!(Arc::ptr_eq(&a, &b)),
            _ => panic!("expected serialized locks"),
        }
    }

    #[test]
    fn reentrant_takes_no_guard() {
        assert!(ProjLock::Reentrant.acquire().is_none());
        let lock = ProjLock::serialized();
        assert!(lock.is_serialized());
        let guard = lock.acquire();
        assert!(guard.is_some());
    }

    #[test]
    fn default_follows_feature() {
        assert_eq!(ProjLock::default().is_serialized(), cfg!(feature = "serialize-projections"));
    }
}
