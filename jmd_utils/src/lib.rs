use std::sync::{Mutex, MutexGuard, PoisonError};

mod macros;

/// Returns the version of the JMD website tooling.
pub fn jmd_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub trait MutexExt<T> {
    /// Locks the mutex, recovering the inner value if a previous holder
    /// panicked.
    ///
    /// All state guarded this way is plain data that stays consistent between
    /// statements, so a poisoned lock carries no broken invariant.
    fn lock_unpoisoned(&self) -> MutexGuard<'_, T>;
}

impl<T> MutexExt<T> for Mutex<T> {
    fn lock_unpoisoned(&self) -> MutexGuard<'_, T> {
        self.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_unpoisoned_recovers_value() {
        // Arrange
        let mutex = std::sync::Arc::new(Mutex::new(42));
        let cloned = std::sync::Arc::clone(&mutex);
        let _ = std::thread::spawn(move || {
            let _guard = cloned.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        // Act
        let value = *mutex.lock_unpoisoned();

        // Assert
        assert!(mutex.is_poisoned());
        assert_eq!(value, 42);
    }

    #[test]
    fn assert_matches_with_predicate() {
        let value: Result<u8, ()> = Ok(7);
        crate::assert_matches!(value, Ok(x) if *x > 5);
        crate::assert_matches!(value, Ok(7));
    }

    #[test]
    #[should_panic(expected = "`value` does not match `Ok(x) if ")]
    fn assert_matches_reports_guard() {
        let value: Result<u8, ()> = Ok(7);
        crate::assert_matches!(value, Ok(x) if *x > 7);
    }

    #[test]
    #[should_panic(expected = "value: Err(())")]
    fn assert_matches_reports_value() {
        let value: Result<u8, ()> = Err(());
        crate::assert_matches!(value, Ok(_));
    }
}
