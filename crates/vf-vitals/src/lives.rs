//! Remaining-attempts counter
//!
//! Tracks how many tries an entity has left. Unlike a meter, lowering the
//! maximum caps the remaining count to the new ceiling.

use vf_core::{VfError, VfResult};

type Hook = Box<dyn Fn() + Send + Sync>;

/// A clamped counter in `[0, maximum]` with a depletion hook.
///
/// Starts full. There are no increment/decrement helpers; callers assign
/// through [`Lives::set_remaining`]. Validation precedes mutation, so a
/// failed call leaves the counter unchanged and fires nothing.
pub struct Lives {
    maximum: i32,
    remaining: i32,
    depleted_hooks: Vec<Hook>,
}

impl Lives {
    /// Create a counter with all attempts available.
    pub fn new(maximum: i32) -> VfResult<Self> {
        if maximum <= 0 {
            return Err(VfError::InvalidParam(format!(
                "Maximum lives must be greater than zero. Cannot set to: {maximum}"
            )));
        }
        Ok(Self {
            maximum,
            remaining: maximum,
            depleted_hooks: Vec::new(),
        })
    }

    #[inline]
    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Raise or lower the ceiling, capping `remaining` to the new maximum.
    ///
    /// The cap is a direct field write: it never fires the depleted hooks.
    pub fn set_maximum(&mut self, maximum: i32) -> VfResult<()> {
        if maximum <= 0 {
            return Err(VfError::InvalidParam(format!(
                "Maximum lives must be greater than zero. Cannot set to: {maximum}"
            )));
        }
        self.maximum = maximum;
        self.remaining = self.remaining.min(self.maximum);
        Ok(())
    }

    #[inline]
    pub fn remaining(&self) -> i32 {
        self.remaining
    }

    /// Assign the remaining count. Reaching 0 fires the depleted hooks.
    pub fn set_remaining(&mut self, remaining: i32) -> VfResult<()> {
        if remaining > self.maximum {
            return Err(VfError::InvalidParam(format!(
                "Maximum lives is {}. Cannot set remaining to: {remaining}",
                self.maximum
            )));
        }
        if remaining < 0 {
            return Err(VfError::InvalidParam(format!(
                "Remaining lives must be a positive number. Cannot set remaining to: {remaining}"
            )));
        }
        self.remaining = remaining;
        if self.remaining == 0 {
            self.fire_depleted();
        }
        Ok(())
    }

    /// True once every attempt has been spent.
    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.remaining == 0
    }

    /// Register a hook fired whenever the remaining count reaches zero.
    pub fn on_depleted(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.depleted_hooks.push(Box::new(hook));
    }

    fn fire_depleted(&self) {
        log::debug!("lives depleted (maximum {})", self.maximum);
        for hook in &self.depleted_hooks {
            hook();
        }
    }
}

impl std::fmt::Display for Lives {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.remaining, self.maximum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const MAXIMUM_LIVES: i32 = 5;

    fn lives() -> Lives {
        Lives::new(MAXIMUM_LIVES).unwrap()
    }

    fn counted_depleted(lives: &mut Lives) -> Arc<AtomicUsize> {
        let fired = Arc::new(AtomicUsize::new(0));
        let probe = Arc::clone(&fired);
        lives.on_depleted(move || {
            probe.fetch_add(1, Ordering::SeqCst);
        });
        fired
    }

    #[test]
    fn test_remaining_starts_full() {
        assert_eq!(lives().remaining(), MAXIMUM_LIVES);
    }

    #[test]
    fn test_cannot_construct_with_non_positive_maximum() {
        assert!(Lives::new(0).is_err());
        assert!(Lives::new(-5).is_err());
    }

    #[test]
    fn test_cannot_set_non_positive_maximum() {
        let mut lives = lives();
        assert!(lives.set_maximum(0).is_err());
        assert!(lives.set_maximum(-5).is_err());
        assert_eq!(lives.maximum(), MAXIMUM_LIVES);
        assert_eq!(lives.remaining(), MAXIMUM_LIVES);
    }

    #[test]
    fn test_cannot_set_remaining_above_maximum() {
        let mut lives = lives();
        assert!(lives.set_remaining(10).is_err());
        assert_eq!(lives.remaining(), MAXIMUM_LIVES);
    }

    #[test]
    fn test_cannot_set_negative_remaining() {
        let mut lives = lives();
        assert!(lives.set_remaining(-5).is_err());
        assert_eq!(lives.remaining(), MAXIMUM_LIVES);
    }

    #[test]
    fn test_lowering_maximum_caps_remaining() {
        let mut lives = lives();
        lives.set_maximum(3).unwrap();

        assert_eq!(lives.remaining(), 3);
    }

    #[test]
    fn test_raising_maximum_leaves_remaining_alone() {
        let mut lives = lives();
        let before = lives.remaining();
        lives.set_maximum(10).unwrap();

        assert_eq!(lives.remaining(), before);
    }

    #[test]
    fn test_remaining_reaching_zero_fires_depleted() {
        let mut lives = lives();
        let fired = counted_depleted(&mut lives);

        lives.set_remaining(0).unwrap();

        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(lives.is_depleted());
    }

    #[test]
    fn test_maximum_cap_fires_no_depletion() {
        let mut lives = lives();
        let fired = counted_depleted(&mut lives);

        lives.set_remaining(0).unwrap();
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // Re-clamping an already-empty counter stays silent.
        lives.set_maximum(3).unwrap();
        assert_eq!(lives.remaining(), 0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_assignment_fires_nothing() {
        let mut lives = lives();
        let fired = counted_depleted(&mut lives);

        assert!(lives.set_remaining(-1).is_err());
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_spending_a_life() {
        let mut lives = lives();
        lives.set_remaining(lives.remaining() - 1).unwrap();

        assert_eq!(lives.remaining(), MAXIMUM_LIVES - 1);
    }

    #[test]
    fn test_display_renders_hud_fraction() {
        let mut lives = lives();
        lives.set_remaining(2).unwrap();
        assert_eq!(lives.to_string(), "2/5");
    }
}
