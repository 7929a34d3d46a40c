//! Bounded meter quantity
//!
//! A meter runs from 0 to a configurable maximum and reports the part of
//! any change that clamped away. Health, mana, stamina and similar.

use vf_core::{Percent, VfError, VfResult};

type Hook = Box<dyn Fn() + Send + Sync>;

/// A clamped quantity in `[0, maximum]` with depletion/refill hooks.
///
/// The meter starts full. Every operation validates its input before any
/// state is touched; a failed call leaves the meter unchanged and fires
/// nothing. Hooks run synchronously on the mutating call stack and observe
/// the already-mutated meter.
pub struct Meter {
    maximum: i32,
    value: i32,
    depleted_hooks: Vec<Hook>,
    refilled_hooks: Vec<Hook>,
}

impl Meter {
    /// Create a full meter with the given maximum.
    pub fn new(maximum: i32) -> VfResult<Self> {
        if maximum <= 0 {
            return Err(VfError::InvalidParam(format!(
                "Meter maximum must be greater than zero. Cannot set to: {maximum}"
            )));
        }
        Ok(Self {
            maximum,
            value: maximum,
            depleted_hooks: Vec::new(),
            refilled_hooks: Vec::new(),
        })
    }

    /// Builder-style initial fill level, validated like [`Meter::set_value`].
    pub fn with_value(mut self, value: i32) -> VfResult<Self> {
        self.set_value(value)?;
        Ok(self)
    }

    #[inline]
    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Raise or lower the ceiling. Does not re-clamp the current value.
    pub fn set_maximum(&mut self, maximum: i32) -> VfResult<()> {
        if maximum <= 0 {
            return Err(VfError::InvalidParam(format!(
                "Meter maximum must be greater than zero. Cannot set to: {maximum}"
            )));
        }
        self.maximum = maximum;
        Ok(())
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Assign the fill level directly.
    ///
    /// Every successful assignment of 0 fires the depleted hooks. A direct
    /// assignment of the maximum does not fire the refilled hooks; only the
    /// increase path does.
    pub fn set_value(&mut self, value: i32) -> VfResult<()> {
        if value > self.maximum {
            return Err(VfError::InvalidParam(format!(
                "Maximum value is {}. Cannot set to: {value}",
                self.maximum
            )));
        }
        if value < 0 {
            return Err(VfError::InvalidParam(format!(
                "Meter value must be a positive number. Cannot set to: {value}"
            )));
        }
        self.value = value;
        if self.value == 0 {
            self.fire_depleted();
        }
        Ok(())
    }

    /// Percentage of the meter currently filled.
    #[inline]
    pub fn percentage_filled(&self) -> f32 {
        Percent::from_ratio(self.value, self.maximum).get()
    }

    /// Subtract `amount`, clamping at zero.
    ///
    /// Returns the part of `amount` that could not be applied.
    pub fn decrease(&mut self, amount: i32) -> VfResult<i32> {
        if amount < 0 {
            return Err(VfError::InvalidParam(format!(
                "Meter decrease amount must be a positive number. Cannot decrease by {amount}."
            )));
        }
        if amount > self.value {
            let remainder = amount - self.value;
            self.set_value(0)?;
            return Ok(remainder);
        }
        self.set_value(self.value - amount)?;
        Ok(0)
    }

    /// Add `amount`, clamping at the maximum.
    ///
    /// Returns the overflow past the maximum. Reaching or exceeding the
    /// maximum fires the refilled hooks, including when `amount` lands on
    /// it exactly.
    pub fn increase(&mut self, amount: i32) -> VfResult<i32> {
        if amount < 0 {
            return Err(VfError::InvalidParam(format!(
                "Meter increase amount must be a positive number. Cannot increase by {amount}."
            )));
        }
        let after = self.value + amount;
        if after >= self.maximum {
            self.set_value(self.maximum)?;
            self.fire_refilled();
            return Ok(after - self.maximum);
        }
        self.set_value(after)?;
        Ok(0)
    }

    /// Top the meter up to its maximum.
    ///
    /// Returns the amount that was added. Fires the refilled hooks even
    /// when the meter was already full.
    pub fn refill(&mut self) -> VfResult<i32> {
        let required = self.maximum - self.value;
        self.increase(required)?;
        Ok(required)
    }

    /// Drain the meter to zero.
    ///
    /// Returns the amount that was drained.
    pub fn deplete(&mut self) -> VfResult<i32> {
        let drained = self.value;
        self.decrease(drained)?;
        Ok(drained)
    }

    /// Move the fill level to `percent` of the maximum (truncated).
    ///
    /// Returns the signed change that was applied: positive when the meter
    /// rose, negative or zero when it fell.
    pub fn fill_to_percent(&mut self, percent: f32) -> VfResult<i32> {
        let desired = Percent::new(percent)?.of(self.maximum);
        if desired > self.value {
            let raise = desired - self.value;
            self.increase(raise)?;
            return Ok(raise);
        }
        let lower = self.value - desired;
        self.decrease(lower)?;
        Ok(-lower)
    }

    /// True once the meter sits at zero.
    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.value == 0
    }

    /// True while the meter sits at its maximum.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.value == self.maximum
    }

    /// Register a hook fired whenever the value reaches zero.
    pub fn on_depleted(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.depleted_hooks.push(Box::new(hook));
    }

    /// Register a hook fired whenever an increase reaches the maximum.
    pub fn on_refilled(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.refilled_hooks.push(Box::new(hook));
    }

    fn fire_depleted(&self) {
        log::debug!("meter depleted (maximum {})", self.maximum);
        for hook in &self.depleted_hooks {
            hook();
        }
    }

    fn fire_refilled(&self) {
        log::debug!("meter refilled to {}", self.maximum);
        for hook in &self.refilled_hooks {
            hook();
        }
    }
}

impl std::fmt::Display for Meter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.value, self.maximum)
    }
}
