//! Configuration constants and the validated schedule configuration.

use num_bigint::BigUint;
use num_traits::One;

use crate::common::error::{Error, Result};

/// Number of bits in a byte.
pub const BITS_PER_BYTE: usize = 8;

/// Number of bytes in a pointer (default configuration).
///
/// With 8-byte pointers the addressable space is:
/// - 2^64 bytes = 18,446,744,073,709,551,616 bytes
///
/// Note that 2^64 exceeds `u64::MAX` by exactly one, which is why every
/// capacity in this crate is a [`BigUint`] rather than a native integer.
pub const PTR_SIZE: usize = 8;

/// Smallest block size in a schedule (default configuration).
pub const MIN_CAPACITY: u64 = 2;

/// Parameters for schedule generation.
///
/// The shipped binary always uses [`ScheduleConfig::default`], but the
/// generator accepts any configuration that passes [`validate`].
///
/// # Example
/// ```
/// use blockplan::ScheduleConfig;
///
/// let config = ScheduleConfig::default();
/// assert_eq!(config.ptr_size, 8);
/// assert_eq!(config.min_capacity, 2);
/// assert!(config.validate().is_ok());
/// ```
///
/// [`validate`]: ScheduleConfig::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Pointer width in bytes. Determines the total addressable space.
    pub ptr_size: usize,

    /// Smallest block size in bytes. Must be a power of two, at least 2.
    pub min_capacity: u64,
}

impl ScheduleConfig {
    /// Create a configuration with explicit parameters.
    pub fn new(ptr_size: usize, min_capacity: u64) -> Self {
        ScheduleConfig {
            ptr_size,
            min_capacity,
        }
    }

    /// Total addressable space for this pointer width: 2^(8 × ptr_size).
    pub fn max_capacity(&self) -> BigUint {
        BigUint::one() << (self.ptr_size * BITS_PER_BYTE)
    }

    /// Check the preconditions for schedule generation.
    ///
    /// Fails fast with [`Error::InvalidConfiguration`] when:
    /// - `ptr_size` is zero,
    /// - `min_capacity` is below 2 or not a power of two,
    /// - `min_capacity` does not fit the address space.
    pub fn validate(&self) -> Result<()> {
        if self.ptr_size == 0 {
            return Err(Error::invalid_configuration(
                "pointer width must be at least one byte",
            ));
        }
        if self.min_capacity < 2 {
            return Err(Error::invalid_configuration(format!(
                "minimum capacity {} is below 2",
                self.min_capacity
            )));
        }
        if !self.min_capacity.is_power_of_two() {
            return Err(Error::invalid_configuration(format!(
                "minimum capacity {} is not a power of two",
                self.min_capacity
            )));
        }
        if BigUint::from(self.min_capacity) >= self.max_capacity() {
            return Err(Error::invalid_configuration(format!(
                "minimum capacity {} does not fit a {}-byte address space",
                self.min_capacity, self.ptr_size
            )));
        }
        Ok(())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig::new(PTR_SIZE, MIN_CAPACITY)
    }
}
