//! Block size schedule generation.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::common::config::ScheduleConfig;
use crate::common::error::Result;

/// An ordered sequence of power-of-two block sizes that partitions an
/// address space exactly.
///
/// The schedule starts with two blocks of the minimum capacity, then doubles
/// until it reaches half the address space. The two minimum-size blocks at
/// the front are intentional: together they stand in for the first doubling
/// step, which is what makes the sizes telescope to exactly the full
/// address-space size.
///
/// For the default configuration (8-byte pointers, minimum block of 2):
///
/// ```text
/// [2, 2, 4, 8, 16, ..., 2^63]   // 64 entries, summing to 2^64
/// ```
///
/// # Example
/// ```
/// use blockplan::{BlockSchedule, ScheduleConfig};
///
/// let schedule = BlockSchedule::generate(ScheduleConfig::default()).unwrap();
/// assert_eq!(schedule.len(), 64);
/// assert!(schedule.covers_address_space());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSchedule {
    config: ScheduleConfig,
    max_capacity: BigUint,
    sizes: Vec<BigUint>,
}

impl BlockSchedule {
    /// Generate the schedule for a configuration.
    ///
    /// The configuration is validated first; generation itself cannot fail.
    pub fn generate(config: ScheduleConfig) -> Result<BlockSchedule> {
        config.validate()?;

        let max_capacity = config.max_capacity();
        let half_capacity = &max_capacity >> 1u32;

        let min = BigUint::from(config.min_capacity);
        let mut sizes = vec![min.clone(), min.clone()];

        // Double until the last appended size reaches half the address
        // space. The test runs on the value before doubling, so the final
        // entry equals max_capacity / 2 exactly.
        let mut current = min;
        while current < half_capacity {
            current <<= 1u32;
            sizes.push(current.clone());
        }

        Ok(BlockSchedule {
            config,
            max_capacity,
            sizes,
        })
    }

    /// The configuration this schedule was generated from.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Total address-space size: 2^(8 × ptr_size).
    pub fn max_capacity(&self) -> &BigUint {
        &self.max_capacity
    }

    /// The block sizes, in order.
    pub fn sizes(&self) -> &[BigUint] {
        &self.sizes
    }

    /// Number of blocks in the schedule.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// A schedule always has at least the two minimum-size blocks.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Exact sum of all block sizes.
    pub fn total_size(&self) -> BigUint {
        self.sizes.iter().sum()
    }

    /// Whether the blocks partition the address space exactly,
    /// i.e. `total_size() == max_capacity()`.
    ///
    /// This holds for every valid configuration; it is exposed so callers
    /// (and the diagnostic report) can verify rather than trust it.
    pub fn covers_address_space(&self) -> bool {
        self.total_size() == self.max_capacity
    }

    /// Index of the block whose byte range contains `offset`.
    ///
    /// Block `i` covers the half-open range starting at the sum of all
    /// earlier sizes. Returns `None` when `offset` is at or past the end of
    /// the address space.
    pub fn block_index_of(&self, offset: &BigUint) -> Option<usize> {
        if *offset >= self.max_capacity {
            return None;
        }

        let mut end = BigUint::zero();
        for (index, size) in self.sizes.iter().enumerate() {
            end += size;
            if *offset < end {
                return Some(index);
            }
        }

        // Unreachable: the sizes sum to max_capacity, so every in-range
        // offset falls inside some block.
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    fn default_schedule() -> BlockSchedule {
        BlockSchedule::generate(ScheduleConfig::default()).unwrap()
    }

    #[test]
    fn test_default_schedule_has_64_blocks() {
        assert_eq!(default_schedule().len(), 64);
    }

    #[test]
    fn test_first_two_blocks_are_min_capacity() {
        let schedule = default_schedule();
        let two = BigUint::from(2u32);
        assert_eq!(schedule.sizes()[0], two);
        assert_eq!(schedule.sizes()[1], two);
    }

    #[test]
    fn test_blocks_double_after_the_first_pair() {
        let schedule = default_schedule();
        for i in 2..schedule.len() {
            let doubled = &schedule.sizes()[i - 1] * 2u32;
            assert_eq!(schedule.sizes()[i], doubled, "at index {}", i);
        }
    }

    #[test]
    fn test_last_block_is_half_the_address_space() {
        let schedule = default_schedule();
        let expected = BigUint::one() << 63u32;
        assert_eq!(schedule.sizes().last().unwrap(), &expected);
        assert_eq!(
            expected.to_string(),
            "9223372036854775808" // 2^63
        );
    }

    #[test]
    fn test_total_size_is_exactly_the_address_space() {
        let schedule = default_schedule();
        assert_eq!(&schedule.total_size(), schedule.max_capacity());
        assert!(schedule.covers_address_space());
        assert_eq!(
            schedule.total_size().to_string(),
            "18446744073709551616" // 2^64, one past u64::MAX
        );
    }

    #[test]
    fn test_one_byte_width_schedule() {
        let schedule = BlockSchedule::generate(ScheduleConfig::new(1, 2)).unwrap();
        let expected: Vec<BigUint> = [2u32, 2, 4, 8, 16, 32, 64, 128]
            .iter()
            .map(|&n| BigUint::from(n))
            .collect();
        assert_eq!(schedule.sizes(), expected.as_slice());
        assert_eq!(schedule.total_size(), BigUint::from(256u32));
    }

    #[test]
    fn test_min_capacity_at_half_the_space() {
        // min = max/2 leaves no room to double: just the duplicated pair
        let schedule = BlockSchedule::generate(ScheduleConfig::new(1, 128)).unwrap();
        assert_eq!(schedule.len(), 2);
        assert!(schedule.covers_address_space());
    }

    #[test]
    fn test_larger_min_capacity_still_covers() {
        let schedule = BlockSchedule::generate(ScheduleConfig::new(2, 16)).unwrap();
        assert_eq!(schedule.sizes()[0], BigUint::from(16u32));
        assert_eq!(schedule.sizes()[1], BigUint::from(16u32));
        assert!(schedule.covers_address_space());
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        assert!(BlockSchedule::generate(ScheduleConfig::new(8, 3)).is_err());
        assert!(BlockSchedule::generate(ScheduleConfig::new(0, 2)).is_err());
    }

    #[test]
    fn test_schedule_is_never_empty() {
        assert!(!default_schedule().is_empty());
    }

    #[test]
    fn test_block_index_of_boundaries() {
        // Default schedule: block 0 = [0, 2), block 1 = [2, 4),
        // block 2 = [4, 8), ... block 63 = [2^63, 2^64)
        let schedule = default_schedule();

        assert_eq!(schedule.block_index_of(&BigUint::zero()), Some(0));
        assert_eq!(schedule.block_index_of(&BigUint::from(1u32)), Some(0));
        assert_eq!(schedule.block_index_of(&BigUint::from(2u32)), Some(1));
        assert_eq!(schedule.block_index_of(&BigUint::from(3u32)), Some(1));
        assert_eq!(schedule.block_index_of(&BigUint::from(4u32)), Some(2));
        assert_eq!(schedule.block_index_of(&BigUint::from(7u32)), Some(2));
        assert_eq!(schedule.block_index_of(&BigUint::from(8u32)), Some(3));

        // Last byte of the space lands in the last block
        let last_byte = schedule.max_capacity() - BigUint::one();
        assert_eq!(schedule.block_index_of(&last_byte), Some(63));

        // max_capacity itself is out of range
        assert_eq!(schedule.block_index_of(schedule.max_capacity()), None);
    }
}
