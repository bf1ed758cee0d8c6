//! Shared test fixtures for the core test suites.

use rand_chacha::rand_core::{Infallible, TryRng};

/// RNG that always yields zero, turning the Fisher-Yates pass into the
/// identity permutation so tests can pin the direction evaluation order to
/// Up, Down, Left, Right.
pub(crate) struct FixedOrderRng;

impl TryRng for FixedOrderRng {
    type Error = Infallible;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        Ok(0)
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        Ok(0)
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        dst.fill(0);
        Ok(())
    }
}
