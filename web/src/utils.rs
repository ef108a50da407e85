/// Seed drawn from JavaScript's Math.random, one byte at a time.
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes(core::array::from_fn(|_| (256. * random()) as u8))
}
