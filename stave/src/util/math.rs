/// Perform a rounded division.
///
/// This is implemented for all unsigned integers.
pub(crate) trait RoundedDivision<Rhs = Self> {
	type Output;

	fn div_round(self, rhs: Rhs) -> Self::Output;
}

macro_rules! unsigned_rounded_division {
	($($t:ty),*) => {
		$(
			impl RoundedDivision for $t {
				type Output = $t;

				fn div_round(self, rhs: Self) -> Self::Output {
					(self + (rhs >> 1)) / rhs
				}
			}
		)*
	};
}

unsigned_rounded_division!(u8, u16, u32, u64, usize);

/// Scale a raw field value against the maximum of its bit width, as a 0..=100 percentage.
///
/// Used by the reverb accessors, where feedback and premix levels are stored as a
/// fraction of the full 8-bit range.
pub(crate) fn scale_percentage(value: u32, bits: u32) -> u8 {
	debug_assert!((1..=31).contains(&bits));

	let max = (1u32 << bits) - 1;
	(value * 100).div_round(max) as u8
}
