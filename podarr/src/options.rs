// SPDX-License-Identifier: Apache-2.0

/// The default capacity of a growable array's first allocation.
pub const DEFAULT_SIZE: usize = 5;
/// The length ceiling the growth policy clamps doubled capacities to.
pub const MAX_LENGTH: usize = 0x7FF_FFFF;

/// Options for tuning [`Arr`](crate::Arr)'s resize behavior.
///
/// # Resize
///
/// A [growable](Resize::Grow) array reallocates when an insert or append finds it
/// full, a [fixed](Resize::Fixed) array rejects the element instead. Either way,
/// capacity can still be assigned explicitly with [`Arr::set_capacity`].
///
/// # Default size
///
/// The capacity allocated when a growable array with no storage first grows.
/// Defaults to `5`. Full arrays with storage double their capacity instead.
///
/// # Max length
///
/// The ceiling doubling is clamped to, `0x7FFFFFF` by default. This guards against
/// pathological allocations from repeated doubling, not against explicit requests:
/// growth to fit a larger minimum than the ceiling still succeeds.
///
/// # Read-only
///
/// Marks the array as read-only, rejecting every mutating operation. Off by default.
///
/// [`Arr::set_capacity`]: crate::Arr::set_capacity
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ArrOptions {
	pub resize: Resize,
	pub default_size: usize,
	pub max_length: usize,
	pub read_only: bool,
}

/// The array resize mode.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Resize {
	/// Never grow implicitly; reject elements past capacity.
	Fixed,
	/// Grow by doubling when capacity is exhausted.
	#[default]
	Grow,
}

impl Resize {
	/// Returns `true` if the mode is [`Fixed`](Self::Fixed).
	pub fn is_fixed(&self) -> bool {
		matches!(self, Self::Fixed)
	}

	/// Returns `true` if the mode is [`Grow`](Self::Grow).
	pub fn is_growable(&self) -> bool {
		matches!(self, Self::Grow)
	}
}

impl From<bool> for Resize {
	fn from(growable: bool) -> Self {
		if growable { Self::Grow } else { Self::Fixed }
	}
}

impl Default for ArrOptions {
	fn default() -> Self { Self::new() }
}

impl ArrOptions {
	/// Creates a new set of array options.
	pub const fn new() -> Self {
		Self {
			resize: Resize::Grow,
			default_size: DEFAULT_SIZE,
			max_length: MAX_LENGTH,
			read_only: false,
		}
	}

	/// Presets the options to create a growable array. Same as [`Self::new`].
	#[inline]
	pub const fn growable() -> Self { Self::new() }

	/// Presets the options to create a fixed-size array, which never reallocates
	/// unless its capacity is set explicitly.
	#[inline]
	pub const fn fixed() -> Self {
		Self {
			resize: Resize::Fixed,
			..Self::new()
		}
	}

	/// Returns the resize mode.
	#[inline]
	pub const fn resize(&self) -> Resize { self.resize }

	/// Returns the capacity of the first growth allocation.
	#[inline]
	pub const fn default_size(&self) -> usize { self.default_size }

	/// Returns the growth ceiling.
	#[inline]
	pub const fn max_length(&self) -> usize { self.max_length }

	/// Returns `true` if arrays are created read-only.
	#[inline]
	pub const fn read_only(&self) -> bool { self.read_only }

	/// Sets the resize mode.
	#[inline]
	pub fn set_resize(&mut self, value: Resize) {
		self.resize = value;
	}

	/// Sets the capacity of the first growth allocation. Zero is treated as one.
	#[inline]
	pub fn set_default_size(&mut self, value: usize) {
		self.default_size = value;
	}

	/// Sets the growth ceiling.
	#[inline]
	pub fn set_max_length(&mut self, value: usize) {
		self.max_length = value;
	}

	/// Sets whether arrays are created read-only.
	#[inline]
	pub fn set_read_only(&mut self, value: bool) {
		self.read_only = value;
	}

	/// Sets the resize mode.
	#[inline]
	pub const fn with_resize(mut self, value: Resize) -> Self {
		self.resize = value;
		self
	}

	/// Sets the resize mode from a `growable` flag.
	#[inline]
	pub const fn with_growable(self, growable: bool) -> Self {
		self.with_resize(if growable { Resize::Grow } else { Resize::Fixed })
	}

	/// Sets the capacity of the first growth allocation.
	#[inline]
	pub const fn with_default_size(mut self, value: usize) -> Self {
		self.default_size = value;
		self
	}

	/// Sets the growth ceiling.
	#[inline]
	pub const fn with_max_length(mut self, value: usize) -> Self {
		self.max_length = value;
		self
	}

	/// Sets whether arrays are created read-only.
	#[inline]
	pub const fn with_read_only(mut self, value: bool) -> Self {
		self.read_only = value;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let options = ArrOptions::default();
		assert_eq!(options.resize(), Resize::Grow);
		assert_eq!(options.default_size(), 5);
		assert_eq!(options.max_length(), 0x7FFFFFF);
		assert!(!options.read_only());
	}

	#[test]
	fn growable_flag() {
		assert!(ArrOptions::new().with_growable(false).resize().is_fixed());
		assert!(ArrOptions::fixed().with_growable(true).resize().is_growable());
		assert_eq!(Resize::from(false), Resize::Fixed);
	}
}
