// SPDX-License-Identifier: Apache-2.0

use std::cmp::max;
use std::fmt::{self, Debug, Formatter};
use std::ops::{Index, IndexMut};
use std::slice;
use all_asserts::{debug_assert_le, debug_assert_lt};
use bytemuck::Zeroable;
use bytemuck::allocation::zeroed_slice_box;
use tracing::trace;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::error::OperationKind::{self, *};
use crate::options::ArrOptions;

/// A growable array of plain-old-data elements with direct access to its
/// contiguous backing storage.
///
/// The array tracks a logical length separately from its capacity, the length of
/// the boxed storage. Elements in `[0, len)` are valid, the rest of the storage is
/// zeroed. Storage is only reallocated on growth or an explicit call to
/// [`set_capacity`](Self::set_capacity); it never shrinks on its own.
///
/// Views over the valid elements are plain borrowed slices, see [`as_slice`] and
/// the [`view`](crate::view) module. Since reallocation requires a mutable borrow,
/// a view can never outlive the storage it points into.
///
/// [`as_slice`]: Self::as_slice
#[derive(Clone)]
pub struct Arr<T: Element> {
	storage: Box<[T]>,
	len: usize,
	options: ArrOptions,
}

impl<T: Element> Default for Arr<T> {
	fn default() -> Self { Self::new() }
}

impl<T: Element> Arr<T> {
	/// Creates a new, empty growable array. Nothing is allocated until the first
	/// element is added.
	pub fn new() -> Self {
		Self::with_options(0, ArrOptions::new())
	}

	/// Creates a new growable array with exactly `capacity` zeroed slots.
	pub fn with_capacity(capacity: usize) -> Self {
		Self::with_options(capacity, ArrOptions::new())
	}

	/// Creates a new array with exactly `capacity` slots, growable or fixed.
	pub fn with_capacity_growable(capacity: usize, growable: bool) -> Self {
		Self::with_options(capacity, ArrOptions::new().with_growable(growable))
	}

	/// Creates a new array with exactly `capacity` slots and the given options.
	pub fn with_options(capacity: usize, options: ArrOptions) -> Self {
		Self {
			storage: Self::alloc(capacity),
			len: 0,
			options,
		}
	}

	/// Creates a new growable array from a signed or wider capacity, failing with
	/// [`InvalidArgument`] if it's negative or too large to address.
	///
	/// [`InvalidArgument`]: crate::ErrorKind::InvalidArgument
	pub fn try_with_capacity<C: TryInto<usize>>(capacity: C) -> Result<Self> {
		Self::try_with_options(capacity, ArrOptions::new())
	}

	/// Creates a new growable or fixed array from a signed or wider capacity,
	/// failing with [`InvalidArgument`] if it's negative or too large to address.
	///
	/// [`InvalidArgument`]: crate::ErrorKind::InvalidArgument
	pub fn try_with_capacity_growable<C: TryInto<usize>>(capacity: C, growable: bool) -> Result<Self> {
		Self::try_with_options(capacity, ArrOptions::new().with_growable(growable))
	}

	/// Creates a new array from a signed or wider capacity and options.
	pub fn try_with_options<C: TryInto<usize>>(capacity: C, options: ArrOptions) -> Result<Self> {
		let capacity = capacity.try_into().map_err(|_|
			Error::invalid_argument(Construct, "capacity must be a non-negative index")
		)?;
		Ok(Self::with_options(capacity, options))
	}

	/// Creates a new growable array by copying `values`. The capacity is exactly
	/// the number of values.
	pub fn from_slice(values: &[T]) -> Self {
		Self::from_slice_with_options(values, ArrOptions::new())
	}

	/// Creates a new array by copying `values`, with the given options.
	pub fn from_slice_with_options(values: &[T], options: ArrOptions) -> Self {
		Self {
			storage: values.into(),
			len: values.len(),
			options,
		}
	}

	/// Creates a new growable array by copying an optional source, failing with
	/// [`InvalidArgument`] if it's absent.
	///
	/// [`InvalidArgument`]: crate::ErrorKind::InvalidArgument
	pub fn try_from_source(values: Option<&[T]>) -> Result<Self> {
		let Some(values) = values else {
			return Err(Error::invalid_argument(Construct, "source sequence is absent"))
		};
		Ok(Self::from_slice(values))
	}

	/// Creates a new growable array from an iterator of known length, allocating
	/// once. If the iterator yields fewer elements than it reported, the remaining
	/// capacity is left unused; extra elements are ignored.
	pub fn from_exact<I>(values: I) -> Self
	where
		I: IntoIterator<Item = T>,
		I::IntoIter: ExactSizeIterator
	{
		let values = values.into_iter();
		let mut storage = Self::alloc(values.len());
		let mut len = 0;
		for (slot, value) in storage.iter_mut().zip(values) {
			*slot = value;
			len += 1;
		}

		Self {
			storage,
			len,
			options: ArrOptions::new(),
		}
	}

	/// Returns the number of valid elements.
	#[inline]
	pub fn len(&self) -> usize { self.len }

	/// Returns `true` if the array contains no elements.
	#[inline]
	pub fn is_empty(&self) -> bool { self.len == 0 }

	/// Returns the length of the backing storage.
	#[inline]
	pub fn capacity(&self) -> usize { self.storage.len() }

	/// Returns `true` if the array grows when full.
	#[inline]
	pub fn is_growable(&self) -> bool { self.options.resize.is_growable() }

	/// Returns `true` if the array rejects mutation.
	#[inline]
	pub fn is_read_only(&self) -> bool { self.options.read_only }

	/// Returns the array options.
	#[inline]
	pub fn options(&self) -> ArrOptions { self.options }

	/// Marks the array as read-only or writable.
	pub fn set_read_only(&mut self, value: bool) {
		self.options.read_only = value;
	}

	/// Reallocates the backing storage to exactly `capacity` slots, keeping all
	/// elements. Setting the current capacity does nothing, setting zero releases
	/// the storage. Fails with [`InvalidArgument`] if `capacity` is less than the
	/// length.
	///
	/// Fixed arrays can be resized this way; only implicit growth is disabled.
	///
	/// [`InvalidArgument`]: crate::ErrorKind::InvalidArgument
	pub fn set_capacity(&mut self, capacity: usize) -> Result {
		self.check_writable(SetCapacity)?;
		if capacity < self.len {
			return Err(Error::invalid_argument(SetCapacity, "capacity cannot be less than the length"))
		}

		if capacity != self.capacity() {
			self.realloc(capacity);
		}
		Ok(())
	}

	/// Reserves room for at least `additional` more elements, growing by the usual
	/// policy. Fails with [`CapacityExceeded`] if a fixed array lacks the room.
	///
	/// [`CapacityExceeded`]: crate::ErrorKind::CapacityExceeded
	pub fn reserve(&mut self, additional: usize) -> Result {
		self.check_writable(Reserve)?;
		let min = self.len.checked_add(additional).ok_or(
			Error::invalid_argument(Reserve, "capacity overflow")
		)?;
		self.make_room(Reserve, min)
	}

	/// Shrinks the storage to exactly the length.
	pub fn shrink_to_fit(&mut self) -> Result {
		self.set_capacity(self.len)
	}

	/// Returns a copy of the element at `index`, failing with [`IndexOutOfRange`]
	/// if it's not less than the length.
	///
	/// [`IndexOutOfRange`]: crate::ErrorKind::IndexOutOfRange
	pub fn get(&self, index: usize) -> Result<T> {
		self.check_index(Get, index)?;
		Ok(self.storage[index])
	}

	/// Returns a mutable reference to the element at `index`.
	pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
		self.check_writable(Set)?;
		self.check_index(Set, index)?;
		Ok(&mut self.storage[index])
	}

	/// Replaces the element at `index`, failing with [`IndexOutOfRange`] if it's
	/// not less than the length.
	///
	/// [`IndexOutOfRange`]: crate::ErrorKind::IndexOutOfRange
	pub fn set(&mut self, index: usize, value: T) -> Result {
		*self.get_mut(index)? = value;
		Ok(())
	}

	/// Inserts `value` at `index`, shifting all elements after it to the right.
	/// A full array grows first if growable.
	///
	/// # Errors
	///
	/// - [`IndexOutOfRange`] if `index` is greater than the length.
	/// - [`CapacityExceeded`] if the array is full and fixed.
	/// - [`ReadOnly`] if the array is read-only.
	///
	/// [`IndexOutOfRange`]: crate::ErrorKind::IndexOutOfRange
	/// [`CapacityExceeded`]: crate::ErrorKind::CapacityExceeded
	/// [`ReadOnly`]: crate::ErrorKind::ReadOnly
	pub fn insert(&mut self, index: usize, value: T) -> Result {
		self.check_writable(Insert)?;
		if index > self.len {
			return Err(Error::index_out_of_range(Insert, index, self.len))
		}

		self.make_room(Insert, self.len + 1)?;
		self.insert_unchecked(index, value);
		Ok(())
	}

	/// Appends `value` to the end of the array, growing first if full and growable.
	///
	/// # Errors
	///
	/// - [`CapacityExceeded`] if the array is full and fixed.
	/// - [`ReadOnly`] if the array is read-only.
	///
	/// [`CapacityExceeded`]: crate::ErrorKind::CapacityExceeded
	/// [`ReadOnly`]: crate::ErrorKind::ReadOnly
	pub fn push(&mut self, value: T) -> Result {
		self.check_writable(Append)?;
		self.make_room(Append, self.len + 1)?;
		self.insert_unchecked(self.len, value);
		Ok(())
	}

	/// Appends all `values`, checking for room once. On failure nothing is written.
	pub fn extend_from_slice(&mut self, values: &[T]) -> Result {
		self.check_writable(Append)?;
		let end = self.len.checked_add(values.len()).ok_or(
			Error::invalid_argument(Append, "capacity overflow")
		)?;
		self.make_room(Append, end)?;
		self.storage[self.len..end].copy_from_slice(values);
		self.len = end;
		Ok(())
	}

	/// Removes and returns the last element, or `None` if empty.
	pub fn pop(&mut self) -> Result<Option<T>> {
		self.check_writable(Remove)?;
		if self.len == 0 {
			return Ok(None)
		}

		self.len -= 1;
		let value = self.storage[self.len];
		self.storage[self.len] = T::zeroed();
		Ok(Some(value))
	}

	/// Removes and returns the element at `index`, shifting all elements after it
	/// to the left.
	pub fn remove(&mut self, index: usize) -> Result<T> {
		self.check_writable(Remove)?;
		self.check_index(Remove, index)?;

		let len = self.len;
		let value = self.storage[index];
		self.storage.copy_within(index + 1..len, index);
		self.storage[len - 1] = T::zeroed();
		self.len -= 1;
		Ok(value)
	}

	/// Shortens the array to `len` elements, zeroing the rest. Has no effect if
	/// `len` is not less than the current length. Capacity is unchanged.
	pub fn truncate(&mut self, len: usize) -> Result {
		self.check_writable(Clear)?;
		if len < self.len {
			bytemuck::fill_zeroes(&mut self.storage[len..self.len]);
			self.len = len;
		}
		Ok(())
	}

	/// Zeroes all elements and sets the length to zero. Capacity is unchanged.
	pub fn clear(&mut self) -> Result {
		self.truncate(0)
	}

	/// Returns the index of the first element equal to `value` within the length.
	pub fn index_of(&self, value: &T) -> Option<usize>
	where T: PartialEq {
		self.iter().position(|v| v == value)
	}

	/// Returns `true` if an element within the length equals `value`.
	pub fn contains(&self, value: &T) -> bool
	where T: PartialEq {
		self.as_slice().contains(value)
	}

	/// Returns a slice over the valid elements.
	#[inline]
	pub fn as_slice(&self) -> &[T] { &self.storage[..self.len] }

	/// Returns a mutable slice over the valid elements, or `None` if read-only.
	#[inline]
	pub fn as_mut_slice(&mut self) -> Option<&mut [T]> {
		if self.is_read_only() {
			None
		} else {
			Some(&mut self.storage[..self.len])
		}
	}

	/// Returns a pointer to the start of the backing storage. The pointer is valid
	/// until the array is reallocated or dropped.
	#[inline]
	pub fn as_ptr(&self) -> *const T { self.storage.as_ptr() }

	/// Returns a mutable pointer to the start of the backing storage, or `None` if
	/// read-only.
	#[inline]
	pub fn as_mut_ptr(&mut self) -> Option<*mut T> {
		if self.is_read_only() {
			None
		} else {
			Some(self.storage.as_mut_ptr())
		}
	}

	/// Iterates over the valid elements.
	pub fn iter(&self) -> slice::Iter<'_, T> { self.as_slice().iter() }

	/// Converts the array into a boxed slice of exactly its valid elements.
	pub fn into_boxed_slice(self) -> Box<[T]> {
		if self.len == self.capacity() {
			self.storage
		} else {
			self.as_slice().into()
		}
	}

	/// Converts the array into a vector of its valid elements.
	pub fn into_vec(self) -> Vec<T> {
		let len = self.len;
		let mut vec = self.storage.into_vec();
		vec.truncate(len);
		vec
	}

	fn alloc(capacity: usize) -> Box<[T]> {
		if capacity == 0 {
			Box::default()
		} else {
			zeroed_slice_box(capacity)
		}
	}

	fn realloc(&mut self, capacity: usize) {
		debug_assert_le!(self.len, capacity);

		let mut storage = Self::alloc(capacity);
		storage[..self.len].copy_from_slice(self.as_slice());
		trace!(from = self.capacity(), to = capacity, len = self.len, "reallocated array storage");
		self.storage = storage;
	}

	/// Grows to fit at least `min` elements: the default size if empty, double the
	/// capacity otherwise, clamped to the max length but never below `min`. Does
	/// nothing on fixed arrays.
	fn ensure_capacity(&mut self, min: usize) {
		let capacity = self.capacity();
		if capacity < min && self.is_growable() {
			let ArrOptions { default_size, max_length, .. } = self.options;
			let mut new_capacity = if capacity == 0 {
				max(default_size, 1)
			} else {
				capacity.saturating_mul(2)
			};

			if new_capacity > max_length {
				new_capacity = max_length;
			}

			if new_capacity < min {
				new_capacity = min;
			}

			self.realloc(new_capacity);
		}
	}

	/// Ensures room for `min` elements, failing on fixed arrays that lack it.
	fn make_room(&mut self, op: OperationKind, min: usize) -> Result {
		if min > self.capacity() {
			if !self.is_growable() {
				return Err(Error::capacity_exceeded(op, self.capacity()))
			}

			self.ensure_capacity(min);
		}
		Ok(())
	}

	fn insert_unchecked(&mut self, index: usize, value: T) {
		let len = self.len;
		debug_assert_le!(index, len);
		debug_assert_lt!(len, self.capacity());

		self.storage.copy_within(index..len, index + 1);
		self.storage[index] = value;
		self.len += 1;
	}

	fn check_index(&self, op: OperationKind, index: usize) -> Result {
		if index < self.len {
			Ok(())
		} else {
			Err(Error::index_out_of_range(op, index, self.len))
		}
	}

	fn check_writable(&self, op: OperationKind) -> Result {
		if self.is_read_only() {
			Err(Error::read_only(op))
		} else {
			Ok(())
		}
	}
}

impl<T: Element> From<Vec<T>> for Arr<T> {
	fn from(value: Vec<T>) -> Self {
		value.into_boxed_slice().into()
	}
}

impl<T: Element> From<Box<[T]>> for Arr<T> {
	fn from(storage: Box<[T]>) -> Self {
		Self {
			len: storage.len(),
			storage,
			options: ArrOptions::new(),
		}
	}
}

impl<T: Element> From<&[T]> for Arr<T> {
	fn from(value: &[T]) -> Self { Self::from_slice(value) }
}

impl<T: Element, const N: usize> From<[T; N]> for Arr<T> {
	fn from(value: [T; N]) -> Self { Self::from_slice(&value) }
}

impl<T: Element> FromIterator<T> for Arr<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut arr = Self::new();
		for value in iter {
			arr.ensure_capacity(arr.len + 1);
			arr.insert_unchecked(arr.len, value);
		}
		arr
	}
}

impl<'a, T: Element> IntoIterator for &'a Arr<T> {
	type Item = &'a T;
	type IntoIter = slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T: Element> AsRef<[T]> for Arr<T> {
	fn as_ref(&self) -> &[T] { self.as_slice() }
}

impl<T: Element> Index<usize> for Arr<T> {
	type Output = T;

	fn index(&self, index: usize) -> &T {
		let len = self.len;
		let Some(value) = self.as_slice().get(index) else {
			panic!("index {index} out of range for length {len}")
		};
		value
	}
}

impl<T: Element> IndexMut<usize> for Arr<T> {
	fn index_mut(&mut self, index: usize) -> &mut T {
		match self.get_mut(index) {
			Ok(value) => value,
			Err(error) => panic!("{error}")
		}
	}
}

impl<T: Element + PartialEq> PartialEq for Arr<T> {
	fn eq(&self, other: &Self) -> bool {
		self.as_slice() == other.as_slice()
	}
}

impl<T: Element + Eq> Eq for Arr<T> { }

impl<T: Element + Debug> Debug for Arr<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Arr")
			.field("data", &self.as_slice())
			.field("capacity", &self.capacity())
			.field("options", &self.options)
			.finish()
	}
}
