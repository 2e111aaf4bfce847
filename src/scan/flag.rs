/*!
# Scanopt: Flag Set.
*/

use std::collections::BTreeSet;
use super::{
	Flag,
	OptionDescriptor,
};



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Raised Flags.
///
/// Each [`Scanner`](crate::Scanner) owns one of these, recording the
/// [`Flag`]s of every option it has matched so far.
pub struct FlagSet(BTreeSet<Flag>);

impl FlagSet {
	#[must_use]
	/// # New (Empty).
	pub const fn new() -> Self { Self(BTreeSet::new()) }

	#[must_use]
	/// # Is Set?
	pub fn contains(&self, flag: Flag) -> bool { self.0.contains(&flag) }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	#[must_use]
	/// # Number Raised.
	pub fn len(&self) -> usize { self.0.len() }

	/// # Iterate Raised Flags.
	///
	/// Flags are returned in ascending order.
	pub fn iter(&self) -> impl Iterator<Item=Flag> + '_ { self.0.iter().copied() }

	/// # Mark Matched.
	///
	/// Raise the option's flag, if it has one. Raising an already-raised flag
	/// is a no-op.
	pub fn mark_matched(&mut self, opt: &OptionDescriptor) {
		if let Some(flag) = opt.flag() { self.0.insert(flag); }
	}
}
