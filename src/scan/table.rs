/*!
# Scanopt: Option Table.
*/

use super::{
	OptionDescriptor,
	ScanoptError,
};
use tracing::debug;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Lookup Query.
///
/// Options are looked up either by their short or long name. The long name
/// should be passed _without_ its leading dashes.
pub enum Query<'a> {
	/// # Short Name.
	Short(char),

	/// # Long Name.
	Long(&'a str),
}

impl From<char> for Query<'_> {
	#[inline]
	fn from(src: char) -> Self { Self::Short(src) }
}

impl<'a> From<&'a str> for Query<'a> {
	#[inline]
	fn from(src: &'a str) -> Self { Self::Long(src) }
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Option Table.
///
/// This is the ordered list of options a [`Scanner`](crate::Scanner) knows
/// about. It is built once, up front, and is read-only thereafter, so can be
/// shared by any number of scanners.
///
/// Short and long names must be unique across the table.
///
/// ## Examples
///
/// ```
/// use scanopt::{OptionDescriptor, OptionTable};
///
/// let table = OptionTable::new()
///     .with_options([
///         OptionDescriptor::new(Some('h'), "help", false),
///         OptionDescriptor::new(Some('o'), "output", true),
///         OptionDescriptor::new(None, "verbose", false),
///     ])
///     .unwrap();
///
/// assert_eq!(table.len(), 3);
/// assert!(table.find_short('o').is_some());
/// assert!(table.find_long("verbose").is_some());
///
/// // Repeats are rejected.
/// assert!(table.with_option(OptionDescriptor::new(Some('h'), "", false)).is_err());
/// ```
pub struct OptionTable(Vec<OptionDescriptor>);

impl<'a> IntoIterator for &'a OptionTable {
	type Item = &'a OptionDescriptor;
	type IntoIter = std::slice::Iter<'a, OptionDescriptor>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<const N: usize> TryFrom<[OptionDescriptor; N]> for OptionTable {
	type Error = ScanoptError;

	fn try_from(src: [OptionDescriptor; N]) -> Result<Self, Self::Error> {
		Self::new().with_options(src)
	}
}

impl OptionTable {
	#[must_use]
	/// # New (Empty).
	pub const fn new() -> Self { Self(Vec::new()) }

	/// # With Option.
	///
	/// Append an option to the table.
	///
	/// ## Errors
	///
	/// This will return an error if the option has no names, or if either of
	/// its names was previously registered.
	pub fn with_option(mut self, opt: OptionDescriptor) -> Result<Self, ScanoptError> {
		if opt.short().is_none() && opt.long().is_none() {
			debug!("rejected nameless option");
			return Err(ScanoptError::Nameless);
		}

		if let Some(c) = opt.short() {
			if self.find_short(c).is_some() {
				debug!(short = %c, "rejected duplicate option");
				return Err(ScanoptError::DuplicateShort(c));
			}
		}

		if let Some(s) = opt.long() {
			if self.find_long(s).is_some() {
				debug!(long = s, "rejected duplicate option");
				return Err(ScanoptError::DuplicateLong(s));
			}
		}

		self.0.push(opt);
		Ok(self)
	}

	/// # With Options.
	///
	/// Append one or more options to the table, in order.
	///
	/// ## Errors
	///
	/// This will return an error if any option has no names, or if any name
	/// is repeated.
	pub fn with_options<I: IntoIterator<Item=OptionDescriptor>>(self, opts: I)
	-> Result<Self, ScanoptError> {
		opts.into_iter().try_fold(self, Self::with_option)
	}
}

impl OptionTable {
	#[must_use]
	/// # Find.
	///
	/// Return the first option matching the query, if any.
	///
	/// ## Examples
	///
	/// ```
	/// use scanopt::{OptionDescriptor, OptionTable, Query};
	///
	/// let table = OptionTable::try_from([
	///     OptionDescriptor::new(Some('f'), "file", true),
	/// ]).unwrap();
	///
	/// assert!(table.find(Query::Short('f')).is_some());
	/// assert!(table.find(Query::Long("file")).is_some());
	/// assert!(table.find(Query::Long("nope")).is_none());
	/// ```
	pub fn find(&self, query: Query<'_>) -> Option<&OptionDescriptor> {
		self.0.iter().find(|opt| opt.matches(query))
	}

	#[inline]
	#[must_use]
	/// # Find by Short Name.
	pub fn find_short(&self, short: char) -> Option<&OptionDescriptor> {
		self.find(Query::Short(short))
	}

	#[inline]
	#[must_use]
	/// # Find by Long Name.
	///
	/// The name should not include the leading `--`.
	pub fn find_long(&self, long: &str) -> Option<&OptionDescriptor> {
		self.find(Query::Long(long))
	}

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	#[must_use]
	/// # Length.
	pub fn len(&self) -> usize { self.0.len() }

	/// # Iterate Options.
	///
	/// Options are returned in the order they were added.
	pub fn iter(&self) -> std::slice::Iter<'_, OptionDescriptor> { self.0.iter() }
}
