/*!
# Scanopt: Option Descriptors.
*/

use super::Query;



#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Flag Handle.
///
/// A caller-chosen identifier linking one or more [`OptionDescriptor`]s to a
/// boolean in the scanner's [`FlagSet`](crate::FlagSet). The flag is raised
/// the moment any linked option is matched, and can be checked at any point
/// thereafter.
///
/// ## Examples
///
/// ```
/// use scanopt::{Flag, OptionDescriptor, OptionTable, Scanner};
///
/// const VERBOSE: Flag = Flag::new(0);
///
/// let table = OptionTable::new()
///     .with_option(OptionDescriptor::new(Some('v'), "verbose", false).with_flag(VERBOSE))
///     .unwrap();
///
/// let mut scan = Scanner::new(&table, ["-v"]);
/// while scan.next().is_some() {}
/// assert!(scan.is_set(VERBOSE));
/// ```
pub struct Flag(u16);

impl Flag {
	#[must_use]
	/// # New.
	pub const fn new(id: u16) -> Self { Self(id) }

	#[must_use]
	/// # As `u16`.
	pub const fn as_u16(self) -> u16 { self.0 }
}



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Option Descriptor.
///
/// This describes a single recognized option: its short name (`-f`), its
/// long name (`--file`), whether or not it requires an argument, and the
/// optional [`Flag`] to raise when it is matched.
///
/// Either name may be omitted, but not both.
///
/// ## Examples
///
/// ```
/// use scanopt::OptionDescriptor;
///
/// // A short/long switch.
/// let help = OptionDescriptor::new(Some('h'), "help", false);
/// assert_eq!(help.short(), Some('h'));
/// assert_eq!(help.long(), Some("help"));
///
/// // An empty long name means there isn't one.
/// let out = OptionDescriptor::new(Some('o'), "", true);
/// assert_eq!(out.long(), None);
/// assert!(out.requires_argument());
/// ```
pub struct OptionDescriptor {
	/// # Short Name.
	short: Option<char>,

	/// # Long Name.
	long: Option<&'static str>,

	/// # Requires an Argument?
	argument: bool,

	/// # Flag to Raise.
	flag: Option<Flag>,
}

impl OptionDescriptor {
	#[must_use]
	/// # New.
	///
	/// Pass `None` for options without a short name, and `""` for options
	/// without a long one.
	pub const fn new(short: Option<char>, long: &'static str, requires_argument: bool)
	-> Self {
		Self {
			short,
			long: if long.is_empty() { None } else { Some(long) },
			argument: requires_argument,
			flag: None,
		}
	}

	#[must_use]
	/// # With Flag.
	///
	/// Link the option to a [`Flag`].
	pub const fn with_flag(self, flag: Flag) -> Self {
		Self {
			flag: Some(flag),
			..self
		}
	}
}

impl OptionDescriptor {
	#[must_use]
	/// # Short Name.
	pub const fn short(&self) -> Option<char> { self.short }

	#[must_use]
	/// # Long Name.
	pub const fn long(&self) -> Option<&'static str> { self.long }

	#[must_use]
	/// # Requires an Argument?
	pub const fn requires_argument(&self) -> bool { self.argument }

	#[must_use]
	/// # Linked Flag.
	pub const fn flag(&self) -> Option<Flag> { self.flag }

	#[must_use]
	/// # Matches Query?
	///
	/// Returns `true` if the query names this option.
	///
	/// ## Examples
	///
	/// ```
	/// use scanopt::{OptionDescriptor, Query};
	///
	/// let opt = OptionDescriptor::new(Some('f'), "file", true);
	/// assert!(opt.matches(Query::Short('f')));
	/// assert!(opt.matches(Query::Long("file")));
	/// assert!(! opt.matches(Query::Long("f")));
	/// ```
	pub fn matches(&self, query: Query<'_>) -> bool {
		match query {
			Query::Short(c) => self.short == Some(c),
			Query::Long(s) => self.long.is_some_and(|l| l == s),
		}
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_new() {
		let opt = OptionDescriptor::new(None, "", false);
		assert_eq!(opt.short(), None);
		assert_eq!(opt.long(), None);
		assert!(! opt.requires_argument());
		assert_eq!(opt.flag(), None);

		let opt = opt.with_flag(Flag::new(3));
		assert_eq!(opt.flag(), Some(Flag::new(3)));
		assert_eq!(opt.flag().map(Flag::as_u16), Some(3));
	}

	#[test]
	fn t_matches() {
		let opt = OptionDescriptor::new(Some('a'), "aaa", false);
		assert!(opt.matches(Query::Short('a')));
		assert!(! opt.matches(Query::Short('b')));
		assert!(opt.matches(Query::Long("aaa")));
		assert!(! opt.matches(Query::Long("bbb")));

		// Nameless halves never match anything, empty strings included.
		let opt = OptionDescriptor::new(None, "", false);
		assert!(! opt.matches(Query::Long("")));
		assert!(! opt.matches(Query::Short('\0')));
	}
}
