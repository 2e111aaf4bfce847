/*!
# Scanopt: Option Scanner.

This module contains the [`Scanner`] state machine along with the option
[table](OptionTable) it resolves tokens against.
*/

mod error;
mod flag;
mod opt;
mod table;

pub use error::ScanoptError;
pub use flag::FlagSet;
pub use opt::{
	Flag,
	OptionDescriptor,
};
pub use table::{
	OptionTable,
	Query,
};
use std::iter::FusedIterator;
use tracing::trace;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Classification.
///
/// This is the return type of [`Scanner::advance`]. Each variant has a
/// corresponding set of [`Scanner`] accessors holding the details:
///
/// | Variant | Accessors |
/// | ------- | --------- |
/// | `EndOfInput` | |
/// | `Positional` | [`Scanner::positional`] |
/// | `Unknown` | [`Scanner::unknown`] |
/// | `MissingArgument` | [`Scanner::matched`], [`Scanner::short`], [`Scanner::long`] |
/// | `Matched` | [`Scanner::matched`], [`Scanner::short`], [`Scanner::long`], [`Scanner::argument`] |
pub enum Classification {
	/// # No More Arguments.
	EndOfInput,

	/// # A Bare Value.
	Positional,

	/// # An Unrecognized Option.
	Unknown,

	/// # An Option Missing Its Argument.
	MissingArgument,

	/// # A Recognized Option.
	///
	/// This holds the option's short name, if it has one.
	Matched(Option<char>),
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Scanner State.
pub enum ScanState {
	/// # Reading Tokens.
	Scanning,

	/// # Working Through a Short Option Bundle (`-abc`).
	DrainingBundle,

	/// # Nothing Left.
	Done,
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Scanned Argument.
///
/// This is the owned, all-in-one alternative to [`Classification`] returned
/// when using a [`Scanner`] as an [`Iterator`].
pub enum Argument {
	/// # A Recognized Option (Without an Argument).
	Matched(OptionDescriptor),

	/// # A Recognized Option and Its Argument.
	MatchedWithValue(OptionDescriptor, String),

	/// # An Option Missing Its Argument.
	MissingArgument(OptionDescriptor),

	/// # A Bare Value.
	Positional(String),

	/// # An Unrecognized Option (With Its Dash Prefix).
	Unknown(String),
}



#[derive(Debug, Clone)]
/// # Option Scanner.
///
/// `Scanner` walks a list of command-line arguments one step at a time,
/// classifying each as a recognized option, an unknown option, a positional
/// value, or an option missing its required argument.
///
/// Short options can be bundled, e.g. `-abc` for `-a -b -c`. Only the last
/// letter of a bundle can take an argument, and it takes the _next_ token;
/// any earlier letter requiring one is reported as
/// [`Classification::MissingArgument`].
///
/// A few deliberate simplifications:
/// * `--key=value` is not split; it is looked up as the long name `key=value`;
/// * `-kvalue` is a bundle, not a key and value;
/// * A bare `--` is a positional value like any other, not a terminator;
/// * Positional values are reported where they fall, never deferred;
///
/// ## Examples
///
/// ```
/// use scanopt::{Classification, OptionDescriptor, OptionTable, Scanner};
///
/// let table = OptionTable::try_from([
///     OptionDescriptor::new(Some('a'), "", false),
///     OptionDescriptor::new(Some('b'), "", false),
///     OptionDescriptor::new(Some('f'), "file", true),
/// ]).unwrap();
///
/// let mut scan = Scanner::new(&table, ["-ab", "--file", "out.txt", "extra"]);
///
/// assert_eq!(scan.advance(), Classification::Matched(Some('a')));
/// assert_eq!(scan.advance(), Classification::Matched(Some('b')));
///
/// assert_eq!(scan.advance(), Classification::Matched(Some('f')));
/// assert_eq!(scan.long(), Some("file"));
/// assert_eq!(scan.argument(), Some("out.txt"));
///
/// assert_eq!(scan.advance(), Classification::Positional);
/// assert_eq!(scan.positional(), Some("extra"));
///
/// assert_eq!(scan.advance(), Classification::EndOfInput);
/// ```
pub struct Scanner<'a> {
	/// # Known Options.
	table: &'a OptionTable,

	/// # Arguments.
	args: Vec<String>,

	/// # Next Argument Index.
	cursor: usize,

	/// # Pending Bundle.
	///
	/// When set, this is the byte offset of the next unresolved letter within
	/// `args[cursor - 1]`. It is never left pointing at the end of the string.
	bundle: Option<usize>,

	/// # Raised Flags.
	flags: FlagSet,

	/// # Current Option.
	opt: Option<&'a OptionDescriptor>,

	/// # Current Option Argument (Index).
	argument: Option<usize>,

	/// # Current Positional (Index).
	positional: Option<usize>,

	/// # Current Unknown.
	unknown: String,
}

impl<'a> Scanner<'a> {
	/// # New.
	///
	/// Create a new scanner for the arguments. The program name, if any,
	/// should already be stripped off; see [`args`] for the common case.
	pub fn new<I, S>(table: &'a OptionTable, args: I) -> Self
	where I: IntoIterator<Item=S>, S: Into<String> {
		Self {
			table,
			args: args.into_iter().map(Into::into).collect(),
			cursor: 0,
			bundle: None,
			flags: FlagSet::new(),
			opt: None,
			argument: None,
			positional: None,
			unknown: String::new(),
		}
	}
}

impl<'a> Scanner<'a> {
	#[must_use]
	/// # Matched Option.
	///
	/// Valid after [`Classification::Matched`] and
	/// [`Classification::MissingArgument`].
	pub const fn matched(&self) -> Option<&'a OptionDescriptor> { self.opt }

	#[must_use]
	/// # Matched Short Name.
	///
	/// Valid after [`Classification::Matched`] and
	/// [`Classification::MissingArgument`].
	pub fn short(&self) -> Option<char> { self.opt.and_then(OptionDescriptor::short) }

	#[must_use]
	/// # Matched Long Name.
	///
	/// Valid after [`Classification::Matched`] and
	/// [`Classification::MissingArgument`].
	pub fn long(&self) -> Option<&'static str> { self.opt.and_then(OptionDescriptor::long) }

	#[must_use]
	/// # Matched Option's Argument.
	///
	/// Valid after [`Classification::Matched`] for options requiring an
	/// argument.
	pub fn argument(&self) -> Option<&str> {
		self.argument.map(|idx| self.args[idx].as_str())
	}

	#[must_use]
	/// # Positional Value.
	///
	/// Valid after [`Classification::Positional`].
	pub fn positional(&self) -> Option<&str> {
		self.positional.map(|idx| self.args[idx].as_str())
	}

	#[must_use]
	/// # Unknown Option.
	///
	/// Valid after [`Classification::Unknown`]. The text includes its dashes:
	/// `-x` for a short option, `--xyz` for a long one.
	pub fn unknown(&self) -> Option<&str> {
		if self.unknown.is_empty() { None }
		else { Some(self.unknown.as_str()) }
	}
}

impl Scanner<'_> {
	#[must_use]
	/// # Cursor.
	///
	/// Return the index of the next unread argument. This only ever goes up,
	/// and holds still while a bundle is being worked through.
	pub const fn cursor(&self) -> usize { self.cursor }

	#[must_use]
	/// # State.
	pub fn state(&self) -> ScanState {
		if self.bundle.is_some() { ScanState::DrainingBundle }
		else if self.cursor < self.args.len() { ScanState::Scanning }
		else { ScanState::Done }
	}

	#[must_use]
	/// # Remaining Arguments.
	///
	/// Return the arguments not yet read. Letters pending from a bundle are
	/// not included.
	pub fn remaining(&self) -> &[String] {
		self.args.get(self.cursor..).unwrap_or_default()
	}

	#[must_use]
	/// # Raised Flags.
	pub const fn flags(&self) -> &FlagSet { &self.flags }

	#[must_use]
	/// # Is Flag Set?
	pub fn is_set(&self, flag: Flag) -> bool { self.flags.contains(flag) }

	#[must_use]
	/// # Into Flags.
	///
	/// Consume the scanner, returning the flags it raised.
	pub fn into_flags(self) -> FlagSet { self.flags }
}

impl<'a> Scanner<'a> {
	/// # Advance.
	///
	/// Classify the next argument, or the next letter of a pending bundle.
	///
	/// The accessors are reset on every call; only those corresponding to the
	/// returned [`Classification`] will hold anything.
	///
	/// Once [`Classification::EndOfInput`] is returned, it will be returned
	/// for every subsequent call too.
	pub fn advance(&mut self) -> Classification {
		self.reset();

		let class = match self.next_bundled() {
			Some(class) => class,
			None if self.cursor < self.args.len() => self.next_token(),
			None => Classification::EndOfInput,
		};

		trace!(cursor = self.cursor, ?class, "advance");
		class
	}

	/// # Reset Step Fields.
	fn reset(&mut self) {
		self.opt = None;
		self.argument = None;
		self.positional = None;
		self.unknown.clear();
	}

	/// # Next Token.
	fn next_token(&mut self) -> Classification {
		let idx = self.cursor;
		self.cursor += 1;

		let token = self.args[idx].as_str();
		let mut chars = token.chars();
		match (chars.next(), chars.next()) {
			// Long.
			(Some('-'), Some('-')) if 2 < token.len() => {
				let table: &'a OptionTable = self.table;
				if let Some(opt) = table.find_long(&token[2..]) { self.resolve(opt) }
				else {
					self.unknown.push_str(token);
					Classification::Unknown
				}
			},

			// Short, possibly bundled.
			(Some('-'), Some(short)) if short != '-' => {
				let next = 1 + short.len_utf8();
				if next < token.len() {
					trace!(token, "bundle");
					self.bundle = Some(next);
				}
				self.resolve_short(short)
			},

			// Everything else: "", "-", "--", "foo".
			_ => {
				self.positional = Some(idx);
				Classification::Positional
			},
		}
	}

	/// # Next Bundled Letter.
	///
	/// Returns `None` if there is no pending bundle.
	fn next_bundled(&mut self) -> Option<Classification> {
		let offset = self.bundle.take()?;
		let token = self.args.get(self.cursor.checked_sub(1)?)?.as_str();
		let short = token.get(offset..)?.chars().next()?;

		let next = offset + short.len_utf8();
		if next < token.len() { self.bundle = Some(next); }
		Some(self.resolve_short(short))
	}

	/// # Resolve Short Name.
	fn resolve_short(&mut self, short: char) -> Classification {
		let table: &'a OptionTable = self.table;
		if let Some(opt) = table.find_short(short) { self.resolve(opt) }
		else {
			self.unknown.push('-');
			self.unknown.push(short);
			Classification::Unknown
		}
	}

	/// # Resolve Match.
	///
	/// Record the option, raise its flag, and claim its argument from the
	/// next token if it needs one. Options still followed by bundled letters
	/// cannot take an argument.
	fn resolve(&mut self, opt: &'a OptionDescriptor) -> Classification {
		self.flags.mark_matched(opt);
		self.opt = Some(opt);

		if opt.requires_argument() {
			if self.bundle.is_some() || self.args.len() <= self.cursor {
				return Classification::MissingArgument;
			}
			self.argument = Some(self.cursor);
			self.cursor += 1;
		}

		Classification::Matched(opt.short())
	}
}

impl Iterator for Scanner<'_> {
	type Item = Argument;

	fn next(&mut self) -> Option<Self::Item> {
		match self.advance() {
			Classification::EndOfInput => None,
			Classification::Positional =>
				self.positional().map(|v| Argument::Positional(v.to_owned())),
			Classification::Unknown =>
				self.unknown().map(|v| Argument::Unknown(v.to_owned())),
			Classification::MissingArgument =>
				self.opt.copied().map(Argument::MissingArgument),
			Classification::Matched(_) => {
				let opt = self.opt.copied()?;
				Some(match self.argument() {
					Some(v) => Argument::MatchedWithValue(opt, v.to_owned()),
					None => Argument::Matched(opt),
				})
			},
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		// Anything left yields at least one item, and no token can yield more
		// than one per byte.
		let lower = usize::from(self.bundle.is_some() || self.cursor < self.args.len());
		let upper = self.remaining().iter()
			.map(String::len)
			.try_fold(0_usize, |acc, len| acc.checked_add(len.max(1)))
			.and_then(|total| match self.bundle {
				Some(offset) => total.checked_add(self.args[self.cursor - 1].len() - offset),
				None => Some(total),
			});
		(lower, upper)
	}
}

impl FusedIterator for Scanner<'_> {}



#[must_use]
/// # CLI Argument Scanner.
///
/// Return a [`Scanner`] seeded with [`std::env::args_os`], skipping the first
/// (program name) entry. Arguments that aren't valid UTF-8 are converted
/// lossily.
///
/// ## Examples
///
/// ```no_run
/// use scanopt::{Argument, OptionDescriptor, OptionTable};
///
/// let table = OptionTable::try_from([
///     OptionDescriptor::new(Some('h'), "help", false),
/// ]).unwrap();
///
/// for arg in scanopt::args(&table) {
///     match arg {
///         Argument::Matched(_) => println!("Help! Help!"),
///         Argument::Positional(v) => println!("Found: {v}"),
///         other => eprintln!("Unexpected: {other:?}"),
///     }
/// }
/// ```
pub fn args(table: &OptionTable) -> Scanner<'_> {
	Scanner::new(
		table,
		std::env::args_os().skip(1).map(|v| v.to_string_lossy().into_owned()),
	)
}
