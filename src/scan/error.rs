/*!
# Scanopt: Errors.
*/

use std::fmt;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Error!
///
/// Only [`OptionTable`](crate::OptionTable) construction can fail. Scanning
/// itself never does; unknown options and missing arguments are reported
/// through [`Classification`](crate::Classification) instead.
pub enum ScanoptError {
	/// # Duplicate Long Name.
	DuplicateLong(&'static str),

	/// # Duplicate Short Name.
	DuplicateShort(char),

	/// # Neither Short Nor Long.
	Nameless,
}

impl std::error::Error for ScanoptError {}

impl fmt::Display for ScanoptError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::DuplicateLong(s) => write!(f, "Duplicate option: --{s}"),
			Self::DuplicateShort(c) => write!(f, "Duplicate option: -{c}"),
			Self::Nameless => f.write_str(self.as_str()),
		}
	}
}

impl ScanoptError {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::DuplicateLong(_) | Self::DuplicateShort(_) => "Duplicate option.",
			Self::Nameless => "Options need a short or long name.",
		}
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_display() {
		assert_eq!(
			ScanoptError::DuplicateLong("file").to_string(),
			"Duplicate option: --file",
		);
		assert_eq!(
			ScanoptError::DuplicateShort('f').to_string(),
			"Duplicate option: -f",
		);
		assert_eq!(
			ScanoptError::Nameless.to_string(),
			ScanoptError::Nameless.as_str(),
		);
	}
}
