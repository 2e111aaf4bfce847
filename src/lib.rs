/*!
# Scanopt

This crate provides a small, getopt-style CLI option scanner called [`Scanner`]. Declare the options your app understands in an [`OptionTable`], then step through the arguments one at a time, handling each [`Classification`] however you see fit.

[`Scanner`] recognizes short options (`-v`), long options (`--verbose`), and bundled short options (`-abc` for `-a -b -c`). Options can require an argument, which is taken from the following token. Anything else is either a positional value or an unknown option, reported exactly where it occurs.

That is all it does. Help screens, value parsing, and deciding whether an unknown option is fatal are left _entirely up to you_.



## Example

A general setup might look something like the following.

```
use scanopt::{
    Classification,
    Flag,
    OptionDescriptor,
    OptionTable,
    Scanner,
};
use std::path::PathBuf;

const VERBOSE: Flag = Flag::new(0);

#[derive(Debug, Clone, Default)]
/// # Configuration.
struct Settings {
    threads: usize,
    paths: Vec<PathBuf>,
}

let table = OptionTable::try_from([
    OptionDescriptor::new(Some('h'), "help", false),
    OptionDescriptor::new(Some('j'), "threads", true),
    OptionDescriptor::new(Some('v'), "verbose", false).with_flag(VERBOSE),
]).unwrap(); // An error will only occur if a name is repeated.

// Most of the time you'll want scanopt::args(&table) instead.
let mut scan = Scanner::new(&table, ["-vj", "4", "/foo/bar"]);

// Loop and handle!
let mut settings = Settings::default();
loop {
    match scan.advance() {
        Classification::EndOfInput => break,
        Classification::Matched(Some('h')) => {
            println!("Help Screen Goes Here.");
            return;
        },
        Classification::Matched(Some('j')) => {
            settings.threads = scan.argument()
                .and_then(|v| v.parse().ok())
                .expect("Threads must be a number!");
        },
        Classification::Positional => {
            settings.paths.extend(scan.positional().map(PathBuf::from));
        },
        Classification::Unknown => {
            eprintln!("Unknown option: {}", scan.unknown().unwrap_or_default());
        },
        Classification::MissingArgument => {
            eprintln!("Missing argument for {:?}.", scan.short());
        },
        // -v is handled by its flag.
        Classification::Matched(_) => {},
    }
}

assert!(scan.is_set(VERBOSE));
assert_eq!(settings.threads, 4);
assert_eq!(settings.paths, [PathBuf::from("/foo/bar")]);
```

If you'd rather not juggle accessors, [`Scanner`] is also an [`Iterator`] of owned [`Argument`]s.
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod scan;
pub use scan::{
	args,
	Argument,
	Classification,
	Flag,
	FlagSet,
	OptionDescriptor,
	OptionTable,
	Query,
	ScanoptError,
	ScanState,
	Scanner,
};
