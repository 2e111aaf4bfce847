/*!
# Benchmark: `scanopt::Scanner`
*/

use brunch::{
	Bench,
	benches,
};
use scanopt::{
	Classification,
	OptionDescriptor,
	OptionTable,
	Scanner,
};

fn table() -> OptionTable {
	OptionTable::try_from([
		OptionDescriptor::new(Some('k'), "key", true),
		OptionDescriptor::new(Some('q'), "quiet", false),
		OptionDescriptor::new(Some('v'), "verbose", false),
		OptionDescriptor::new(Some('x'), "", false),
	]).expect("Unable to build table.")
}

const ARGS: [&str; 8] = [
	"-k",
	"val",
	"--quiet",
	"-vx",
	"--nope",
	"/foo/bar",
	"-",
	"/bar/baz",
];

benches!(
	Bench::new("scanopt::Scanner::new(8)")
		.run_seeded_with(table, |t| Scanner::new(&t, ARGS).cursor()),

	Bench::spacer(),

	Bench::new("scanopt::Scanner::advance(*)")
		.run_seeded_with(table, |t| {
			let mut scan = Scanner::new(&t, ARGS);
			let mut count = 0_usize;
			while scan.advance() != Classification::EndOfInput { count += 1; }
			count
		}),

	Bench::new("scanopt::Scanner::count()")
		.run_seeded_with(table, |t| Scanner::new(&t, ARGS).count()),
);
