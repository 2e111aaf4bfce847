/*!
# Scanopt: Debug

This example scans any arbitrary arguments fed to it against a small option
table and displays the results.

Set `RUST_LOG=scanopt=trace` to watch the scanner work.
*/

use scanopt::{
	Classification,
	Flag,
	OptionDescriptor,
	OptionTable,
};
use tracing_subscriber::EnvFilter;



/// # Verbose Flag.
const VERBOSE: Flag = Flag::new(0);

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let table = match OptionTable::try_from([
		OptionDescriptor::new(Some('a'), "all", false),
		OptionDescriptor::new(Some('b'), "", false),
		OptionDescriptor::new(Some('f'), "file", true),
		OptionDescriptor::new(Some('v'), "verbose", false).with_flag(VERBOSE),
	]) {
		Ok(t) => t,
		Err(e) => {
			eprintln!("\x1b[1;91mError:\x1b[0m {e}");
			std::process::exit(1);
		},
	};

	let mut scan = scanopt::args(&table);
	loop {
		let class = scan.advance();
		println!("\x1b[2m-----\x1b[0m\n{class:?}");
		match class {
			Classification::EndOfInput => break,
			Classification::Positional => println!("  {:?}", scan.positional()),
			Classification::Unknown => println!("  {:?}", scan.unknown()),
			Classification::MissingArgument => println!("  {:?} {:?}", scan.short(), scan.long()),
			Classification::Matched(_) => println!(
				"  {:?} {:?} {:?}",
				scan.short(),
				scan.long(),
				scan.argument(),
			),
		}
	}
	println!("\x1b[2m-----\x1b[0m");
	println!("Verbose: {}", scan.is_set(VERBOSE));
}
