// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hmacfn
// File: app.rs
// Author: hmacfn maintainers

use crate::hfn::config::{HmacConfig, ARGUMENT_DESCRIPTIONS};
use crate::hfn::function::HmacFunction;
use crate::hfn::mac::encoding::MessagePolicy;
use crate::hfn::mac::registry::{self, MacAlgorithmMetadata, MacError};
use crate::hfn::mac::{compute_mac, MacOutput, DEFAULT_ALGORITHM};
use crate::hfn::variables::{ScriptVariables, VariableStore};
use clap::{crate_name, Arg, ArgAction, ArgMatches};
use serde::Serialize;
use serde_json::json;
use std::error::Error;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
{about-with-newline}
Commands:
  hmacfn compute <PLAINTEXT> <KEY>   Compute an HMAC (e.g. hmacfn compute hello secret -a HmacSHA1)
  hmacfn call <PARAM>...             Evaluate __HMAC(plaintext, key[, algorithm[, variable_name]])
  hmacfn algorithms                  List supported algorithms
  hmacfn describe                    Show the __HMAC parameter table
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Debug, Serialize)]
struct AlgorithmView {
	identifier: &'static str,
	alias: &'static str,
	display_name: &'static str,
	output_len: usize,
	legacy: bool,
}

impl From<MacAlgorithmMetadata> for AlgorithmView {
	fn from(metadata: MacAlgorithmMetadata) -> Self {
		Self {
			identifier: metadata.identifier,
			alias: metadata.alias,
			display_name: metadata.display_name,
			output_len: metadata.output_len,
			legacy: metadata.legacy,
		}
	}
}

fn strict_arg() -> Arg {
	Arg::new("strict")
		.long("strict")
		.help("Reject non-ASCII plaintext instead of replacing it with `?`")
		.action(ArgAction::SetTrue)
}

fn build_cli() -> clap::Command {
	clap::Command::new(crate_name!())
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.bin_name(crate_name!())
		.version(clap::crate_version!())
		.about("Keyed-hash (HMAC) helper for load-test scripts")
		.subcommand_required(true)
		.arg_required_else_help(true)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.global(true)
				.help("Log filter used when RUST_LOG is unset (e.g. debug)")
				.default_value("warn"),
		)
		.subcommand(
			clap::command!("compute")
				.about("Compute the lowercase hex HMAC of a plaintext")
				.arg(
					Arg::new("plaintext")
						.help("Message to authenticate")
						.required(true),
				)
				.arg(
					Arg::new("key")
						.help("Shared secret (UTF-8)")
						.required(true),
				)
				.arg(
					Arg::new("algorithm")
						.short('a')
						.long("algorithm")
						.help("Algorithm name (e.g., HmacSHA256, hmac-sha1)")
						.default_value(DEFAULT_ALGORITHM),
				)
				.arg(
					Arg::new("var")
						.long("var")
						.help("Bind the result to this variable name"),
				)
				.arg(strict_arg())
				.arg(
					Arg::new("json")
						.long("json")
						.help("Emit a JSON object instead of the bare digest")
						.action(ArgAction::SetTrue),
				),
		)
		.subcommand(
			clap::command!("call")
				.about("Evaluate the __HMAC function with raw positional parameters")
				.arg(
					Arg::new("params")
						.help("plaintext, key[, algorithm[, variable_name]]")
						.num_args(0..)
						.allow_hyphen_values(true),
				)
				.arg(strict_arg()),
		)
		.subcommand(
			clap::command!("algorithms")
				.about("List supported HMAC algorithms")
				.arg(
					Arg::new("json")
						.long("json")
						.help("Emit the catalog as JSON")
						.action(ArgAction::SetTrue),
				),
		)
		.subcommand(
			clap::command!("describe")
				.about("Show the __HMAC parameter table"),
		)
}

fn init_logging(level: &str) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(level));
	// A subscriber may already be installed when embedded in a host.
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.try_init();
}

fn message_policy(args: &ArgMatches) -> MessagePolicy {
	if args.get_flag("strict") {
		MessagePolicy::Strict
	} else {
		MessagePolicy::Replace
	}
}

/// Computes the tag and, when `variable` is set, binds it into `vars`.
/// A failure is logged and binds the name to the empty string before the
/// error is returned.
fn compute_and_bind(
	plaintext: &str,
	key: &str,
	algorithm: &str,
	policy: MessagePolicy,
	variable: Option<&str>,
	vars: &mut dyn VariableStore,
) -> Result<MacOutput, MacError> {
	match compute_mac(plaintext, key, algorithm, policy) {
		Ok(output) => {
			if let Some(name) = variable {
				vars.put(name, &output.hex);
			}
			Ok(output)
		}
		Err(err) => {
			error!(kind = err.kind().as_str(), "{}", err);
			if let Some(name) = variable {
				vars.put(name, "");
			}
			Err(err)
		}
	}
}

fn compute_payload(
	output: &MacOutput,
	variable: Option<&str>,
	vars: &ScriptVariables,
) -> serde_json::Value {
	let bound = variable
		.map(|name| json!({ "name": name, "value": vars.get(name) }));
	json!({
		"algorithm": output.metadata.identifier,
		"display_name": output.metadata.display_name,
		"legacy": output.metadata.is_legacy(),
		"digest": output.hex,
		"variable": bound,
	})
}

fn handle_compute(args: &ArgMatches) -> Result<(), Box<dyn Error>> {
	let plaintext = args
		.get_one::<String>("plaintext")
		.ok_or("plaintext is required")?;
	let key = args.get_one::<String>("key").ok_or("key is required")?;
	let algorithm = args
		.get_one::<String>("algorithm")
		.map(String::as_str)
		.unwrap_or(DEFAULT_ALGORITHM);
	let variable = args
		.get_one::<String>("var")
		.map(|name| name.trim())
		.filter(|name| !name.is_empty());

	let mut vars = ScriptVariables::new();
	let result = compute_and_bind(
		plaintext,
		key,
		algorithm,
		message_policy(args),
		variable,
		&mut vars,
	);
	let output = match result {
		Ok(output) => output,
		Err(err) => {
			for var in vars.list() {
				eprintln!("{}={}", var.name, var.value);
			}
			return Err(err.to_string().into());
		}
	};
	if output.metadata.is_legacy() {
		warn!(
			"{} is considered legacy; prefer a SHA-2 or SHA-3 construction",
			output.metadata.display_name
		);
	}

	if args.get_flag("json") {
		println!("{}", compute_payload(&output, variable, &vars));
	} else {
		println!("{}", output.hex);
		for var in vars.list() {
			eprintln!("{}={}", var.name, var.value);
		}
	}
	Ok(())
}

fn handle_call(args: &ArgMatches) -> Result<(), Box<dyn Error>> {
	let params: Vec<String> = args
		.get_many::<String>("params")
		.map(|values| values.cloned().collect())
		.unwrap_or_default();
	let config =
		HmacConfig::default().with_message_policy(message_policy(args));
	let function = HmacFunction::with_config(params, config)?;

	let mut vars = ScriptVariables::new();
	let value = function.execute(Some(&mut vars));
	println!("{}", value);
	for var in vars.list() {
		println!("{}={}", var.name, var.value);
	}
	if value.is_empty() {
		return Err(format!(
			"{} returned an empty result",
			HmacFunction::reference_key()
		)
		.into());
	}
	Ok(())
}

fn handle_algorithms(args: &ArgMatches) -> Result<(), Box<dyn Error>> {
	let catalog = registry::metadata();
	if args.get_flag("json") {
		let views: Vec<AlgorithmView> =
			catalog.into_iter().map(AlgorithmView::from).collect();
		println!("{}", serde_json::to_string_pretty(&views)?);
		return Ok(());
	}
	for metadata in catalog {
		println!(
			"{:<16} {:<18} {:>3} bytes{}",
			metadata.identifier,
			metadata.alias,
			metadata.output_len,
			if metadata.is_legacy() { "  (legacy)" } else { "" }
		);
	}
	Ok(())
}

fn handle_describe() {
	println!("{}(", HmacFunction::reference_key());
	for (position, arg) in ARGUMENT_DESCRIPTIONS.iter().enumerate() {
		println!(
			"  {}. {:<14} {:<9} {}",
			position + 1,
			arg.name,
			if arg.required { "required" } else { "optional" },
			arg.description
		);
	}
	println!(")");
}

pub fn run() -> Result<(), Box<dyn Error>> {
	let capp = build_cli();
	let m = capp.get_matches();

	let level = m
		.get_one::<String>("log-level")
		.map(String::as_str)
		.unwrap_or("warn");
	init_logging(level);

	match m.subcommand() {
		Some(("compute", args)) => handle_compute(args)?,
		Some(("call", args)) => handle_call(args)?,
		Some(("algorithms", args)) => handle_algorithms(args)?,
		Some(("describe", _)) => handle_describe(),
		_ => {}
	}
	Ok(())
}
