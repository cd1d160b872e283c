// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hmacfn
// File: variables.rs
// Author: hmacfn maintainers

//! Caller-owned variable stores that computed tags can be bound into.

use std::collections::HashMap;

/// Write-only view of a script's variables.
///
/// The function adapter only ever calls [`VariableStore::put`]; a later
/// write to the same name replaces the earlier value.
pub trait VariableStore {
	fn put(&mut self, name: &str, value: &str);
}

impl VariableStore for HashMap<String, String> {
	fn put(&mut self, name: &str, value: &str) {
		self.insert(name.to_owned(), value.to_owned());
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptVariable {
	pub name: String,
	pub value: String,
}

/// Variables of a single script run, listed in first-write order.
#[derive(Debug, Default)]
pub struct ScriptVariables {
	values: HashMap<String, ScriptVariable>,
	order: Vec<String>,
}

impl ScriptVariables {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set(
		&mut self,
		name: impl Into<String>,
		value: impl Into<String>,
	) {
		let name = name.into();
		let variable = ScriptVariable {
			name: name.clone(),
			value: value.into(),
		};
		let is_new = !self.values.contains_key(&name);
		self.values.insert(name.clone(), variable);
		if is_new {
			self.order.push(name);
		}
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.values.get(name).map(|var| var.value.as_str())
	}

	pub fn list(&self) -> Vec<&ScriptVariable> {
		self.order
			.iter()
			.filter_map(|key| self.values.get(key))
			.collect()
	}

	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}
}

impl VariableStore for ScriptVariables {
	fn put(&mut self, name: &str, value: &str) {
		self.set(name, value);
	}
}
