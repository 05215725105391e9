//! A single value or an ordered list of values.

use serde::{Deserialize, Serialize};

/// Either one value or an ordered sequence of values.
///
/// Token aliases and alias declarations accept both shapes; consumers normally
/// only care about the normalized sequence (see [`OneOrMany::into_vec`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
	One(T),
	Many(Vec<T>),
}

impl<T> OneOrMany<T> {
	/// Number of values once normalized.
	pub fn len(&self) -> usize {
		match self {
			Self::One(_) => 1,
			Self::Many(values) => values.len(),
		}
	}

	/// Returns true for an empty `Many`.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Iterates the values in order.
	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		match self {
			Self::One(value) => std::slice::from_ref(value).iter(),
			Self::Many(values) => values.iter(),
		}
	}

	/// Normalizes into an ordered vector.
	pub fn into_vec(self) -> Vec<T> {
		match self {
			Self::One(value) => vec![value],
			Self::Many(values) => values,
		}
	}
}

impl<T> IntoIterator for OneOrMany<T> {
	type Item = T;
	type IntoIter = std::vec::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.into_vec().into_iter()
	}
}

impl<'a, T> IntoIterator for &'a OneOrMany<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl From<String> for OneOrMany<String> {
	fn from(value: String) -> Self {
		Self::One(value)
	}
}

impl From<&str> for OneOrMany<String> {
	fn from(value: &str) -> Self {
		Self::One(value.to_string())
	}
}

impl From<Vec<String>> for OneOrMany<String> {
	fn from(values: Vec<String>) -> Self {
		Self::Many(values)
	}
}

impl From<Vec<&str>> for OneOrMany<String> {
	fn from(values: Vec<&str>) -> Self {
		Self::Many(values.into_iter().map(str::to_string).collect())
	}
}

impl From<&[&str]> for OneOrMany<String> {
	fn from(values: &[&str]) -> Self {
		Self::Many(values.iter().map(|v| v.to_string()).collect())
	}
}

impl<const N: usize> From<[&str; N]> for OneOrMany<String> {
	fn from(values: [&str; N]) -> Self {
		Self::Many(values.iter().map(|v| v.to_string()).collect())
	}
}
