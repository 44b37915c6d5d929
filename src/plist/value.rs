use crate::plist::{PlistError, Result};

/// Decoded property-list value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Absent value, produced for unrecognized element tags.
	Null,
	/// Text content from `string` and `date` elements.
	Text(String),
	/// Whole number from `integer` elements.
	Integer(i64),
	/// Flag from `true`/`false` elements.
	Boolean(bool),
	/// Ordered key-value record from `dict` elements.
	Record(Record),
	/// Ordered sequence from `array` elements.
	List(Vec<Value>),
}

impl Value {
	/// Variant label used in accessor mismatch errors.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Text(_) => "string",
			Value::Integer(_) => "integer",
			Value::Boolean(_) => "boolean",
			Value::Record(_) => "dict",
			Value::List(_) => "array",
		}
	}

	/// True when the value is the absent marker.
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Borrow text content or fail with the actual variant.
	pub fn as_text(&self) -> Result<&str> {
		match self {
			Value::Text(text) => Ok(text),
			other => Err(wrong_variant("string", other)),
		}
	}

	/// Copy the whole number out or fail with the actual variant.
	pub fn as_integer(&self) -> Result<i64> {
		match self {
			Value::Integer(number) => Ok(*number),
			other => Err(wrong_variant("integer", other)),
		}
	}

	/// Copy the flag out or fail with the actual variant.
	pub fn as_boolean(&self) -> Result<bool> {
		match self {
			Value::Boolean(flag) => Ok(*flag),
			other => Err(wrong_variant("boolean", other)),
		}
	}

	/// Borrow the record or fail with the actual variant.
	pub fn as_record(&self) -> Result<&Record> {
		match self {
			Value::Record(record) => Ok(record),
			other => Err(wrong_variant("dict", other)),
		}
	}

	/// Borrow the sequence or fail with the actual variant.
	pub fn as_list(&self) -> Result<&[Value]> {
		match self {
			Value::List(items) => Ok(items),
			other => Err(wrong_variant("array", other)),
		}
	}
}

fn wrong_variant(expected: &'static str, got: &Value) -> PlistError {
	PlistError::WrongVariant { expected, got: got.kind() }
}

/// Ordered-iteration, unique-key mapping decoded from a `dict` element.
///
/// Iteration order is first-seen key order; inserting an existing key
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
	entries: Vec<(String, Value)>,
}

impl Record {
	/// Create an empty record.
	pub fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// Insert a value, overwriting a prior entry with the same key in place.
	pub fn insert(&mut self, key: impl Into<String>, value: Value) {
		let key = key.into();
		match self.entries.iter_mut().find(|(name, _)| *name == key) {
			Some((_, slot)) => *slot = value,
			None => self.entries.push((key, value)),
		}
	}

	/// Look up a value by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.iter().find(|(name, _)| name == key).map(|(_, value)| value)
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when the record holds no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate entries in first-seen key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries.iter().map(|(key, value)| (key.as_str(), value))
	}
}
