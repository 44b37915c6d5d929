use roxmltree::Node;

use crate::plist::value::{Record, Value};
use crate::plist::{PlistError, Result};

/// Decode one markup element into a property-list value.
///
/// Dispatch is purely by tag name: `string`, `integer`, `true`, `false`,
/// `date`, `dict`, and `array` map to their [`Value`] counterparts; any
/// other tag decodes to [`Value::Null`]. Inside a `dict`, a `key` element
/// with no following sibling contributes no entry.
pub fn decode(node: Node<'_, '_>) -> Result<Value> {
	match node.tag_name().name() {
		"string" => Ok(Value::Text(text_of(node))),
		"integer" => decode_integer(node),
		"true" => Ok(Value::Boolean(true)),
		"false" => Ok(Value::Boolean(false)),
		"date" => Ok(Value::Text(text_of(node))),
		"dict" => decode_record(node).map(Value::Record),
		"array" => element_children(node).map(decode).collect::<Result<Vec<_>>>().map(Value::List),
		_ => Ok(Value::Null),
	}
}

fn text_of(node: Node<'_, '_>) -> String {
	node.text().unwrap_or("").to_owned()
}

fn decode_integer(node: Node<'_, '_>) -> Result<Value> {
	let text = node.text().unwrap_or("").trim();
	if text.is_empty() {
		return Ok(Value::Integer(0));
	}
	match text.parse::<i64>() {
		Ok(number) => Ok(Value::Integer(number)),
		Err(_) => Err(PlistError::MalformedInteger { text: text.to_owned() }),
	}
}

/// Pair `key` elements with their immediately following sibling.
///
/// One left-to-right pass: a `key` with a following sibling emits an entry
/// and advances by two, anything else advances by one without emitting.
fn decode_record(node: Node<'_, '_>) -> Result<Record> {
	let children: Vec<Node<'_, '_>> = element_children(node).collect();
	let mut record = Record::new();
	let mut cursor = 0;

	while cursor < children.len() {
		let child = children[cursor];
		if child.tag_name().name() == "key" && cursor + 1 < children.len() {
			let key = text_of(child);
			let value = decode(children[cursor + 1])?;
			record.insert(key, value);
			cursor += 2;
		} else {
			cursor += 1;
		}
	}

	Ok(record)
}

fn element_children<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
	node.children().filter(|child| child.is_element())
}

#[cfg(test)]
mod tests {
	use roxmltree::Document;

	use crate::plist::{PlistError, Value, decode};

	fn decode_str(xml: &str) -> crate::plist::Result<Value> {
		let doc = Document::parse(xml).expect("test xml parses");
		decode(doc.root_element())
	}

	#[test]
	fn integer_text_is_parsed() {
		assert_eq!(decode_str("<integer>42</integer>").unwrap(), Value::Integer(42));
		assert_eq!(decode_str("<integer>-7</integer>").unwrap(), Value::Integer(-7));
	}

	#[test]
	fn empty_integer_decodes_to_zero() {
		assert_eq!(decode_str("<integer></integer>").unwrap(), Value::Integer(0));
		assert_eq!(decode_str("<integer/>").unwrap(), Value::Integer(0));
	}

	#[test]
	fn non_numeric_integer_is_rejected() {
		let err = decode_str("<integer>abc</integer>").unwrap_err();
		assert!(matches!(err, PlistError::MalformedInteger { .. }));
	}

	#[test]
	fn boolean_tags_decode() {
		assert_eq!(decode_str("<true/>").unwrap(), Value::Boolean(true));
		assert_eq!(decode_str("<false/>").unwrap(), Value::Boolean(false));
	}

	#[test]
	fn string_and_date_decode_to_text() {
		assert_eq!(decode_str("<string>hello</string>").unwrap(), Value::Text("hello".to_owned()));
		assert_eq!(decode_str("<string/>").unwrap(), Value::Text(String::new()));
		assert_eq!(
			decode_str("<date>2024-03-01T12:00:00Z</date>").unwrap(),
			Value::Text("2024-03-01T12:00:00Z".to_owned())
		);
	}

	#[test]
	fn unknown_tags_decode_to_null() {
		assert_eq!(decode_str("<data>AAEC</data>").unwrap(), Value::Null);
		assert_eq!(decode_str("<real>3.5</real>").unwrap(), Value::Null);
	}

	#[test]
	fn dict_pairs_keys_with_following_values() {
		let value = decode_str(
			"<dict>\
				<key>Name</key><string>x</string>\
				<key>Count</key><integer>3</integer>\
			</dict>",
		)
		.unwrap();

		let Value::Record(record) = value else {
			panic!("expected record");
		};
		let keys: Vec<&str> = record.iter().map(|(key, _)| key).collect();
		assert_eq!(keys, ["Name", "Count"]);
		assert_eq!(record.get("Name"), Some(&Value::Text("x".to_owned())));
		assert_eq!(record.get("Count"), Some(&Value::Integer(3)));
	}

	#[test]
	fn dangling_trailing_key_is_dropped() {
		let value = decode_str("<dict><key>A</key><string>x</string><key>B</key></dict>").unwrap();

		let Value::Record(record) = value else {
			panic!("expected record");
		};
		assert_eq!(record.len(), 1);
		assert_eq!(record.get("A"), Some(&Value::Text("x".to_owned())));
		assert_eq!(record.get("B"), None);
	}

	#[test]
	fn duplicate_keys_keep_first_position_and_last_value() {
		let value = decode_str(
			"<dict>\
				<key>A</key><integer>1</integer>\
				<key>B</key><integer>2</integer>\
				<key>A</key><integer>3</integer>\
			</dict>",
		)
		.unwrap();

		let Value::Record(record) = value else {
			panic!("expected record");
		};
		let keys: Vec<&str> = record.iter().map(|(key, _)| key).collect();
		assert_eq!(keys, ["A", "B"]);
		assert_eq!(record.get("A"), Some(&Value::Integer(3)));
	}

	#[test]
	fn non_key_children_are_skipped_without_emitting() {
		let value = decode_str("<dict><string>stray</string><key>A</key><integer>1</integer></dict>").unwrap();

		let Value::Record(record) = value else {
			panic!("expected record");
		};
		assert_eq!(record.len(), 1);
		assert_eq!(record.get("A"), Some(&Value::Integer(1)));
	}

	#[test]
	fn array_children_decode_in_order() {
		let value = decode_str("<array><integer>1</integer><string>two</string><true/></array>").unwrap();
		assert_eq!(
			value,
			Value::List(vec![Value::Integer(1), Value::Text("two".to_owned()), Value::Boolean(true)])
		);
	}

	#[test]
	fn empty_array_decodes_to_empty_list() {
		assert_eq!(decode_str("<array/>").unwrap(), Value::List(Vec::new()));
	}

	#[test]
	fn nested_structures_decode() {
		let value = decode_str(
			"<dict>\
				<key>Tracks</key>\
				<dict>\
					<key>1</key>\
					<dict><key>Name</key><string>Song</string><key>Play Count</key><integer>4</integer></dict>\
				</dict>\
				<key>Tags</key>\
				<array><string>a</string><string>b</string></array>\
			</dict>",
		)
		.unwrap();

		let record = value.as_record().unwrap();
		let tracks = record.get("Tracks").unwrap().as_record().unwrap();
		let first = tracks.get("1").unwrap().as_record().unwrap();
		assert_eq!(first.get("Play Count"), Some(&Value::Integer(4)));
		let tags = record.get("Tags").unwrap().as_list().unwrap();
		assert_eq!(tags.len(), 2);
	}

	#[test]
	fn malformed_integer_anywhere_aborts_the_decode() {
		let err = decode_str("<dict><key>A</key><integer>nope</integer></dict>").unwrap_err();
		assert!(matches!(err, PlistError::MalformedInteger { .. }));
	}

	#[test]
	fn decoding_twice_yields_equal_independent_trees() {
		let xml = "<dict><key>A</key><array><integer>1</integer><false/></array></dict>";
		let doc = Document::parse(xml).expect("test xml parses");
		let first = decode(doc.root_element()).unwrap();
		let second = decode(doc.root_element()).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn whitespace_between_dict_children_is_ignored() {
		let value = decode_str("<dict>\n\t<key>A</key>\n\t<integer>1</integer>\n</dict>").unwrap();
		let record = value.as_record().unwrap();
		assert_eq!(record.get("A"), Some(&Value::Integer(1)));
	}
}
