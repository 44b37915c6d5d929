use crate::plist::value::Value;

/// Render a value as a standalone property-list XML document.
///
/// Decoding the rendered document reproduces an equal value. [`Value::Null`]
/// renders as a `data` element, which the decoder maps back to Null.
pub fn to_xml(value: &Value) -> String {
	let mut out = String::new();
	out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
	out.push_str("<plist version=\"1.0\">\n");
	write_value(&mut out, value, 1);
	out.push_str("</plist>\n");
	out
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
	match value {
		Value::Null => write_line(out, depth, "<data/>"),
		Value::Text(text) => write_line(out, depth, &format!("<string>{}</string>", escape(text))),
		Value::Integer(number) => write_line(out, depth, &format!("<integer>{number}</integer>")),
		Value::Boolean(true) => write_line(out, depth, "<true/>"),
		Value::Boolean(false) => write_line(out, depth, "<false/>"),
		Value::Record(record) => {
			write_line(out, depth, "<dict>");
			for (key, item) in record.iter() {
				write_line(out, depth + 1, &format!("<key>{}</key>", escape(key)));
				write_value(out, item, depth + 1);
			}
			write_line(out, depth, "</dict>");
		}
		Value::List(items) => {
			write_line(out, depth, "<array>");
			for item in items {
				write_value(out, item, depth + 1);
			}
			write_line(out, depth, "</array>");
		}
	}
}

fn write_line(out: &mut String, depth: usize, line: &str) {
	for _ in 0..depth {
		out.push('\t');
	}
	out.push_str(line);
	out.push('\n');
}

fn escape(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			other => out.push(other),
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use crate::plist::to_xml;
	use crate::plist::value::Value;

	#[test]
	fn markup_characters_are_escaped() {
		let xml = to_xml(&Value::Text("a & b <c>".to_owned()));
		assert!(xml.contains("<string>a &amp; b &lt;c&gt;</string>"));
	}

	#[test]
	fn booleans_render_as_empty_tags() {
		assert!(to_xml(&Value::Boolean(true)).contains("<true/>"));
		assert!(to_xml(&Value::Boolean(false)).contains("<false/>"));
	}
}
