/// Derive a URL-friendly slug.
///
/// Keeps alphanumerics and underscores, collapses whitespace and hyphen runs
/// into single hyphens, lowercases, and trims leading and trailing hyphens.
/// Input that leaves nothing behind yields `"unknown"`.
pub fn slugify(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut pending_hyphen = false;

	for ch in text.chars() {
		if ch.is_whitespace() || ch == '-' {
			pending_hyphen = !out.is_empty();
			continue;
		}
		if !(ch.is_alphanumeric() || ch == '_') {
			continue;
		}
		if pending_hyphen {
			out.push('-');
			pending_hyphen = false;
		}
		for lower in ch.to_lowercase() {
			out.push(lower);
		}
	}

	if out.is_empty() { "unknown".to_owned() } else { out }
}

#[cfg(test)]
mod tests {
	use crate::library::slugify;

	#[test]
	fn punctuation_is_stripped() {
		assert_eq!(slugify("Sgt. Pepper's Lonely Hearts"), "sgt-peppers-lonely-hearts");
		assert_eq!(slugify("AC/DC"), "acdc");
	}

	#[test]
	fn separator_runs_collapse_to_single_hyphens() {
		assert_eq!(slugify("In  Rainbows - Disk 2"), "in-rainbows-disk-2");
		assert_eq!(slugify("--Hello--"), "hello");
	}

	#[test]
	fn empty_and_unusable_input_yields_unknown() {
		assert_eq!(slugify(""), "unknown");
		assert_eq!(slugify("   "), "unknown");
		assert_eq!(slugify("???"), "unknown");
	}

	#[test]
	fn unicode_letters_survive() {
		assert_eq!(slugify("Björk Début"), "björk-début");
	}
}
