// Space, \t, \n, \x0b, \x0c and \r.
pub fn is_whitespace(c: u8) -> bool {
	c.is_ascii_whitespace() || c == b'\x0b'
}

// Eats whitespace. Returns the amount of space eaten.
pub fn eat_whitespace(src: &mut &str) -> usize {
	let n = src
		.bytes()
		.position(|c| !is_whitespace(c))
		.unwrap_or(src.len());
	*src = &src[n..];
	n
}

// Eats one whitespace-delimited token, and the whitespace before it.
pub fn eat_token<'a>(src: &mut &'a str) -> Option<&'a str> {
	eat_whitespace(src);
	let end = src
		.bytes()
		.position(is_whitespace)
		.unwrap_or(src.len());
	let (token, rest) = src.split_at(end);
	*src = rest;
	if token.is_empty() {
		None
	} else {
		Some(token)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn tokens() {
		let mut src = "  TARGET\tapp  SRC main.cpp\r";
		assert_eq!(eat_token(&mut src), Some("TARGET"));
		assert_eq!(eat_token(&mut src), Some("app"));
		assert_eq!(eat_token(&mut src), Some("SRC"));
		assert_eq!(eat_token(&mut src), Some("main.cpp"));
		assert_eq!(eat_token(&mut src), None);
		assert_eq!(src, "");
	}

	#[test]
	fn vertical_tab_and_form_feed() {
		let mut src = "SRC\x0bmain.cpp\x0cDEP";
		assert_eq!(eat_token(&mut src), Some("SRC"));
		assert_eq!(eat_token(&mut src), Some("main.cpp"));
		assert_eq!(eat_token(&mut src), Some("DEP"));
		assert_eq!(eat_token(&mut src), None);
	}

	#[test]
	fn whitespace() {
		let mut src = " \t x";
		assert_eq!(eat_whitespace(&mut src), 3);
		assert_eq!(src, "x");
		assert_eq!(eat_whitespace(&mut src), 0);
	}
}
