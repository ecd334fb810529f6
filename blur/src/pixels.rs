use core::fmt;

/// A token in a pixel text file that is not a byte value
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ParseError<'s> {
    /// 1-based line number
    pub line: usize,
    pub token: &'s str,
}

impl fmt::Display for ParseError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: `{}` is not a byte value", self.line, self.token)
    }
}

impl core::error::Error for ParseError<'_> {}

/// Parses the `pixels.txt` format: byte values in decimal or `0x` hex,
/// separated by commas and/or whitespace, in the style of a C array
/// initialiser. `//` starts a comment that runs to the end of the line.
///
/// Values are appended to `out` in file order and the number of values is
/// returned. Coordinates are not range-checked here.
pub fn parse_pixels<'s, E: Extend<u8>>(text: &'s str, out: &mut E) -> Result<usize, ParseError<'s>> {
    let mut count = 0;
    for (line_index, line) in text.lines().enumerate() {
        let code = match line.find("//") {
            Some(comment) => &line[..comment],
            None => line,
        };
        for token in code
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
                Some(hex) => u8::from_str_radix(hex, 16),
                None => token.parse::<u8>(),
            }
            .map_err(|_| ParseError {
                line: line_index + 1,
                token,
            })?;
            out.extend(core::iter::once(value));
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[test]
    fn c_initialiser_style() {
        let text = "// generated\n12, 34,\n  0x0a,0XFF  7\n\n159 , 119, // last\n";
        let mut bytes = Vec::new();
        assert_eq!(parse_pixels(text, &mut bytes), Ok(7));
        assert_eq!(bytes, [12, 34, 10, 255, 7, 159, 119]);
    }

    #[test]
    fn empty_file() {
        let mut bytes = Vec::new();
        assert_eq!(parse_pixels("", &mut bytes), Ok(0));
        assert_eq!(parse_pixels("// nothing\n,,\n", &mut bytes), Ok(0));
        assert!(bytes.is_empty());
    }

    #[test]
    fn reports_bad_token() {
        let mut bytes = Vec::new();
        let err = parse_pixels("1, 2\n3, 256\n", &mut bytes).unwrap_err();
        assert_eq!(err, ParseError { line: 2, token: "256" });
        assert_eq!(std::format!("{err}"), "line 2: `256` is not a byte value");

        let err = parse_pixels("0xZZ", &mut bytes).unwrap_err();
        assert_eq!(err.token, "0xZZ");
    }
}
