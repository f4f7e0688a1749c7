// Lexer for comma/pipe delimited numeric streams and pipe-separated labels

use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::char,
    combinator::{eof, map},
    sequence::pair,
    IResult,
};
use thiserror::Error;

/// Separator between label tokens
pub const LABEL_SEPARATOR: char = '|';

/// What terminated a number token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Comma,
    Pipe,
    End,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScanError {
    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },
    #[error("{token:?} at offset {offset} is not a number")]
    InvalidNumber { token: String, offset: usize },
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '-' || c == '.'
}

/// Run of digits, minus signs and decimal points (possibly empty)
pub fn number_token(input: &str) -> IResult<&str, &str> {
    take_while(is_number_char)(input)
}

/// `,`, `|` or end of input
pub fn separator(input: &str) -> IResult<&str, Separator> {
    alt((
        map(char(','), |_| Separator::Comma),
        map(char('|'), |_| Separator::Pipe),
        map(eof, |_| Separator::End),
    ))(input)
}

/// A number token followed by its separator
pub fn number_event(input: &str) -> IResult<&str, (&str, Separator)> {
    pair(number_token, separator)(input)
}

/// A number token with the separator that ended it, not yet converted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub sep: Separator,
    pub offset: usize,
}

impl Token<'_> {
    pub fn value(&self) -> Result<f64, ScanError> {
        self.text.parse::<f64>().map_err(|_| ScanError::InvalidNumber {
            token: self.text.to_string(),
            offset: self.offset,
        })
    }
}

/// Iterator over the raw tokens of a numeric stream.
///
/// The final token always carries `Separator::End`. An unexpected character
/// ends the iteration.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    source: &'a str,
    rest: &'a str,
    done: bool,
}

impl<'a> TokenStream<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::starting_at(source, 0)
    }

    /// Scan `source[start..]`, reporting offsets relative to `source`
    pub fn starting_at(source: &'a str, start: usize) -> Self {
        Self {
            source,
            rest: &source[start..],
            done: false,
        }
    }

    fn offset(&self) -> usize {
        self.source.len() - self.rest.len()
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Result<Token<'a>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let offset = self.offset();
        match number_event(self.rest) {
            Ok((rest, (text, sep))) => {
                self.rest = rest;
                self.done = sep == Separator::End;
                Some(Ok(Token { text, sep, offset }))
            }
            Err(_) => {
                self.done = true;
                let token_len = self
                    .rest
                    .find(|c: char| !is_number_char(c))
                    .unwrap_or(self.rest.len());
                let ch = self.rest[token_len..].chars().next().unwrap_or_default();
                Some(Err(ScanError::UnexpectedChar {
                    ch,
                    offset: offset + token_len,
                }))
            }
        }
    }
}

/// Iterator over `(value, separator)` events of a numeric stream.
///
/// Every token is converted; the first error ends the iteration.
#[derive(Debug, Clone)]
pub struct NumberStream<'a> {
    tokens: TokenStream<'a>,
}

impl<'a> NumberStream<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::starting_at(source, 0)
    }

    pub fn starting_at(source: &'a str, start: usize) -> Self {
        Self {
            tokens: TokenStream::starting_at(source, start),
        }
    }
}

impl Iterator for NumberStream<'_> {
    type Item = Result<(f64, Separator), ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self
            .tokens
            .next()?
            .and_then(|token| token.value().map(|value| (value, token.sep)));
        if result.is_err() {
            self.tokens.done = true;
        }
        Some(result)
    }
}

/// Split a label list on `|`, skipping empty tokens
pub fn split_labels(input: &str) -> impl Iterator<Item = &str> {
    input.split(LABEL_SEPARATOR).filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<Result<(f64, Separator), ScanError>> {
        NumberStream::new(input).collect()
    }

    #[test]
    fn test_number_token() {
        let result = number_token("-1.5,2");
        assert!(result.is_ok());
        let (rest, token) = result.unwrap();
        assert_eq!(token, "-1.5");
        assert_eq!(rest, ",2");
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator(",1").unwrap(), ("1", Separator::Comma));
        assert_eq!(separator("|1").unwrap(), ("1", Separator::Pipe));
        assert_eq!(separator("").unwrap(), ("", Separator::End));
        assert!(separator("a").is_err());
    }

    #[test]
    fn test_stream_events() {
        let events = collect("1,2|-3.5");
        assert_eq!(
            events,
            vec![
                Ok((1.0, Separator::Comma)),
                Ok((2.0, Separator::Pipe)),
                Ok((-3.5, Separator::End)),
            ]
        );
    }

    #[test]
    fn test_stream_unexpected_char() {
        let events = collect("1,2a,3");
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            Err(ScanError::UnexpectedChar { ch: 'a', offset: 3 })
        );
    }

    #[test]
    fn test_stream_rejects_non_ascii() {
        let events = collect("1,٣");
        assert_eq!(
            events.last().unwrap(),
            &Err(ScanError::UnexpectedChar { ch: '٣', offset: 2 })
        );
    }

    #[test]
    fn test_stream_invalid_number() {
        let events = collect("1-2,3");
        assert_eq!(
            events,
            vec![Err(ScanError::InvalidNumber {
                token: "1-2".to_string(),
                offset: 0
            })]
        );
    }

    #[test]
    fn test_stream_empty_token() {
        let events = collect("1,,2");
        assert!(matches!(
            events[1],
            Err(ScanError::InvalidNumber { offset: 2, .. })
        ));
    }

    #[test]
    fn test_stream_starting_at_reports_source_offsets() {
        let events: Vec<_> = NumberStream::starting_at("t:1,x", 2).collect();
        assert_eq!(
            events[1],
            Err(ScanError::UnexpectedChar { ch: 'x', offset: 4 })
        );
    }

    #[test]
    fn test_token_stream_keeps_raw_text() {
        let tokens: Vec<_> = TokenStream::new("1,2|").collect();
        assert_eq!(tokens.len(), 3);
        assert_eq!(
            tokens[2],
            Ok(Token {
                text: "",
                sep: Separator::End,
                offset: 4
            })
        );
        assert!(tokens[2].as_ref().unwrap().value().is_err());
        assert_eq!(tokens[1].as_ref().unwrap().value(), Ok(2.0));
    }

    #[test]
    fn test_split_labels_skips_empty_tokens() {
        let labels: Vec<_> = split_labels("a||b|").collect();
        assert_eq!(labels, vec!["a", "b"]);
        assert_eq!(split_labels("").count(), 0);
    }
}
