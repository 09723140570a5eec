use crate::error::{ParseError, Result};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Counter (or light) indices touched by one button press.
pub type Button = Vec<usize>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    pub lights: Indicators,
    pub buttons: Vec<Button>,
    pub joltages: Vec<u64>,
}

/// Indicator light state, bit `i` is light `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Indicators {
    pub len: usize,
    pub state: u64,
}

impl Indicators {
    pub fn off(len: usize) -> Self {
        Indicators { len, state: 0 }
    }

    pub fn press(&self, button: &Button) -> Self {
        Indicators {
            len: self.len,
            state: button.iter().fold(self.state, |s, &l| s ^ (1u64 << l)),
        }
    }
}

impl fmt::Display for Indicators {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let lights: String = (0..self.len)
            .map(|i| if self.state >> i & 1 == 1 { '#' } else { '.' })
            .collect();
        write!(f, "[{}]", lights)
    }
}

impl FromStr for Indicators {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let inner = strip(s.trim(), '[', ']', "`[...]`")?;
        let len = inner.chars().count();
        if len > 64 {
            return Err(ParseError::TooManyLights(len));
        }

        let mut state = 0u64;
        for (i, c) in inner.chars().enumerate() {
            match c {
                '#' => state |= 1 << i,
                '.' => {}
                _ => return Err(ParseError::Light(c)),
            }
        }
        Ok(Indicators { len, state })
    }
}

impl FromStr for Machine {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut tokens: VecDeque<&str> = s.split_ascii_whitespace().collect();

        let lights: Indicators = tokens
            .pop_front()
            .ok_or(ParseError::Missing("light diagram"))?
            .parse()?;
        let joltages = parse_list(
            tokens
                .pop_back()
                .ok_or(ParseError::Missing("joltage requirements"))?,
            '{',
            '}',
            "`{...}`",
        )?;
        let buttons = tokens
            .iter()
            .map(|token| parse_list(token, '(', ')', "`(...)`"))
            .collect::<std::result::Result<Vec<Button>, _>>()?;

        if let Some(&index) = buttons.iter().flatten().find(|&&i| i >= lights.len) {
            return Err(ParseError::LightOutOfRange {
                index,
                len: lights.len,
            });
        }

        Ok(Machine {
            lights,
            buttons,
            joltages,
        })
    }
}

/// Parses every non-blank line of `input`. Errors carry 1-based line numbers.
pub fn parse_machines(input: &str) -> Result<Vec<Machine>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| line.parse::<Machine>().map_err(|e| e.at(i + 1)))
        .collect()
}

fn strip<'a>(
    token: &'a str,
    open: char,
    close: char,
    expected: &'static str,
) -> std::result::Result<&'a str, ParseError> {
    token
        .strip_prefix(open)
        .and_then(|t| t.strip_suffix(close))
        .ok_or_else(|| ParseError::Delimiters {
            expected,
            token: token.to_string(),
        })
}

fn parse_list<T: FromStr>(
    token: &str,
    open: char,
    close: char,
    expected: &'static str,
) -> std::result::Result<Vec<T>, ParseError> {
    strip(token, open, close, expected)?
        .split(',')
        .map(|x| {
            x.trim()
                .parse::<T>()
                .map_err(|_| ParseError::Number(x.to_string()))
        })
        .collect()
}
