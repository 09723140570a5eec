use crate::error::{ParseError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Constant x
    Vertical,
    /// Constant y
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceLine {
    pub axis: Axis,
    pub position: i64,
    pub color: String,
}

impl ReferenceLine {
    fn parse(axis: Axis, s: &str) -> std::result::Result<Self, ParseError> {
        let (position, color) = match s.split_once(':') {
            Some((position, color)) => (position, color.trim()),
            None => (s, "red"),
        };
        let position = position
            .trim()
            .parse()
            .map_err(|_| ParseError::ReferenceLine(s.to_string()))?;
        if color.is_empty() || color.contains(|c: char| matches!(c, '"' | '\'' | '<' | '>' | '&')) {
            return Err(ParseError::ReferenceLine(s.to_string()));
        }

        Ok(ReferenceLine {
            axis,
            position,
            color: color.to_string(),
        })
    }
}

pub fn parse_vline(s: &str) -> std::result::Result<ReferenceLine, ParseError> {
    ReferenceLine::parse(Axis::Vertical, s)
}

pub fn parse_hline(s: &str) -> std::result::Result<ReferenceLine, ParseError> {
    ReferenceLine::parse(Axis::Horizontal, s)
}

/// Parses one `x,y` pair per non-blank line.
pub fn parse_points(input: &str) -> Result<Vec<Point>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_point(line.trim()).map_err(|e| e.at(i + 1)))
        .collect()
}

fn parse_point(line: &str) -> std::result::Result<Point, ParseError> {
    let (x, y) = line.split_once(',').ok_or_else(|| ParseError::Delimiters {
        expected: "`x,y`",
        token: line.to_string(),
    })?;
    let coord = |c: &str| {
        c.trim()
            .parse::<i64>()
            .map_err(|_| ParseError::Number(c.to_string()))
    };
    Ok(Point {
        x: coord(x)?,
        y: coord(y)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn parses_points() {
        let points = parse_points("7,1\n 11, 1 \n\n11,7\n").unwrap();
        assert_eq!(
            points,
            vec![
                Point { x: 7, y: 1 },
                Point { x: 11, y: 1 },
                Point { x: 11, y: 7 }
            ]
        );
    }

    #[test]
    fn bad_point_reports_line() {
        match parse_points("1,2\n3;4\n") {
            Err(Error::Parse { line, source }) => {
                assert_eq!(line, 2);
                assert!(matches!(source, ParseError::Delimiters { .. }));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(parse_points("1,2,3\n").is_err());
    }

    #[test]
    fn reference_lines() {
        assert_eq!(
            parse_vline("52177").unwrap(),
            ReferenceLine {
                axis: Axis::Vertical,
                position: 52177,
                color: "red".to_string()
            }
        );
        assert_eq!(
            parse_hline("50233:g").unwrap(),
            ReferenceLine {
                axis: Axis::Horizontal,
                position: 50233,
                color: "g".to_string()
            }
        );
        assert!(parse_vline("abc").is_err());
        assert!(parse_hline("1:").is_err());
    }

    #[test]
    fn color_cannot_break_out_of_attribute() {
        for spec in &["5:\"/><script>", "5:red'", "5:a&b", "5:<g>"] {
            assert_eq!(
                parse_vline(spec),
                Err(ParseError::ReferenceLine(spec.to_string()))
            );
        }
        assert_eq!(parse_hline("5:#ff0000").unwrap().color, "#ff0000");
    }
}
