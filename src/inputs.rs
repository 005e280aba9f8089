use crate::circuits::Point;
use crate::range_union::{InclusiveRange, RangeUnion};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MalformedRange { line: usize, text: String },
    InvertedRange { line: usize, text: String },
    MalformedId { line: usize, text: String },
    MalformedPoint { line: usize, text: String },
    UnreadableFile(String),
}

#[rustfmt::skip]
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedRange { line, text }
                => write!(f, "line {}: expected <start>-<end>, got {:?}", line, text),
            Self::InvertedRange { line, text }
                => write!(f, "line {}: range {:?} ends before it starts", line, text),
            Self::MalformedId { line, text }
                => write!(f, "line {}: expected an integer id, got {:?}", line, text),
            Self::MalformedPoint { line, text }
                => write!(f, "line {}: expected <x>,<y>,<z>, got {:?}", line, text),
            Self::UnreadableFile(message) => write!(f, "{}", message),
        }
    }
}

/// Ranges and the ids to check against them.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pub ranges: RangeUnion,
    pub ids: Vec<i64>,
}

pub fn read_to_string(path: impl AsRef<std::path::Path>) -> Result<String, Error> {
    std::fs::read_to_string(path.as_ref())
        .map_err(|e| Error::UnreadableFile(format!("{}: {}", path.as_ref().display(), e)))
}

pub fn load_inventory(path: impl AsRef<std::path::Path>) -> Result<Inventory, Error> {
    parse_inventory(&read_to_string(path)?)
}

pub fn load_points(path: impl AsRef<std::path::Path>) -> Result<Vec<Point>, Error> {
    parse_points(&read_to_string(path)?)
}

/// Parses `<start>-<end>` lines, a blank line, then one id per line.
pub fn parse_inventory(text: &str) -> Result<Inventory, Error> {
    let mut inventory = Inventory::default();
    let mut in_ranges = true;
    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();
        if line.is_empty() {
            in_ranges = false;
            continue;
        }
        if in_ranges {
            inventory.ranges.push(parse_range(line_number, line)?);
        } else {
            let id = line.parse().map_err(|_| Error::MalformedId {
                line: line_number,
                text: line.to_owned(),
            })?;
            inventory.ids.push(id);
        }
    }
    log::debug!(
        "parsed {} ranges and {} ids",
        inventory.ranges.len(),
        inventory.ids.len()
    );
    Ok(inventory)
}

fn parse_range(line_number: usize, line: &str) -> Result<InclusiveRange, Error> {
    let malformed = || Error::MalformedRange {
        line: line_number,
        text: line.to_owned(),
    };
    // skip the first byte so a leading minus sign isn't taken as the separator
    let separator = line
        .get(1..)
        .and_then(|rest| rest.find('-'))
        .map(|position| position + 1)
        .ok_or_else(malformed)?;
    let (start, end) = (&line[..separator], &line[separator + 1..]);
    let start: i64 = start.trim().parse().map_err(|_| malformed())?;
    let end: i64 = end.trim().parse().map_err(|_| malformed())?;
    if start > end {
        return Err(Error::InvertedRange {
            line: line_number,
            text: line.to_owned(),
        });
    }
    Ok(InclusiveRange::new(start, end))
}

/// Parses one `<x>,<y>,<z>` point per line, skipping blank lines.
pub fn parse_points(text: &str) -> Result<Vec<Point>, Error> {
    let mut points = vec![];
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let malformed = || Error::MalformedPoint {
            line: index + 1,
            text: line.to_owned(),
        };
        let coords = line
            .split(',')
            .map(|field| field.trim().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| malformed())?;
        let [x, y, z] = coords[..] else {
            return Err(malformed());
        };
        points.push(Point::new(x, y, z));
    }
    log::debug!("parsed {} points", points.len());
    Ok(points)
}
