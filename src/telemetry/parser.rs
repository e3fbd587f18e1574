use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::coordinate::parse_coordinate;
use super::error::RecordError;
use super::sample::Sample;

const SEPARATOR: char = ';';
const PLACEHOLDER: &str = "-";
const REQUIRED_FIELDS: usize = 5;

/// Turn one `date;time;lat;lon;alt[;...]` line into a sample.
pub fn parse_line(line: &str) -> Result<Sample, RecordError> {
    let fields: Vec<&str> = line.trim().split(SEPARATOR).collect();
    if fields.len() < REQUIRED_FIELDS {
        return Err(RecordError::TooFewFields(fields.len()));
    }
    if fields[..REQUIRED_FIELDS].contains(&PLACEHOLDER) {
        return Err(RecordError::Placeholder);
    }

    let (date, time, lat, lon, alt) = (fields[0], fields[1], fields[2], fields[3], fields[4]);

    for (name, value) in [("latitude", lat), ("longitude", lon), ("altitude", alt)] {
        if value.is_empty() {
            return Err(RecordError::EmptyField(name));
        }
    }
    // A dash anywhere in the position fields marks a partially missing value.
    if [lat, lon, alt].iter().any(|f| f.contains(PLACEHOLDER)) {
        return Err(RecordError::Placeholder);
    }

    let latitude = parse_coordinate(lat).map_err(RecordError::Latitude)?;
    let longitude = parse_coordinate(lon).map_err(RecordError::Longitude)?;
    let altitude = alt.trim().parse::<i32>()?;

    Ok(Sample {
        longitude,
        latitude,
        altitude,
        timestamp: format!("{date} {time}"),
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseStats {
    pub lines: usize,
    pub accepted: usize,
    pub rejected: BTreeMap<&'static str, usize>,
}

impl ParseStats {
    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }

    fn reject(&mut self, err: &RecordError) {
        *self.rejected.entry(err.kind()).or_default() += 1;
    }
}

/// Streaming, single-pass reader yielding valid samples in log order.
///
/// Malformed lines are skipped and only show up in [`ParseStats`]. I/O errors
/// from the underlying reader are passed through.
pub struct LogParser<R> {
    reader: R,
    buf: Vec<u8>,
    stats: ParseStats,
}

impl LogParser<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LogParser<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            stats: ParseStats::default(),
        }
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }
}

impl<R: BufRead> Iterator for LogParser<R> {
    type Item = io::Result<Sample>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }
            self.stats.lines += 1;

            let line = String::from_utf8_lossy(&self.buf);
            match parse_line(&line) {
                Ok(sample) => {
                    self.stats.accepted += 1;
                    return Some(Ok(sample));
                }
                Err(e) => {
                    log::trace!("line {} skipped: {}", self.stats.lines, e);
                    self.stats.reject(&e);
                }
            }
        }
    }
}

/// Parse an in-memory log.
pub fn parse_str(text: &str) -> Vec<Sample> {
    LogParser::new(text.as_bytes())
        .filter_map(Result::ok)
        .collect()
}
