//! Ratings dataset loading
//!
//! Reads the MovieLens-style `userId,movieId,rating,timestamp` CSV into an
//! integer sequence. Ratings run from 0.5 to 5.0 in half steps and are doubled
//! so they land in `[1, 10]`, which is the range counting sort is tuned for.

use crate::error::{Result, SortlabError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Column of the ratings file turned into sort keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingColumn {
    /// `userId`, used as-is
    UserId,
    /// `movieId`, used as-is
    MovieId,
    /// `rating` doubled: `0.5 -> 1`, ..., `5.0 -> 10`
    Rating,
    /// `timestamp`, seconds since the epoch
    Timestamp,
}

impl RatingColumn {
    /// Field position in a ratings row
    pub fn index(&self) -> usize {
        match self {
            Self::UserId => 0,
            Self::MovieId => 1,
            Self::Rating => 2,
            Self::Timestamp => 3,
        }
    }

    /// Convert one field into a sort key, `None` if it does not parse
    pub fn parse_field(&self, field: &str) -> Option<i64> {
        let field = field.trim();
        match self {
            Self::Rating => {
                let rating: f64 = field.parse().ok()?;
                if !rating.is_finite() {
                    return None;
                }
                Some((rating * 2.0) as i64)
            }
            _ => field.parse().ok(),
        }
    }

    /// Short identifier, also accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserId => "user_id",
            Self::MovieId => "movie_id",
            Self::Rating => "rating",
            Self::Timestamp => "timestamp",
        }
    }
}

impl Default for RatingColumn {
    fn default() -> Self {
        Self::Rating
    }
}

impl fmt::Display for RatingColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatingColumn {
    type Err = SortlabError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "user_id" | "userid" | "user" => Ok(Self::UserId),
            "movie_id" | "movieid" | "movie" => Ok(Self::MovieId),
            "rating" | "ratings" => Ok(Self::Rating),
            "timestamp" | "time" => Ok(Self::Timestamp),
            other => Err(SortlabError::configuration(format!("unknown column '{}'", other))),
        }
    }
}

/// Streaming reader over a ratings CSV.
///
/// The header row is skipped. Rows whose selected field is missing or does
/// not parse are skipped with a warning.
pub struct RatingsReader<R: Read> {
    reader: csv::Reader<R>,
    column: RatingColumn,
    limit: Option<usize>,
    skipped: usize,
}

impl RatingsReader<File> {
    /// Open a ratings file on disk
    pub fn open<P: AsRef<Path>>(path: P, column: RatingColumn) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            SortlabError::dataset(format!("cannot open '{}': {}", path.display(), e))
        })?;
        Ok(Self::from_reader(file, column))
    }
}

impl<R: Read> RatingsReader<R> {
    /// Wrap any byte source
    pub fn from_reader(source: R, column: RatingColumn) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(source);
        Self {
            reader,
            column,
            limit: None,
            skipped: 0,
        }
    }

    /// Stop after `limit` values
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Rows skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Read values until the limit or end of input.
    ///
    /// # Errors
    ///
    /// [`SortlabError::Dataset`] if the underlying source fails. Malformed
    /// rows are not errors.
    pub fn read_values(&mut self) -> Result<Vec<i64>> {
        let column = self.column;
        let index = column.index();
        let limit = self.limit.unwrap_or(usize::MAX);
        let mut values = Vec::new();
        let mut record = csv::StringRecord::new();

        while values.len() < limit {
            match self.reader.read_record(&mut record) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    self.skipped += 1;
                    log::warn!("skipping malformed ratings row: {}", e);
                    continue;
                }
            }

            match record.get(index).and_then(|field| column.parse_field(field)) {
                Some(value) => values.push(value),
                None => {
                    self.skipped += 1;
                    log::warn!(
                        "skipping ratings row {}: no usable {} field",
                        record.position().map_or(0, |p| p.line()),
                        column
                    );
                }
            }
        }

        log::info!(
            "loaded {} {} values ({} rows skipped)",
            values.len(),
            column,
            self.skipped
        );
        Ok(values)
    }
}

/// Where a [`Dataset`] came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Loaded from a ratings file
    File(PathBuf),
    /// Generated as `(i % 10) + 1`
    Synthetic,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Synthetic => f.write_str("synthetic"),
        }
    }
}

/// Input values for a benchmark session
#[derive(Debug, Clone)]
pub struct Dataset {
    values: Vec<i64>,
    source: DataSource,
}

impl Dataset {
    /// `len` values cycling through `1..=10`
    pub fn synthetic(len: usize) -> Self {
        let values = (0..len).map(|i| (i % 10) as i64 + 1).collect();
        Self {
            values,
            source: DataSource::Synthetic,
        }
    }

    /// Load at most `limit` values of `column` from a ratings file
    pub fn from_csv<P: AsRef<Path>>(path: P, column: RatingColumn, limit: usize) -> Result<Self> {
        let path = path.as_ref();
        let values = RatingsReader::open(path, column)?.with_limit(limit).read_values()?;
        Ok(Self {
            values,
            source: DataSource::File(path.to_path_buf()),
        })
    }

    /// Load from `path` when given, falling back to synthetic data.
    ///
    /// The fallback applies to recoverable errors (see
    /// [`SortlabError::is_recoverable`]) and to a file that yields no values
    /// at all. Other errors are returned.
    pub fn load_or_synthetic(
        path: Option<&Path>,
        column: RatingColumn,
        limit: usize,
    ) -> Result<Self> {
        if let Some(path) = path {
            match Self::from_csv(path, column, limit) {
                Ok(dataset) if !dataset.is_empty() => return Ok(dataset),
                Ok(_) => log::warn!("'{}' has no usable rows, using synthetic data", path.display()),
                Err(e) if e.is_recoverable() => {
                    log::warn!("{} error: {}, using synthetic data", e.category(), e)
                }
                Err(e) => return Err(e),
            }
        }
        Ok(Self::synthetic(limit))
    }

    /// All loaded values
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// The first `len` values, or all of them if fewer were loaded
    pub fn prefix(&self, len: usize) -> &[i64] {
        &self.values[..len.min(self.values.len())]
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no values were loaded
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Origin of the values
    pub fn source(&self) -> &DataSource {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "userId,movieId,rating,timestamp\n\
                          1,31,2.5,1260759144\n\
                          1,1029,3.0,1260759179\n\
                          2,10,0.5,835355493\n\
                          3,60,5.0,1298861675\n";

    #[test]
    fn test_rating_column_doubles() {
        let mut reader = RatingsReader::from_reader(SAMPLE.as_bytes(), RatingColumn::Rating);
        assert_eq!(reader.read_values().unwrap(), vec![5, 6, 1, 10]);
        assert_eq!(reader.skipped(), 0);
    }

    #[test]
    fn test_movie_id_column() {
        let mut reader = RatingsReader::from_reader(SAMPLE.as_bytes(), RatingColumn::MovieId);
        assert_eq!(reader.read_values().unwrap(), vec![31, 1029, 10, 60]);
    }

    #[test]
    fn test_limit() {
        let mut reader =
            RatingsReader::from_reader(SAMPLE.as_bytes(), RatingColumn::UserId).with_limit(2);
        assert_eq!(reader.read_values().unwrap(), vec![1, 1]);
    }

    #[test]
    fn test_bad_rows_are_skipped() {
        let data = "userId,movieId,rating,timestamp\n\
                    1,31,abc,1\n\
                    1,32\n\
                    1,33,4.5,1\n";
        let mut reader = RatingsReader::from_reader(data.as_bytes(), RatingColumn::Rating);
        assert_eq!(reader.read_values().unwrap(), vec![9]);
        assert_eq!(reader.skipped(), 2);
    }

    #[test]
    fn test_header_only() {
        let data = "userId,movieId,rating,timestamp\n";
        let mut reader = RatingsReader::from_reader(data.as_bytes(), RatingColumn::Rating);
        assert!(reader.read_values().unwrap().is_empty());
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(RatingColumn::Rating.parse_field(" 3.5 "), Some(7));
        assert_eq!(RatingColumn::Rating.parse_field("NaN"), None);
        assert_eq!(RatingColumn::Timestamp.parse_field("1260759144"), Some(1_260_759_144));
        assert_eq!(RatingColumn::MovieId.parse_field("1.5"), None);
    }

    #[test]
    fn test_column_parsing() {
        assert_eq!("movie-id".parse::<RatingColumn>().unwrap(), RatingColumn::MovieId);
        assert_eq!("Rating".parse::<RatingColumn>().unwrap(), RatingColumn::Rating);
        assert!("genre".parse::<RatingColumn>().is_err());
    }

    #[test]
    fn test_synthetic() {
        let dataset = Dataset::synthetic(12);
        assert_eq!(dataset.values(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 1, 2]);
        assert_eq!(dataset.source(), &DataSource::Synthetic);
        assert_eq!(dataset.prefix(3), &[1, 2, 3]);
        assert_eq!(dataset.prefix(100).len(), 12);
    }

    #[test]
    fn test_from_csv_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dataset = Dataset::from_csv(file.path(), RatingColumn::Rating, 3).unwrap();
        assert_eq!(dataset.values(), &[5, 6, 1]);
        assert_eq!(dataset.source(), &DataSource::File(file.path().to_path_buf()));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let err = Dataset::from_csv("/nonexistent/ratings.csv", RatingColumn::Rating, 10).unwrap_err();
        assert_eq!(err.category(), "dataset");

        let dataset = Dataset::load_or_synthetic(
            Some(Path::new("/nonexistent/ratings.csv")),
            RatingColumn::Rating,
            5,
        )
        .unwrap();
        assert_eq!(dataset.source(), &DataSource::Synthetic);
        assert_eq!(dataset.len(), 5);
    }
}
