// crates/infra/src/source/csv_source.rs
use std::{io::Read, path::PathBuf};

use csv::{ErrorKind, ReaderBuilder, StringRecord};
use user_stats_ports::source::{RecordRows, RecordSource, UserRecordDto};
use user_stats_shared_kernel::{Gender, InfraResult, InfrastructureError, Result, Status};

const ID: &str = "ID";
const NAME: &str = "Name";
const AGE: &str = "Age";
const GENDER: &str = "Gender";
const STATUS: &str = "Status";

/// ヘッダー付き区切りテキストのユーザー表。
#[derive(Debug, Clone)]
pub struct CsvRecordSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

}

impl RecordSource for CsvRecordSource {
    fn rows(&self) -> Result<RecordRows<'_>> {
        let file = crate::persistence::FileReader::open_buffered(&self.path).map_err(|source| {
            InfrastructureError::SourceNotFound { path: self.path.clone(), source }
        })?;
        let rows = CsvRows::from_reader(file, self.delimiter)?;
        Ok(Box::new(rows))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// 列名から引いた列位置。列順は問わない。
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    id: usize,
    name: usize,
    age: usize,
    gender: usize,
    status: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> InfraResult<Self> {
        let find = |column: &str| {
            headers.iter().position(|h| h == column).ok_or_else(|| {
                InfrastructureError::MalformedRecord {
                    line: 1,
                    field: column.to_string(),
                    reason: "missing column in header".to_string(),
                }
            })
        };

        Ok(Self {
            id: find(ID)?,
            name: find(NAME)?,
            age: find(AGE)?,
            gender: find(GENDER)?,
            status: find(STATUS)?,
        })
    }
}

/// 1 行ずつ [`UserRecordDto`] に変換する反復子。
///
/// 行単位の失敗は要素として返すので、呼び出し側が中断か読み飛ばしかを選べる。
pub struct CsvRows<R: Read> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    columns: Option<ColumnIndex>,
    record: StringRecord,
}

impl<R: Read> CsvRows<R> {
    /// ヘッダーを読み、必要な列がそろっているか確認する。
    ///
    /// 完全に空の入力は 0 行として扱う。
    pub fn from_reader(reader: R, delimiter: u8) -> InfraResult<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let columns = if headers.is_empty() {
            log::debug!("input has no header row; treating as empty");
            None
        } else {
            Some(ColumnIndex::from_headers(&headers)?)
        };

        Ok(Self { reader, headers, columns, record: StringRecord::new() })
    }

    fn parse_current(&self, columns: ColumnIndex) -> InfraResult<UserRecordDto> {
        let line = self.current_line();
        let field = |column: &str, index: usize| {
            self.record.get(index).ok_or_else(|| InfrastructureError::MalformedRecord {
                line,
                field: column.to_string(),
                reason: "missing field".to_string(),
            })
        };
        let integer = |column: &str, index: usize| -> InfraResult<i64> {
            let raw = field(column, index)?;
            raw.trim().parse::<i64>().map_err(|err| InfrastructureError::MalformedRecord {
                line,
                field: column.to_string(),
                reason: format!("{err}: '{raw}'"),
            })
        };

        let id = integer(ID, columns.id)?;
        let name = field(NAME, columns.name)?.to_string();
        let age = integer(AGE, columns.age)?;
        let gender = Gender::from(field(GENDER, columns.gender)?);
        let status = Status::from(field(STATUS, columns.status)?);

        if age < 0 {
            log::debug!("line {line}: negative age {age} is counted in the 0-18 bracket");
        }

        Ok(UserRecordDto { line, id, name, age, gender, status })
    }

    fn current_line(&self) -> u64 {
        self.record.position().map_or(0, csv::Position::line)
    }

    /// UTF-8 として読めない行はその行だけの不正として扱う。それ以外は入力全体の失敗。
    fn row_error(&self, err: csv::Error) -> InfrastructureError {
        if let ErrorKind::Utf8 { pos, err: utf8 } = err.kind() {
            let field = self
                .headers
                .get(utf8.field())
                .map_or_else(|| format!("column {}", utf8.field() + 1), str::to_string);
            return InfrastructureError::MalformedRecord {
                line: pos.as_ref().map_or(0, csv::Position::line),
                field,
                reason: "invalid UTF-8".to_string(),
            };
        }
        err.into()
    }
}

impl<R: Read> Iterator for CsvRows<R> {
    type Item = Result<UserRecordDto>;

    fn next(&mut self) -> Option<Self::Item> {
        let columns = self.columns?;
        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(self.parse_current(columns).map_err(Into::into)),
            Ok(false) => None,
            Err(err) => Some(Err(self.row_error(err).into())),
        }
    }
}
