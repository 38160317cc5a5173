//! 시트 → 헤더 기반 문자열 테이블 변환

use crate::error::{FinderError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// 헤더 이름으로 열을 찾는 문자열 테이블
#[derive(Debug, Clone, Default)]
pub struct Table {
    source: String,
    headers: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_range(source: &str, range: &Range<Data>) -> Self {
        let mut iter = range.rows();

        let headers = iter
            .next()
            .map(|header| {
                header
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| (cell_to_string(cell).trim().to_string(), i))
                    .filter(|(name, _)| !name.is_empty())
                    .collect::<HashMap<_, _>>()
            })
            .unwrap_or_default();

        // 완전히 빈 행은 건너뜀
        let rows = iter
            .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>())
            .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
            .collect();

        Self {
            source: source.to_string(),
            headers,
            rows,
        }
    }

    /// 필수 컬럼이 모두 있는지 확인
    pub fn require(&self, columns: &[&str]) -> Result<()> {
        for column in columns {
            self.column(column)?;
        }
        Ok(())
    }

    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .get(name)
            .copied()
            .ok_or_else(|| FinderError::MissingColumn {
                path: self.source.clone(),
                column: name.to_string(),
            })
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 행에서 셀 값을 꺼냄. 범위 밖은 빈 문자열.
pub fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// 워크북 파일에서 시트 하나를 읽음
///
/// `sheet`가 없으면 첫 번째 시트를 사용한다.
pub fn read_table(path: &Path, sheet: Option<&str>) -> Result<Table> {
    if !path.exists() {
        return Err(FinderError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| FinderError::Workbook(format!("{}: {}", path.display(), e)))?;

    let names = workbook.sheet_names();
    let sheet_name = match sheet {
        Some(name) if names.iter().any(|n| n == name) => name.to_string(),
        Some(name) => {
            return Err(FinderError::SheetNotFound {
                path: path.display().to_string(),
                sheet: name.to_string(),
            })
        }
        None => names.first().cloned().ok_or_else(|| FinderError::SheetNotFound {
            path: path.display().to_string(),
            sheet: "(첫 번째 시트)".to_string(),
        })?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| FinderError::Workbook(format!("{} [{}]: {}", path.display(), sheet_name, e)))?;

    let table = Table::from_range(&path.display().to_string(), &range);
    debug!(path = %path.display(), sheet = %sheet_name, rows = table.len(), "시트 읽기 완료");
    Ok(table)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        // 정수로 저장된 실수는 소수점 없이
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
