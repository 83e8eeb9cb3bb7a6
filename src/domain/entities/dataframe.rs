//! # DataFrame
//!
//! メモリ上の表形式データ（Arrow の RecordBatch 列）

use arrow::compute::concat_batches;
use arrow::datatypes::SchemaRef;
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

/// 表形式データ
///
/// 同じスキーマを持つ RecordBatch の並び
#[derive(Debug, Clone)]
pub struct DataFrame {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
}

impl DataFrame {
    pub fn new(schema: SchemaRef, batches: Vec<RecordBatch>) -> Self {
        Self { schema, batches }
    }

    /// 行を持たないデータフレーム
    pub fn empty(schema: SchemaRef) -> Self {
        Self::new(schema, Vec::new())
    }

    pub fn schema(&self) -> SchemaRef {
        self.schema.clone()
    }

    pub fn batches(&self) -> &[RecordBatch] {
        &self.batches
    }

    pub fn into_batches(self) -> Vec<RecordBatch> {
        self.batches
    }

    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(|b| b.num_rows()).sum()
    }

    pub fn num_columns(&self) -> usize {
        self.schema.fields().len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    pub fn column_names(&self) -> Vec<String> {
        self.schema
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    /// 全バッチを1つの RecordBatch に結合
    pub fn to_record_batch(&self) -> Result<RecordBatch, ArrowError> {
        concat_batches(&self.schema, &self.batches)
    }

    /// 先頭 `n` 行を表形式の文字列で返す
    pub fn head_pretty(&self, n: usize) -> Result<String, ArrowError> {
        let mut remaining = n;
        let mut head = Vec::new();

        for batch in &self.batches {
            if remaining == 0 {
                break;
            }
            let take = remaining.min(batch.num_rows());
            head.push(batch.slice(0, take));
            remaining -= take;
        }

        if head.is_empty() {
            head.push(RecordBatch::new_empty(self.schema.clone()));
        }

        Ok(pretty_format_batches(&head)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Int64Array, StringArray};
    use arrow::datatypes::{DataType, Field, Schema};
    use std::sync::Arc;

    fn create_test_frame() -> DataFrame {
        let schema = Arc::new(Schema::new(vec![
            Field::new("id", DataType::Int64, false),
            Field::new("name", DataType::Utf8, true),
        ]));
        let first = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(Int64Array::from(vec![1, 2])),
                Arc::new(StringArray::from(vec!["a", "b"])),
            ],
        )
        .unwrap();
        let second = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(Int64Array::from(vec![3])),
                Arc::new(StringArray::from(vec!["c"])),
            ],
        )
        .unwrap();
        DataFrame::new(schema, vec![first, second])
    }

    #[test]
    fn test_shape() {
        let frame = create_test_frame();
        assert_eq!(frame.num_rows(), 3);
        assert_eq!(frame.num_columns(), 2);
        assert_eq!(frame.column_names(), vec!["id", "name"]);
        assert!(!frame.is_empty());
    }

    #[test]
    fn test_to_record_batch() {
        let frame = create_test_frame();
        let batch = frame.to_record_batch().unwrap();
        assert_eq!(batch.num_rows(), 3);
    }

    #[test]
    fn test_head_pretty_limits_rows() {
        let frame = create_test_frame();
        let rendered = frame.head_pretty(2).unwrap();
        assert!(rendered.contains("| 1  |"));
        assert!(rendered.contains("| 2  |"));
        assert!(!rendered.contains("| 3  |"));
    }

    #[test]
    fn test_empty_frame() {
        let schema = Arc::new(Schema::new(vec![Field::new("x", DataType::Utf8, true)]));
        let frame = DataFrame::empty(schema);
        assert!(frame.is_empty());
        assert!(frame.head_pretty(5).unwrap().contains("x"));
    }
}
