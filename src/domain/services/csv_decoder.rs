//! # CSV Decoder
//!
//! 抽出ジョブが書き出したCSVシャードを1つの DataFrame にまとめる

use std::io::Cursor;
use std::sync::Arc;

use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder;
use arrow::datatypes::Schema;
use arrow::error::ArrowError;

use crate::domain::entities::DataFrame;

/// 1バッチあたりの行数
pub const DEFAULT_BATCH_SIZE: usize = 8192;

/// CSVデコーダ
///
/// 各シャードはヘッダ行付き。2つ目以降のシャードのヘッダは捨ててから連結し、
/// 連結後の全体からスキーマを推論する
pub struct CsvDecoder;

impl CsvDecoder {
    /// シャードを連結してデコードする
    ///
    /// # 例
    ///
    /// ```
    /// use bqhelper::domain::services::csv_decoder::CsvDecoder;
    ///
    /// let shards = vec![
    ///     b"id,name\n1,alice\n".to_vec(),
    ///     b"id,name\n2,bob\n".to_vec(),
    /// ];
    /// let frame = CsvDecoder::decode(&shards).unwrap();
    /// assert_eq!(frame.num_rows(), 2);
    /// assert_eq!(frame.column_names(), vec!["id", "name"]);
    /// ```
    pub fn decode<B: AsRef<[u8]>>(shards: &[B]) -> Result<DataFrame, ArrowError> {
        let data = Self::concat_shards(shards);

        if data.is_empty() {
            return Ok(DataFrame::empty(Arc::new(Schema::empty())));
        }

        let format = Format::default().with_header(true);
        let (schema, _) = format.infer_schema(Cursor::new(&data), None)?;
        let schema = Arc::new(schema);

        let reader = ReaderBuilder::new(schema.clone())
            .with_header(true)
            .with_batch_size(DEFAULT_BATCH_SIZE)
            .build(Cursor::new(data))?;

        let batches = reader.collect::<Result<Vec<_>, _>>()?;
        Ok(DataFrame::new(schema, batches))
    }

    /// 先頭シャードのヘッダだけを残して連結する
    pub fn concat_shards<B: AsRef<[u8]>>(shards: &[B]) -> Vec<u8> {
        let mut data = Vec::new();

        for shard in shards {
            let shard = shard.as_ref();
            // まだ何も書いていなければ、このシャードのヘッダを使う
            let body = if data.is_empty() {
                shard
            } else {
                match shard.iter().position(|&b| b == b'\n') {
                    Some(pos) => &shard[pos + 1..],
                    None => &[],
                }
            };

            if body.is_empty() {
                continue;
            }
            if !data.is_empty() && !data.ends_with(b"\n") {
                data.push(b'\n');
            }
            data.extend_from_slice(body);
        }

        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Array, Int64Array, StringArray};
    use arrow::datatypes::DataType;

    #[test]
    fn test_concat_shards_drops_repeated_headers() {
        let shards = vec!["a,b\n1,2\n", "a,b\n3,4\n", "a,b\n"];
        let data = CsvDecoder::concat_shards(&shards);
        assert_eq!(String::from_utf8(data).unwrap(), "a,b\n1,2\n3,4\n");
    }

    #[test]
    fn test_concat_shards_adds_missing_newline() {
        let shards = vec!["a,b\n1,2", "a,b\n3,4"];
        let data = CsvDecoder::concat_shards(&shards);
        assert_eq!(String::from_utf8(data).unwrap(), "a,b\n1,2\n3,4");
    }

    #[test]
    fn test_concat_shards_skips_empty_first_shard() {
        let shards = vec!["", "a,b\n1,2\n"];
        let data = CsvDecoder::concat_shards(&shards);
        assert_eq!(String::from_utf8(data).unwrap(), "a,b\n1,2\n");
    }

    #[test]
    fn test_decode_infers_types() {
        let shards = vec!["id,name,score\n1,alice,0.5\n", "id,name,score\n2,bob,1.5\n"];
        let frame = CsvDecoder::decode(&shards).unwrap();

        assert_eq!(frame.num_rows(), 2);
        let schema = frame.schema();
        assert_eq!(schema.field(0).data_type(), &DataType::Int64);
        assert_eq!(schema.field(1).data_type(), &DataType::Utf8);
        assert_eq!(schema.field(2).data_type(), &DataType::Float64);

        let batch = frame.to_record_batch().unwrap();
        let ids = batch
            .column(0)
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap();
        assert_eq!(ids.value(1), 2);
        let names = batch
            .column(1)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(names.value(0), "alice");
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_decode_header_only() {
        let shards = vec!["id,name\n"];
        let frame = CsvDecoder::decode(&shards).unwrap();
        assert_eq!(frame.num_rows(), 0);
        assert_eq!(frame.column_names(), vec!["id", "name"]);
    }

    #[test]
    fn test_decode_nothing() {
        let shards: Vec<Vec<u8>> = vec![];
        let frame = CsvDecoder::decode(&shards).unwrap();
        assert!(frame.is_empty());
        assert_eq!(frame.num_columns(), 0);
    }
}
