//! # IfExists Policy
//!
//! 出力先テーブルが既に存在する場合の書き込みポリシー

use std::fmt;
use std::str::FromStr;

use crate::domain::error::HelperError;

/// 書き込みポリシー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IfExists {
    /// 出力先は空でなければならない
    #[default]
    Fail,
    /// 出力先を置き換える
    Replace,
    /// 既存の行に追記する
    Append,
}

impl IfExists {
    pub fn as_str(&self) -> &'static str {
        match self {
            IfExists::Fail => "fail",
            IfExists::Replace => "replace",
            IfExists::Append => "append",
        }
    }
}

impl FromStr for IfExists {
    type Err = HelperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(IfExists::Fail),
            "replace" => Ok(IfExists::Replace),
            "append" => Ok(IfExists::Append),
            other => Err(HelperError::InvalidIfExists(other.to_string())),
        }
    }
}

impl fmt::Display for IfExists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
