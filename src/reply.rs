//! Store reply model

/// A parsed reply from the remote store
///
/// Covers the reply alphabet the facade depends on: nil, integer, string and
/// nested sequence. Anything richer the driver may hand back degrades to
/// [`Reply::Nil`].
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
  /// No value (absent key, nil reply)
  Nil,
  /// Integer reply
  Integer(i64),
  /// Simple status string (+OK)
  Simple(String),
  /// Bulk string payload
  Bulk(String),
  /// Sequence of replies
  Array(Vec<Reply>),
}

impl Reply {
  /// Extract string value
  pub fn as_str(&self) -> Option<&str> {
    match self {
      Reply::Simple(s) | Reply::Bulk(s) => Some(s),
      _ => None,
    }
  }

  /// Extract integer value, accepting numeric strings
  pub fn as_i64(&self) -> Option<i64> {
    match self {
      Reply::Integer(i) => Some(*i),
      Reply::Simple(s) | Reply::Bulk(s) => s.parse().ok(),
      _ => None,
    }
  }

  /// Extract array elements
  pub fn as_array(&self) -> Option<&[Reply]> {
    match self {
      Reply::Array(items) => Some(items),
      _ => None,
    }
  }

  /// Collect the array elements that coerce to strings, skipping the rest
  pub fn string_items(&self) -> Vec<String> {
    self
      .as_array()
      .map(|items| {
        items
          .iter()
          .filter_map(|v| v.as_str().map(String::from))
          .collect()
      })
      .unwrap_or_default()
  }
}

impl From<redis::Value> for Reply {
  fn from(value: redis::Value) -> Self {
    match value {
      redis::Value::Nil => Reply::Nil,
      redis::Value::Int(i) => Reply::Integer(i),
      redis::Value::SimpleString(s) => Reply::Simple(s),
      redis::Value::Okay => Reply::Simple("OK".to_string()),
      redis::Value::BulkString(bytes) => {
        Reply::Bulk(String::from_utf8_lossy(&bytes).to_string())
      }
      redis::Value::Array(items) => {
        Reply::Array(items.into_iter().map(Reply::from).collect())
      }
      redis::Value::Set(items) => Reply::Array(items.into_iter().map(Reply::from).collect()),
      _ => Reply::Nil,
    }
  }
}
