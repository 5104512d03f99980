//! Cursor-based pattern scanner
//!
//! Walks the remote keyspace with SCAN and deletes every matching key one
//! page at a time, so no single call asks the store to enumerate the whole
//! keyspace. The cursor is the store's opaque progress token: 0 means both
//! "start" and "complete", and it lives only for the duration of one call.

use crate::client::Client;
use crate::config::ScanScope;
use crate::connection::StoreConnection;
use crate::error::Error;

impl<C: StoreConnection> Client<C> {
  /// Delete every key whose name contains `pattern` as a substring.
  ///
  /// Pages through the keyspace with `SCAN cursor MATCH *pattern*` and
  /// deletes matches sequentially. The first failing SCAN aborts with
  /// [`Error::ScanAborted`] before any delete of that page; the first
  /// failing DEL aborts with that delete's error and leaves the remaining
  /// keys untouched. Keys inserted or removed elsewhere during the scan may
  /// or may not be observed, per the store's native scan guarantee.
  ///
  /// Under [`ScanScope::Store`] the match filter ignores the configured
  /// prefix, so keys outside this client's namespace can be inspected and
  /// deleted; [`ScanScope::Namespace`] confines the filter to the prefix.
  ///
  /// Returns the number of keys deleted.
  pub async fn delete_like(&mut self, pattern: &str) -> Result<u64, Error> {
    let filter = match self.config.scan_scope {
      ScanScope::Store => format!("*{}*", pattern),
      ScanScope::Namespace => format!("{}*{}*", self.config.prefix, pattern),
    };

    let mut cursor: u64 = 0;
    let mut rounds: u64 = 0;
    let mut deleted: u64 = 0;

    loop {
      let page = self
        .conn
        .execute(
          "SCAN",
          &[cursor.to_string(), "MATCH".to_string(), filter.clone()],
        )
        .await
        .map_err(|e| Error::ScanAborted {
          pattern: pattern.to_string(),
          reason: e.to_string(),
        })?;

      // Two-element page: [new cursor, matched keys]. Malformed elements
      // coerce to 0 / empty instead of failing the scan.
      let items = page.as_array().unwrap_or(&[]);
      cursor = items
        .first()
        .and_then(|v| v.as_i64())
        .and_then(|c| u64::try_from(c).ok())
        .unwrap_or(0);
      let keys = items.get(1).map(|v| v.string_items()).unwrap_or_default();

      // Keys are deleted exactly as the store reported them; namespacing
      // was already baked into the filter (or deliberately not).
      for key in &keys {
        self.conn.execute("DEL", &[key.clone()]).await?;
        deleted += 1;
      }

      rounds += 1;

      if cursor == 0 {
        tracing::debug!(
          "delete_like('{}') removed {} keys in {} scan rounds",
          pattern,
          deleted,
          rounds
        );
        return Ok(deleted);
      }

      if let Some(limit) = self.config.scan_round_limit {
        if rounds >= limit {
          tracing::warn!(
            "delete_like('{}') gave up after {} scan rounds (cursor {})",
            pattern,
            rounds,
            cursor
          );
          return Err(Error::ScanStalled {
            pattern: pattern.to_string(),
            rounds,
          });
        }
      }
    }
  }
}
