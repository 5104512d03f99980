//! Command facade over the remote store

use std::time::Duration;

use crate::config::ClientConfig;
use crate::connection::{RedisConnection, StoreConnection};
use crate::error::Error;
use crate::reply::Reply;

/// Cache client bound to one namespace in one store
///
/// Every keyed operation prefixes the logical key with the configured
/// namespace exactly once before it reaches the wire. The client owns a
/// single connection handle; operations take `&mut self` and run one round
/// trip at a time.
pub struct Client<C = RedisConnection> {
  pub(crate) config: ClientConfig,
  pub(crate) conn: C,
}

impl Client<RedisConnection> {
  /// Connect to the store described by the configuration.
  pub async fn connect(config: ClientConfig) -> Result<Self, Error> {
    let conn = RedisConnection::open(&config).await?;
    Ok(Self { config, conn })
  }
}

impl<C: StoreConnection> Client<C> {
  /// Build a client over an already established connection.
  pub fn with_connection(config: ClientConfig, conn: C) -> Self {
    Self { config, conn }
  }

  /// The configuration this client was built with.
  pub fn config(&self) -> &ClientConfig {
    &self.config
  }

  /// The underlying connection.
  pub fn connection(&self) -> &C {
    &self.conn
  }

  /// Prefix a logical key into this client's namespace.
  fn namespaced(&self, key: &str) -> String {
    format!("{}{}", self.config.prefix, key)
  }

  /// Set the string value of a key, optionally with a time-to-live.
  ///
  /// The TTL is applied with a second EXPIRE round trip. If SET fails the
  /// EXPIRE is never issued and the SET error is returned. EXPIRE takes
  /// whole seconds; sub-second durations round up, never down to an
  /// immediate expiry.
  pub async fn set(&mut self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), Error> {
    let key = self.namespaced(key);
    self
      .conn
      .execute("SET", &[key.clone(), value.to_string()])
      .await?;

    if let Some(ttl) = ttl {
      self
        .conn
        .execute("EXPIRE", &[key, ttl_seconds(ttl).to_string()])
        .await?;
    }

    Ok(())
  }

  /// Get the string value of a key.
  ///
  /// Fails with [`Error::Decode`] when the key is absent or the reply does
  /// not coerce to a string.
  pub async fn get(&mut self, key: &str) -> Result<String, Error> {
    let key = self.namespaced(key);
    let reply = self.conn.execute("GET", &[key.clone()]).await?;
    reply
      .as_str()
      .map(String::from)
      .ok_or_else(|| Error::Decode(format!("'{}' holds no string value", key)))
  }

  /// Get the value of a key, or `None` when it is missing, empty or unreadable.
  ///
  /// An empty stored value is indistinguishable from an absent key here;
  /// callers that must tell them apart use [`get`](Client::get).
  pub async fn try_get(&mut self, key: &str) -> Option<String> {
    match self.get(key).await {
      Ok(value) if !value.is_empty() => Some(value),
      _ => None,
    }
  }

  /// Delete a key. Deleting an absent key succeeds.
  pub async fn delete(&mut self, key: &str) -> Result<(), Error> {
    let key = self.namespaced(key);
    self.conn.execute("DEL", &[key]).await?;
    Ok(())
  }

  /// Set a time-to-live on an existing key.
  ///
  /// EXPIRE takes whole seconds; sub-second durations round up.
  pub async fn expire(&mut self, key: &str, ttl: Duration) -> Result<(), Error> {
    let key = self.namespaced(key);
    self
      .conn
      .execute("EXPIRE", &[key, ttl_seconds(ttl).to_string()])
      .await?;
    Ok(())
  }

  /// Check whether a key exists.
  pub async fn exists(&mut self, key: &str) -> Result<bool, Error> {
    let key = self.namespaced(key);
    let reply = self.conn.execute("EXISTS", &[key]).await?;
    Ok(reply.as_i64().unwrap_or(0) > 0)
  }

  /// Submit a raw command, discarding the reply.
  ///
  /// Escape hatch: no namespacing is applied, callers prefix keys
  /// themselves if needed. Only submission failure is reported; use
  /// [`submit_for_reply`](Client::submit_for_reply) when the response
  /// matters.
  pub async fn submit(&mut self, verb: &str, args: &[String]) -> Result<(), Error> {
    self.conn.submit(verb, args).await
  }

  /// Submit a raw command and return the parsed reply.
  ///
  /// Escape hatch: no namespacing is applied, callers prefix keys
  /// themselves if needed.
  pub async fn submit_for_reply(&mut self, verb: &str, args: &[String]) -> Result<Reply, Error> {
    self.conn.execute(verb, args).await
  }
}

/// Whole seconds for EXPIRE, rounded up so a sub-second duration never
/// becomes an immediate expiry.
fn ttl_seconds(ttl: Duration) -> u64 {
  ttl.as_millis().div_ceil(1000) as u64
}
