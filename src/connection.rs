//! Connection seam between the command facade and the remote store

use async_trait::async_trait;
use redis::aio::ConnectionManager;

use crate::config::ClientConfig;
use crate::error::Error;
use crate::reply::Reply;

/// One connection to the remote store
///
/// The facade issues every command through this trait and nothing else.
/// Methods take `&mut self`: one handle, strictly sequential round trips,
/// no pooling or internal locking.
#[async_trait]
pub trait StoreConnection: Send {
  /// Send a command and wait for the parsed reply.
  async fn execute(&mut self, verb: &str, args: &[String]) -> Result<Reply, Error>;

  /// Send a command and discard whatever the store replies.
  ///
  /// Only submission failure is reported. Callers that need the response
  /// use [`execute`](StoreConnection::execute) instead.
  async fn submit(&mut self, verb: &str, args: &[String]) -> Result<(), Error>;
}

/// Store connection backed by a live Redis server
pub struct RedisConnection {
  manager: ConnectionManager,
}

impl RedisConnection {
  /// Open a connection to the server described by the configuration.
  ///
  /// Fails fast with [`Error::Connect`] when the server is unreachable.
  pub async fn open(config: &ClientConfig) -> Result<Self, Error> {
    let client = redis::Client::open(config.connection_url())
      .map_err(|e| Error::Connect(e.to_string()))?;
    let manager = ConnectionManager::new(client)
      .await
      .map_err(|e| Error::Connect(e.to_string()))?;
    Ok(Self { manager })
  }

  /// Round-trip a PING to verify the connection is usable.
  pub async fn ping(&mut self) -> Result<(), Error> {
    redis::cmd("PING")
      .query_async::<()>(&mut self.manager)
      .await
      .map_err(|e| Error::Connect(e.to_string()))
  }

  fn build(verb: &str, args: &[String]) -> redis::Cmd {
    let mut cmd = redis::cmd(verb);
    for arg in args {
      cmd.arg(arg);
    }
    cmd
  }
}

#[async_trait]
impl StoreConnection for RedisConnection {
  async fn execute(&mut self, verb: &str, args: &[String]) -> Result<Reply, Error> {
    let value: redis::Value = Self::build(verb, args)
      .query_async(&mut self.manager)
      .await
      .map_err(|e| Error::Command(e.to_string()))?;
    Ok(Reply::from(value))
  }

  async fn submit(&mut self, verb: &str, args: &[String]) -> Result<(), Error> {
    Self::build(verb, args)
      .query_async::<()>(&mut self.manager)
      .await
      .map_err(|e| Error::Command(e.to_string()))
  }
}
