use async_trait::async_trait;
use rowmap::{
    AsyncConnection, Command, Connection, Dialect, Error, Params, Result, Row, RowStream, Session,
};

use std::{
    collections::VecDeque,
    fmt,
    sync::{Arc, Mutex},
    time::Duration,
};

/// Scripted reply to the next statement.
#[derive(Debug, Clone)]
pub enum Response {
    /// Rows of a query. Joined queries receive unsplit rows; the connection
    /// splits them like a real engine would.
    Rows(Vec<Row>),

    /// Rows affected by a statement that returns no rows
    Affected(u64),

    /// Fail the statement with an engine error
    Fail(EngineError),
}

/// Error raised by the scripted engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError {
    pub code: i32,
    pub message: String,
}

impl EngineError {
    pub fn new(code: i32, message: impl Into<String>) -> EngineError {
        EngineError {
            code,
            message: message.into(),
        }
    }
}

impl std::error::Error for EngineError {}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "engine error {}: {}", self.code, self.message)
    }
}

/// Transaction handle understood by [`MockConnection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockTransaction {
    pub name: String,
}

impl MockTransaction {
    pub fn new(name: impl Into<String>) -> MockTransaction {
        MockTransaction { name: name.into() }
    }
}

/// A statement as the engine received it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedCommand {
    pub sql: String,
    pub params: Params,

    /// Name of the transaction the statement ran in
    pub transaction: Option<String>,
    pub timeout: Option<Duration>,

    /// Split columns of a joined query
    pub split_on: Option<Vec<String>>,
}

/// An execution engine that replays scripted responses and logs every
/// statement it receives.
///
/// Implements both the blocking and the asynchronous connection traits.
/// Statements without a scripted response return no rows and affect none.
#[derive(Debug)]
pub struct MockConnection {
    dialect: Dialect,
    responses: Mutex<VecDeque<Response>>,

    /// Log of all statements executed through this connection
    /// Using Arc<Mutex> for thread-safe access from tests
    log: Arc<Mutex<Vec<LoggedCommand>>>,
}

impl MockConnection {
    pub fn new(dialect: Dialect) -> MockConnection {
        MockConnection {
            dialect,
            responses: Mutex::new(VecDeque::new()),
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue the reply to a future statement.
    pub fn respond(&self, response: Response) -> &Self {
        self.responses
            .lock()
            .expect("Failed to acquire responses lock")
            .push_back(response);
        self
    }

    pub fn respond_rows(&self, rows: Vec<Row>) -> &Self {
        self.respond(Response::Rows(rows))
    }

    /// Get a handle to access the statement log
    pub fn log_handle(&self) -> Arc<Mutex<Vec<LoggedCommand>>> {
        self.log.clone()
    }

    pub fn log(&self) -> Vec<LoggedCommand> {
        self.log
            .lock()
            .expect("Failed to acquire statement log lock")
            .clone()
    }

    /// SQL text of every logged statement
    pub fn statements(&self) -> Vec<String> {
        self.log().into_iter().map(|command| command.sql).collect()
    }

    #[track_caller]
    pub fn last(&self) -> LoggedCommand {
        self.log().pop().expect("no statement was executed")
    }

    fn record(&self, command: Command<'_, MockTransaction>, split_on: Option<&[String]>) {
        let logged = LoggedCommand {
            sql: command.sql.to_string(),
            params: command.params.clone(),
            transaction: command.transaction.map(|tx| tx.name.clone()),
            timeout: command.timeout,
            split_on: split_on.map(<[String]>::to_vec),
        };

        self.log
            .lock()
            .expect("Failed to acquire statement log lock")
            .push(logged);
    }

    fn next_response(&self) -> Option<Response> {
        self.responses
            .lock()
            .expect("Failed to acquire responses lock")
            .pop_front()
    }

    fn rows(&self) -> Result<Vec<Row>> {
        match self.next_response() {
            None => Ok(vec![]),
            Some(Response::Rows(rows)) => Ok(rows),
            Some(Response::Affected(_)) => Err(Error::driver(EngineError::new(
                -1,
                "statement does not return rows",
            ))),
            Some(Response::Fail(err)) => Err(Error::driver(err)),
        }
    }

    fn affected(&self) -> Result<u64> {
        match self.next_response() {
            None => Ok(0),
            Some(Response::Affected(count)) => Ok(count),
            Some(Response::Rows(rows)) => Ok(rows.len() as u64),
            Some(Response::Fail(err)) => Err(Error::driver(err)),
        }
    }

    fn split_rows(&self, split_on: &[String]) -> Result<Vec<Vec<Row>>> {
        self.rows()?
            .into_iter()
            .map(|row| split_row(row, split_on))
            .collect()
    }
}

/// Cut a joined row into one segment per type. Each split column starts a
/// new segment and is searched for after the start of the previous one.
fn split_row(row: Row, split_on: &[String]) -> Result<Vec<Row>> {
    let columns = row.into_columns();
    let mut bounds = vec![0];

    for name in split_on {
        let start = bounds[bounds.len() - 1] + 1;

        let Some(offset) = columns
            .iter()
            .skip(start)
            .position(|(column, _)| column.eq_ignore_ascii_case(name))
        else {
            return Err(Error::driver(EngineError::new(
                -2,
                format!("split column `{name}` not found"),
            )));
        };

        bounds.push(start + offset);
    }

    bounds.push(columns.len());

    let mut columns = columns.into_iter();
    Ok(bounds
        .windows(2)
        .map(|window| columns.by_ref().take(window[1] - window[0]).collect())
        .collect())
}

impl Session for MockConnection {
    type Transaction = MockTransaction;

    fn dialect(&self) -> Dialect {
        self.dialect
    }
}

impl Connection for MockConnection {
    fn query(&self, command: Command<'_, MockTransaction>) -> Result<Vec<Row>> {
        self.record(command, None);
        self.rows()
    }

    fn query_multi(
        &self,
        command: Command<'_, MockTransaction>,
        split_on: &[String],
    ) -> Result<Vec<Vec<Row>>> {
        self.record(command, Some(split_on));
        self.split_rows(split_on)
    }

    fn execute(&self, command: Command<'_, MockTransaction>) -> Result<u64> {
        self.record(command, None);
        self.affected()
    }
}

#[async_trait]
impl AsyncConnection for MockConnection {
    async fn query(&self, command: Command<'_, MockTransaction>) -> Result<RowStream> {
        self.record(command, None);
        let rows = self.rows()?;

        Ok(RowStream::from_stream(tokio_stream::iter(
            rows.into_iter().map(Ok),
        )))
    }

    async fn query_multi(
        &self,
        command: Command<'_, MockTransaction>,
        split_on: &[String],
    ) -> Result<Vec<Vec<Row>>> {
        self.record(command, Some(split_on));
        self.split_rows(split_on)
    }

    async fn execute(&self, command: Command<'_, MockTransaction>) -> Result<u64> {
        self.record(command, None);
        self.affected()
    }
}
