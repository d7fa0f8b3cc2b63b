use crate::{Error, Result};

use std::{fmt, str::FromStr};
use url::Url;

/// SQL dialects statements can be rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// Plain ANSI SQL, identifiers left unquoted.
    #[default]
    Ansi,
    SqlServer,
    Postgresql,
    Mysql,
    Sqlite,
}

impl Dialect {
    /// Pick the dialect matching a connection URL's scheme.
    ///
    /// ```
    /// # use rowmap_core::Dialect;
    /// let dialect = Dialect::from_url("postgresql://localhost/app").unwrap();
    /// assert_eq!(dialect, Dialect::Postgresql);
    /// ```
    pub fn from_url(url: &str) -> Result<Dialect> {
        let url = Url::parse(url)?;

        url.scheme()
            .parse()
            .map_err(|_| Error::unsupported_scheme(url.scheme()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Ansi => "ansi",
            Dialect::SqlServer => "sqlserver",
            Dialect::Postgresql => "postgresql",
            Dialect::Mysql => "mysql",
            Dialect::Sqlite => "sqlite",
        }
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Dialect> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "ansi" => Dialect::Ansi,
            "sqlserver" | "mssql" => Dialect::SqlServer,
            "postgresql" | "postgres" => Dialect::Postgresql,
            "mysql" => Dialect::Mysql,
            "sqlite" => Dialect::Sqlite,
            _ => crate::bail!("unknown SQL dialect `{s}`"),
        })
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
