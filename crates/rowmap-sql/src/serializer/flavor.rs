use super::Serializer;

use rowmap_core::Dialect;

impl Serializer {
    pub fn new(dialect: Dialect) -> Serializer {
        Serializer { dialect }
    }

    pub fn ansi() -> Serializer {
        Serializer::new(Dialect::Ansi)
    }

    pub fn sql_server() -> Serializer {
        Serializer::new(Dialect::SqlServer)
    }

    pub fn postgresql() -> Serializer {
        Serializer::new(Dialect::Postgresql)
    }

    pub fn mysql() -> Serializer {
        Serializer::new(Dialect::Mysql)
    }

    pub fn sqlite() -> Serializer {
        Serializer::new(Dialect::Sqlite)
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }
}
