use super::Compiler;

use crate::Quote;

use stencil_core::Capability;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    Postgresql,
    Sqlite,
    Mysql,
}

impl Flavor {
    pub fn capability(self) -> &'static Capability {
        match self {
            Flavor::Postgresql => &Capability::POSTGRESQL,
            Flavor::Sqlite => &Capability::SQLITE,
            Flavor::Mysql => &Capability::MYSQL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Flavor::Postgresql => "postgresql",
            Flavor::Sqlite => "sqlite",
            Flavor::Mysql => "mysql",
        }
    }

    pub(crate) fn quote(self) -> Quote {
        match self {
            Flavor::Mysql => Quote::Backtick,
            Flavor::Postgresql | Flavor::Sqlite => Quote::Double,
        }
    }
}

impl Compiler {
    pub fn sqlite() -> Compiler {
        Compiler::new(Flavor::Sqlite)
    }

    pub fn postgresql() -> Compiler {
        Compiler::new(Flavor::Postgresql)
    }

    pub fn mysql() -> Compiler {
        Compiler::new(Flavor::Mysql)
    }
}
