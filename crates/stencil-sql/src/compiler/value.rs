use super::{Flavor, Formatter, ToSql};

use crate::node::Node;

use stencil_core::{stmt::Value, Error, Result};
use std::fmt::Write;

impl ToSql for &Value {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let literal = literal(f, self)?;
        f.push(Node::text(literal));
        Ok(())
    }
}

/// Renders `value` as an inline SQL literal.
fn literal(f: &Formatter<'_>, value: &Value) -> Result<String> {
    Ok(match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(value) => {
            let text = match (*value, f.capability().native_bool) {
                (true, true) => "TRUE",
                (false, true) => "FALSE",
                (true, false) => "1",
                (false, false) => "0",
            };
            text.to_string()
        }
        Value::I32(value) => value.to_string(),
        Value::I64(value) => value.to_string(),
        Value::F64(value) if value.is_finite() => {
            let mut ret = value.to_string();
            if !ret.contains(['.', 'e', 'E']) {
                ret.push_str(".0");
            }
            ret
        }
        Value::F64(value) => {
            return Err(Error::compilation(format!(
                "{value} cannot be written as a SQL literal"
            )))
        }
        Value::String(value) => string(f.flavor(), value),
        Value::Bytes(value) => bytes(f.flavor(), value)?,
    })
}

fn string(flavor: Flavor, value: &str) -> String {
    let mut ret = String::with_capacity(value.len() + 2);
    ret.push('\'');
    for ch in value.chars() {
        match ch {
            '\'' => ret.push_str("''"),
            '\\' if flavor == Flavor::Mysql => ret.push_str("\\\\"),
            ch => ret.push(ch),
        }
    }
    ret.push('\'');
    ret
}

fn bytes(flavor: Flavor, value: &[u8]) -> Result<String> {
    let mut ret = String::with_capacity(value.len() * 2 + 4);
    match flavor {
        Flavor::Postgresql => ret.push_str("'\\x"),
        Flavor::Sqlite | Flavor::Mysql => ret.push_str("X'"),
    }
    for byte in value {
        write!(ret, "{byte:02X}")?;
    }
    ret.push('\'');
    Ok(ret)
}
