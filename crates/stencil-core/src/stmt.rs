mod delete;
pub use delete::Delete;

mod direction;
pub use direction::Direction;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_exists;
pub use expr_exists::ExprExists;

mod expr_func;
pub use expr_func::{ExprFunc, FuncCall, FuncCount};

mod expr_in_collection;
pub use expr_in_collection::{CollectionMatch, ExprInCollection};

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_in_subquery;
pub use expr_in_subquery::ExprInSubquery;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_like;
pub use expr_like::ExprLike;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod expr_record;
pub use expr_record::ExprRecord;

mod expr_set;
pub use expr_set::{ExprSet, ExprSetOp, SetOp};

mod expr_stmt;
pub use expr_stmt::ExprStmt;

mod expr_variant;
pub use expr_variant::ExprVariant;

mod hint;
pub use hint::Hint;

mod insert;
pub use insert::{Insert, InsertSource};

mod join;
pub use join::{Join, JoinKind, TableWithJoins};

mod key;
pub use key::Key;

mod limit;
pub use limit::Limit;

mod op_binary;
pub use op_binary::BinaryOp;

mod order_by;
pub use order_by::OrderByExpr;

mod param;
pub use param::{Param, ParamRef};

mod query;
pub use query::{Lock, Query};

mod schema;
pub use schema::{Catalog, CatalogRef, Schema, SchemaRef};

mod select;
pub use select::{Select, SelectItem};

mod statement;
pub use statement::Statement;

mod table;
pub use table::{Table, TableRef, TableSource};

mod ty;
pub use ty::{TypeInfo, TypeRef};

mod update;
pub use update::{Assignment, Update};

mod value;
pub use value::Value;
