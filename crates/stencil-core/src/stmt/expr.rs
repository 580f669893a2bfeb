use super::*;

#[derive(Debug, Clone)]
pub enum Expr {
    /// AND a set of expressions
    And(ExprAnd),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// References a column through a table reference
    Column(ExprColumn),

    /// `EXISTS (subquery)`
    Exists(ExprExists),

    /// Function call
    Func(ExprFunc),

    /// Membership in a collection whose size is only known at bind time
    InCollection(ExprInCollection),

    /// In list
    InList(ExprInList),

    /// The expression is contained by the given subquery
    InSubquery(ExprInSubquery),

    /// Whether an expression is (or is not) null. This is different from a
    /// binary expression because of how databases treat null comparisons.
    IsNull(ExprIsNull),

    /// `LIKE` pattern match
    Like(ExprLike),

    /// Negates a boolean expression
    Not(ExprNot),

    /// OR a set of expressions
    Or(ExprOr),

    /// A bound query parameter
    Param(ParamRef),

    /// SQL text substituted verbatim at bind time
    Placeholder(Key),

    /// Evaluates to a tuple
    Record(ExprRecord),

    /// Evaluate a scalar sub-statement
    Stmt(ExprStmt),

    /// The numeric type id of a persistent type, resolved at bind time
    TypeId(TypeRef),

    /// Evaluates to a constant value
    Value(Value),

    /// One of two expressions, picked at bind time
    Variant(ExprVariant),
}

impl Expr {
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    pub fn param(param: &ParamRef) -> Self {
        Self::Param(param.clone())
    }

    pub fn placeholder(key: impl Into<Key>) -> Self {
        Self::Placeholder(key.into())
    }

    pub fn type_id(ty: &TypeRef) -> Self {
        Self::TypeId(ty.clone())
    }

    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// Returns `true` if the expression renders as a disjunction, or may
    /// through a variant branch, and must be parenthesized inside a
    /// conjunction.
    pub fn is_disjunction(&self) -> bool {
        match self {
            Self::Or(_) => true,
            Self::InCollection(expr) => expr.style == CollectionMatch::Disjunction,
            Self::Variant(expr) => expr.main.is_disjunction() || expr.alternative.is_disjunction(),
            _ => false,
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&ParamRef> for Expr {
    fn from(value: &ParamRef) -> Self {
        Self::Param(value.clone())
    }
}

impl From<ParamRef> for Expr {
    fn from(value: ParamRef) -> Self {
        Self::Param(value)
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}
