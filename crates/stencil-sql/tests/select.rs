use pretty_assertions::assert_eq;
use stencil_sql::{
    stmt::{
        Direction, Expr, ExprSet, JoinKind, Lock, ParamRef, Query, Select, Statement, Table, TableRef,
        Value,
    },
    Bindings, Compiler, Options, ParamStyle, Sql,
};

fn unquoted(compiler: Compiler) -> Compiler {
    compiler.with_options(
        Options::default()
            .quote_identifiers(false)
            .param_style(ParamStyle::Named),
    )
}

fn render(compiler: &Compiler, stmt: impl Into<Statement>, bindings: &Bindings) -> Sql {
    let _ = env_logger::builder().is_test(true).try_init();

    compiler
        .prepare(&stmt.into())
        .unwrap()
        .bind(bindings)
        .unwrap()
}

fn text(compiler: &Compiler, stmt: impl Into<Statement>) -> String {
    render(compiler, stmt, &Bindings::new()).text
}

#[test]
fn select_with_parameter() {
    let customer = Table::new("Customer");
    let t = TableRef::new(&customer);
    let first_name = ParamRef::new();

    let stmt = Select::new(&t)
        .column(t.col("Id"))
        .filter(Expr::eq(t.col("FirstName"), &first_name));

    let mut bindings = Bindings::new();
    bindings.param(&first_name, "Alex");

    let sql = render(&unquoted(Compiler::sqlite()), stmt, &bindings);
    assert_eq!(sql.text, "SELECT a.Id FROM Customer a WHERE a.FirstName = :p0");
    assert_eq!(sql.params, [Value::from("Alex")]);
}

#[test]
fn dialect_markers_and_quoting() {
    let customer = Table::new("Customer");
    let t = TableRef::new(&customer);
    let first_name = ParamRef::new();

    let stmt: Statement = Select::new(&t)
        .column(t.col("Id"))
        .filter(Expr::eq(t.col("FirstName"), &first_name))
        .into();

    let mut bindings = Bindings::new();
    bindings.param(&first_name, "Alex");

    let sql = render(&Compiler::sqlite(), stmt.clone(), &bindings);
    assert_eq!(
        sql.text,
        r#"SELECT "a"."Id" FROM "Customer" "a" WHERE "a"."FirstName" = ?1"#
    );

    let sql = render(&Compiler::postgresql(), stmt.clone(), &bindings);
    assert_eq!(
        sql.text,
        r#"SELECT "a"."Id" FROM "Customer" "a" WHERE "a"."FirstName" = $1"#
    );

    let sql = render(&Compiler::mysql(), stmt, &bindings);
    assert_eq!(
        sql.text,
        "SELECT `a`.`Id` FROM `Customer` `a` WHERE `a`.`FirstName` = ?"
    );
    assert_eq!(sql.params, [Value::from("Alex")]);
}

#[test]
fn repeated_parameter() {
    let customer = Table::new("Customer");
    let t = TableRef::new(&customer);
    let name = ParamRef::new();

    let stmt: Statement = Select::new(&t)
        .column(t.col("Id"))
        .filter(Expr::or(
            Expr::eq(t.col("FirstName"), &name),
            Expr::eq(t.col("LastName"), &name),
        ))
        .into();

    let mut bindings = Bindings::new();
    bindings.param(&name, "Lee");

    let options = Options::default().quote_identifiers(false);

    let postgresql = Compiler::postgresql().with_options(options.clone());
    let sql = render(&postgresql, stmt.clone(), &bindings);
    assert_eq!(
        sql.text,
        "SELECT a.Id FROM Customer a WHERE a.FirstName = $1 OR a.LastName = $1"
    );
    assert_eq!(sql.params.len(), 1);

    let mysql = Compiler::mysql().with_options(options);
    let sql = render(&mysql, stmt, &bindings);
    assert_eq!(
        sql.text,
        "SELECT a.Id FROM Customer a WHERE a.FirstName = ? OR a.LastName = ?"
    );
    assert_eq!(sql.params, [Value::from("Lee"), Value::from("Lee")]);
}

#[test]
fn joins_get_distinct_aliases() {
    let customer = Table::new("Customer");
    let orders = Table::new("Orders");
    let c = TableRef::new(&customer);
    let o = TableRef::new(&orders);

    let stmt = Select::new(&c)
        .column(c.col("Name"))
        .column(o.col("Total"))
        .join(
            JoinKind::Inner,
            &o,
            Some(Expr::eq(o.col("CustomerId"), c.col("Id"))),
        );

    assert_eq!(
        text(&unquoted(Compiler::sqlite()), stmt),
        "SELECT a.Name, b.Total FROM Customer a INNER JOIN Orders b ON b.CustomerId = a.Id"
    );
}

#[test]
fn self_join() {
    let employee = Table::new("Employee");
    let e = TableRef::new(&employee);
    let manager = TableRef::new(&employee);

    let stmt = Select::new(&e)
        .column(e.col("Name"))
        .column_as(manager.col("Name"), "Manager")
        .join(
            JoinKind::Left,
            &manager,
            Some(Expr::eq(e.col("ManagerId"), manager.col("Id"))),
        );

    assert_eq!(
        text(&unquoted(Compiler::postgresql()), stmt),
        "SELECT a.Name, b.Name AS Manager FROM Employee a LEFT JOIN Employee b ON a.ManagerId = b.Id"
    );
}

#[test]
fn explicit_table_names() {
    let customer = Table::new("Customer");
    let c = TableRef::named(&customer, "cust");

    let stmt = Select::new(&c).column(c.col("Id"));

    assert_eq!(
        text(&unquoted(Compiler::sqlite()), stmt),
        "SELECT cust.Id FROM Customer cust"
    );
}

#[test]
fn disabled_aliasing_uses_table_names() {
    let customer = Table::new("Customer");
    let c = TableRef::new(&customer);

    let compiler = Compiler::sqlite().with_options(
        Options::default()
            .quote_identifiers(false)
            .table_aliasing(false),
    );

    assert_eq!(
        text(&compiler, Select::new(&c).column(c.col("Id"))),
        "SELECT Customer.Id FROM Customer"
    );
}

#[test]
fn in_subquery_aliases_continue() {
    let customer = Table::new("Customer");
    let orders = Table::new("Orders");
    let c = TableRef::new(&customer);
    let o = TableRef::new(&orders);

    let stmt = Select::new(&c).column(c.col("Id")).filter(Expr::in_subquery(
        c.col("Id"),
        Select::new(&o)
            .column(o.col("CustomerId"))
            .filter(Expr::gt(o.col("Total"), 100)),
    ));

    assert_eq!(
        text(&unquoted(Compiler::sqlite()), stmt),
        "SELECT a.Id FROM Customer a WHERE a.Id IN (SELECT b.CustomerId FROM Orders b WHERE b.Total > 100)"
    );
}

#[test]
fn correlated_exists() {
    let customer = Table::new("Customer");
    let orders = Table::new("Orders");
    let c = TableRef::new(&customer);
    let o = TableRef::new(&orders);

    let stmt = Select::new(&c).column(c.col("Id")).filter(Expr::not_exists(
        Select::new(&o)
            .column(Expr::value(1))
            .filter(Expr::eq(o.col("CustomerId"), c.col("Id"))),
    ));

    assert_eq!(
        text(&unquoted(Compiler::postgresql()), stmt),
        "SELECT a.Id FROM Customer a WHERE NOT EXISTS (SELECT 1 FROM Orders b WHERE b.CustomerId = a.Id)"
    );
}

#[test]
fn derived_table() {
    let orders = Table::new("Orders");
    let inner = TableRef::new(&orders);
    let derived = TableRef::derived(Select::new(&inner).column(inner.col("CustomerId")).into());

    let stmt = Select::new(&derived).column(derived.col("CustomerId"));

    assert_eq!(
        text(&unquoted(Compiler::sqlite()), stmt),
        "SELECT a.CustomerId FROM (SELECT b.CustomerId FROM Orders b) a"
    );
}

#[test]
fn aggregates_ordering_and_limits() {
    let orders = Table::new("Orders");
    let o = TableRef::new(&orders);

    let stmt = Query::new(
        Select::new(&o)
            .distinct()
            .column(o.col("CustomerId"))
            .column_as(Expr::count_star(), "n")
            .group_by(o.col("CustomerId"))
            .having(Expr::gt(Expr::count_star(), 2)),
    )
    .order_by(o.col("CustomerId"), Direction::Desc)
    .limit_offset(10, 20);

    assert_eq!(
        text(&unquoted(Compiler::sqlite()), stmt),
        "SELECT DISTINCT a.CustomerId, COUNT(*) AS n FROM Orders a GROUP BY a.CustomerId \
         HAVING COUNT(*) > 2 ORDER BY a.CustomerId DESC LIMIT 10 OFFSET 20"
    );
}

#[test]
fn filtered_count_is_rewritten_without_filter_support() {
    let orders = Table::new("Orders");
    let o = TableRef::new(&orders);

    let stmt: Statement = Select::new(&o)
        .column(Expr::count_filtered(Expr::gt(o.col("Total"), 10)))
        .into();

    assert_eq!(
        text(&unquoted(Compiler::sqlite()), stmt.clone()),
        "SELECT COUNT(*) FILTER (WHERE a.Total > 10) FROM Orders a"
    );

    assert_eq!(
        text(&unquoted(Compiler::mysql()), stmt),
        "SELECT COUNT(CASE WHEN a.Total > 10 THEN 1 END) FROM Orders a"
    );
}

#[test]
fn union_operands_have_their_own_scope() {
    let customer = Table::new("Customer");
    let orders = Table::new("Orders");
    let c = TableRef::new(&customer);
    let o = TableRef::new(&orders);

    let stmt = Query::new(ExprSet::union_all(vec![
        Select::new(&c).column(c.col("Id")).into(),
        Select::new(&o).column(o.col("CustomerId")).into(),
    ]));

    assert_eq!(
        text(&unquoted(Compiler::sqlite()), stmt),
        "SELECT a.Id FROM Customer a UNION ALL SELECT b.CustomerId FROM Orders b"
    );
}

#[test]
fn row_locks() {
    let customer = Table::new("Customer");
    let c = TableRef::new(&customer);

    let stmt: Statement = Query::new(Select::new(&c).column(c.col("Id")))
        .lock(Lock::Update)
        .into();

    assert_eq!(
        text(&unquoted(Compiler::mysql()), stmt.clone()),
        "SELECT a.Id FROM Customer a FOR UPDATE"
    );

    let err = Compiler::sqlite().prepare(&stmt).unwrap_err();
    assert!(err.is_compilation());
}

#[test]
fn select_without_table() {
    let stmt: Statement = Select::values(vec![Expr::value(1)])
        .filter(Expr::eq(Expr::value(1), Expr::value(1)))
        .into();

    assert_eq!(
        text(&Compiler::sqlite(), stmt.clone()),
        "SELECT 1 WHERE 1 = 1"
    );
    assert_eq!(
        text(&Compiler::mysql(), stmt),
        "SELECT 1 FROM DUAL WHERE 1 = 1"
    );
}

#[test]
fn predicates() {
    let customer = Table::new("Customer");
    let c = TableRef::new(&customer);

    let stmt = Select::new(&c)
        .column(c.col("Id"))
        .filter(Expr::eq(c.col("Email"), Expr::null()))
        .filter(Expr::not(Expr::like(c.col("Name"), "A%")))
        .filter(Expr::or(
            Expr::eq(c.col("Tier"), 1),
            Expr::eq(c.col("Tier"), 2),
        ))
        .filter(Expr::in_list(c.col("Region"), vec![]))
        .filter(Expr::eq(c.col("Active"), true));

    assert_eq!(
        text(&unquoted(Compiler::sqlite()), stmt),
        "SELECT a.Id FROM Customer a WHERE a.Email IS NULL AND NOT (a.Name LIKE 'A%') \
         AND (a.Tier = 1 OR a.Tier = 2) AND 1 = 0 AND a.Active = 1"
    );
}

#[test]
fn function_calls_and_literals() {
    let customer = Table::new("Customer");
    let c = TableRef::new(&customer);

    let stmt = Select::new(&c)
        .column(Expr::call("lower", vec![c.col("Name")]))
        .filter(Expr::in_list(c.col("Name"), vec!["O'Brien".into(), "Lee".into()]));

    assert_eq!(
        text(&unquoted(Compiler::postgresql()), stmt),
        "SELECT lower(a.Name) FROM Customer a WHERE a.Name IN ('O''Brien', 'Lee')"
    );
}
