use pretty_assertions::assert_eq;
use stencil_sql::{
    stmt::{
        Delete, Expr, Insert, InsertSource, ParamRef, Select, Statement, Table, TableRef, Update,
        Value,
    },
    Bindings, Compiler, CycleItem, Options, ParamStyle, Sql,
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

#[test]
fn insert_values() {
    let customer = Table::new("Customer");
    let name = ParamRef::new();

    let stmt = Insert::new(
        &customer,
        vec!["Id", "Name"],
        InsertSource::Values(vec![
            vec![1.into(), "Alex".into()],
            vec![2.into(), Expr::param(&name)],
        ]),
    );

    let mut bindings = Bindings::new();
    bindings.param(&name, "Sam");

    let sql = render(&unquoted(Compiler::sqlite()), stmt, &bindings);
    assert_eq!(
        sql.text,
        "INSERT INTO Customer (Id, Name) VALUES (1, 'Alex'), (2, :p0)"
    );
    assert_eq!(sql.params, [Value::from("Sam")]);
}

#[test]
fn insert_returning() {
    let customer = Table::new("Customer");

    let stmt: Statement = Insert::new(
        &customer,
        vec!["Name"],
        InsertSource::Values(vec![vec!["Alex".into()]]),
    )
    .returning("Id")
    .into();

    let sql = render(&Compiler::postgresql(), stmt.clone(), &Bindings::new());
    assert_eq!(
        sql.text,
        r#"INSERT INTO "Customer" ("Name") VALUES ('Alex') RETURNING "Id""#
    );

    let err = Compiler::mysql().prepare(&stmt).unwrap_err();
    assert_eq!(
        err.to_string(),
        "compilation failed: RETURNING is not supported by mysql"
    );
}

#[test]
fn insert_rows_bound_at_execution() {
    let customer = Table::new("Customer");
    let stmt: Statement = Insert::new(
        &customer,
        vec!["Id", "Name"],
        InsertSource::Collection("rows".into()),
    )
    .into();

    let template = unquoted(Compiler::sqlite()).prepare(&stmt).unwrap();

    let mut bindings = Bindings::new();
    bindings.cycle_values(
        "rows",
        vec![
            vec![Value::from(1), Value::from("a")],
            vec![Value::from(2), Value::from("b")],
        ],
    );

    let sql = template.bind(&bindings).unwrap();
    assert_eq!(
        sql.text,
        "INSERT INTO Customer (Id, Name) SELECT :rows_0_0, :rows_0_1 UNION ALL SELECT :rows_1_0, :rows_1_1"
    );
    assert_eq!(
        sql.params,
        [
            Value::from(1),
            Value::from("a"),
            Value::from(2),
            Value::from("b")
        ]
    );

    let sql = template.bind(&Bindings::new()).unwrap();
    assert_eq!(
        sql.text,
        "INSERT INTO Customer (Id, Name) SELECT NULL, NULL WHERE 1 = 0"
    );
    assert!(sql.params.is_empty());

    let sql = render(&unquoted(Compiler::mysql()), stmt, &Bindings::new());
    assert_eq!(
        sql.text,
        "INSERT INTO Customer (Id, Name) SELECT NULL, NULL FROM DUAL WHERE 1 = 0"
    );
}

#[test]
fn insert_from_query() {
    let customer = Table::new("Customer");
    let archive = Table::new("Archive");
    let c = TableRef::new(&customer);

    let stmt = Insert::new(
        &archive,
        vec!["Id"],
        InsertSource::Query(Box::new(
            Select::new(&c)
                .column(c.col("Id"))
                .filter(Expr::lt(c.col("LastSeen"), 2020))
                .into(),
        )),
    );

    let sql = render(&unquoted(Compiler::postgresql()), stmt, &Bindings::new());
    assert_eq!(
        sql.text,
        "INSERT INTO Archive (Id) SELECT a.Id FROM Customer a WHERE a.LastSeen < 2020"
    );
}

#[test]
fn insert_row_width_must_match_columns() {
    let customer = Table::new("Customer");

    let stmt: Statement = Insert::new(
        &customer,
        vec!["Id", "Name"],
        InsertSource::Values(vec![vec![1.into()]]),
    )
    .into();

    let err = Compiler::sqlite().prepare(&stmt).unwrap_err();
    assert!(err.is_invalid_statement());
    assert_eq!(
        err.to_string(),
        "invalid statement: insert row has 1 values for 2 columns"
    );
}

#[test]
fn update_uses_the_table_name() {
    let customer = Table::new("Customer");
    let t = TableRef::new(&customer);
    let name = ParamRef::new();

    let stmt: Statement = Update::new(&t)
        .set("Name", &name)
        .filter(Expr::eq(t.col("Id"), 7))
        .into();

    let mut bindings = Bindings::new();
    bindings.param(&name, "Alex");

    let sql = render(&unquoted(Compiler::sqlite()), stmt.clone(), &bindings);
    assert_eq!(sql.text, "UPDATE Customer SET Name = :p0 WHERE Id = 7");

    let sql = render(&Compiler::postgresql(), stmt, &bindings);
    assert_eq!(
        sql.text,
        r#"UPDATE "Customer" SET "Name" = $1 WHERE "Id" = 7"#
    );
    assert_eq!(sql.params, [Value::from("Alex")]);
}

#[test]
fn update_with_correlated_subquery() {
    let customer = Table::new("Customer");
    let orders = Table::new("Orders");
    let t = TableRef::new(&customer);
    let o = TableRef::new(&orders);

    let stmt = Update::new(&t)
        .set("Active", false)
        .filter(Expr::not_exists(
            Select::new(&o)
                .column(o.col("Id"))
                .filter(Expr::eq(o.col("CustomerId"), t.col("Id"))),
        ));

    let sql = render(&unquoted(Compiler::postgresql()), stmt, &Bindings::new());
    assert_eq!(
        sql.text,
        "UPDATE Customer SET Active = FALSE WHERE NOT EXISTS \
         (SELECT a.Id FROM Orders a WHERE a.CustomerId = Customer.Id)"
    );
}

#[test]
fn delete_with_returning() {
    let customer = Table::new("Customer");
    let t = TableRef::new(&customer);

    let stmt = Delete::new(&t)
        .filter(Expr::eq(t.col("Id"), 1))
        .returning(t.col("Id"));

    let sql = render(&unquoted(Compiler::sqlite()), stmt, &Bindings::new());
    assert_eq!(sql.text, "DELETE FROM Customer WHERE Id = 1 RETURNING Id");
}

#[test]
fn delete_matching_a_collection() {
    let customer = Table::new("Customer");
    let t = TableRef::new(&customer);

    let stmt: Statement = Delete::new(&t)
        .filter(Expr::matches_any(vec![t.col("Id")], "ids"))
        .into();

    let template = unquoted(Compiler::sqlite()).prepare(&stmt).unwrap();

    let sql = template.bind(&Bindings::new()).unwrap();
    assert_eq!(sql.text, "DELETE FROM Customer WHERE 1 = 0");

    let mut bindings = Bindings::new();
    bindings.cycle(
        "ids",
        ["1", "2", "3"].map(|id| [CycleItem::inline(id)]),
    );

    let sql = template.bind(&bindings).unwrap();
    assert_eq!(sql.text, "DELETE FROM Customer WHERE Id = 1 OR Id = 2 OR Id = 3");
    assert!(sql.params.is_empty());
}

#[test]
fn update_requires_assignments() {
    let customer = Table::new("Customer");
    let t = TableRef::new(&customer);

    let err = Compiler::sqlite()
        .prepare(&Update::new(&t).into())
        .unwrap_err();
    assert!(err.is_invalid_statement());
}
