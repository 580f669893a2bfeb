use pretty_assertions::assert_eq;
use stencil_sql::{
    stmt::{
        Expr, Hint, Insert, InsertSource, JoinKind, ParamRef, Schema, Select, Statement, Table,
        TableRef, Value,
    },
    Bindings, Compiler, CycleItem, Options,
};

struct Case {
    stmt: Statement,
    bindings: Vec<Bindings>,
}

fn cases() -> Vec<Case> {
    let sales = Schema::new("sales");
    let customer = Table::in_schema("Customer", &sales);
    let orders = Table::new("Orders");

    let c = TableRef::new(&customer);
    let o = TableRef::new(&orders);
    let name = ParamRef::new();

    let mut cases = vec![];

    // Joins, a subquery and a conditional hint
    {
        let inner = TableRef::new(&orders);
        let stmt = Select::new(&c)
            .column(c.col("Id"))
            .column(o.col("Total"))
            .join(JoinKind::Left, &o, Some(Expr::eq(o.col("CustomerId"), c.col("Id"))))
            .filter(Expr::and(
                Expr::eq(c.col("Name"), &name),
                Expr::in_subquery(
                    c.col("Id"),
                    Select::new(&inner).column(inner.col("CustomerId")),
                ),
            ))
            .hint(Hint::index_when(&c, "ix_name", "by_name"));

        let mut plain = Bindings::new();
        plain.param(&name, "Alex");

        let mut hinted = Bindings::new();
        hinted.param(&name, "Alex").alternative("by_name");

        cases.push(Case {
            stmt: stmt.into(),
            bindings: vec![plain, hinted],
        });
    }

    // Collections in a conjunction, with and without rows
    {
        let stmt = Select::new(&c).column(c.col("Id")).filter(Expr::and(
            Expr::in_collection(c.col("Id"), "ids"),
            Expr::matches_any(vec![c.col("Id"), c.col("Region")], "keys"),
        ));

        let mut full = Bindings::new();
        full.cycle_values("ids", [[Value::from(1)], [Value::from(2)]])
            .cycle(
                "keys",
                [[CycleItem::inline("1"), CycleItem::param("eu")]],
            );

        cases.push(Case {
            stmt: stmt.into(),
            bindings: vec![Bindings::new(), full],
        });
    }

    // Bulk insert from a collection
    {
        let stmt = Insert::new(
            &customer,
            vec!["Id", "Name"],
            InsertSource::Collection("rows".into()),
        );

        let mut rows = Bindings::new();
        rows.cycle_values(
            "rows",
            [
                [Value::from(1), Value::from("a")],
                [Value::from(2), Value::from("b")],
            ],
        );

        cases.push(Case {
            stmt: stmt.into(),
            bindings: vec![Bindings::new(), rows],
        });
    }

    cases
}

fn compilers() -> Vec<Compiler> {
    let mut compilers = vec![];

    for compiler in [Compiler::sqlite(), Compiler::postgresql(), Compiler::mysql()] {
        compilers.push(compiler.clone());
        compilers.push(compiler.with_options(Options::default().pretty(true)));
    }

    compilers
}

#[test]
fn compressed_and_raw_templates_render_identically() {
    for compiler in compilers() {
        for case in cases() {
            let raw = match compiler.compile(&case.stmt) {
                Ok(raw) => raw,
                // Dialects without index hints reject the first case
                Err(err) => {
                    assert!(err.is_compilation(), "{err}");
                    continue;
                }
            };
            let compressed = raw.compress();

            assert!(!raw.is_compressed());
            assert!(compressed.is_compressed());
            assert!(compressed.node_count() < raw.node_count());

            for bindings in &case.bindings {
                let expected = raw.bind(bindings).unwrap();
                let actual = compressed.bind(bindings).unwrap();

                assert_eq!(expected, actual, "{:?}", compiler.flavor());
            }
        }
    }
}

#[test]
fn compression_is_deterministic() {
    for compiler in compilers() {
        for case in cases() {
            let Ok(first) = compiler.prepare(&case.stmt) else {
                continue;
            };
            let second = compiler.prepare(&case.stmt).unwrap();

            assert_eq!(first.nodes(), second.nodes());
            assert_eq!(first.compress().nodes(), first.nodes());
        }
    }
}
