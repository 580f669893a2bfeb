use pretty_assertions::assert_eq;
use stencil::{
    stmt::{Expr, ParamRef, Select, Statement, Table, TableRef, Value},
    Bindings, CacheStats, Engine, Fingerprint, Flavor, Options, TemplateCache,
};

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct CustomerByName {
    name: ParamRef,
}

impl CustomerByName {
    fn new() -> CustomerByName {
        CustomerByName {
            name: ParamRef::new(),
        }
    }

    fn key() -> Fingerprint {
        Fingerprint::of("customer_by_name")
    }

    fn statement(&self) -> Statement {
        let customer = Table::new("Customer");
        let c = TableRef::new(&customer);

        Select::new(&c)
            .column(c.col("Id"))
            .filter(Expr::eq(c.col("Name"), &self.name))
            .into()
    }

    fn bindings(&self, name: &str) -> Bindings {
        let mut bindings = Bindings::new();
        bindings.param(&self.name, name);
        bindings
    }
}

#[test]
fn builder_requires_a_flavor() {
    let err = Engine::builder().build().unwrap_err();
    assert_eq!(err.to_string(), "no SQL flavor configured");
}

#[test]
fn prepare_once_bind_many() {
    init_logging();

    let engine = Engine::builder()
        .flavor(Flavor::Postgresql)
        .build()
        .unwrap();
    let query = CustomerByName::new();

    for name in ["Alex", "Sam"] {
        let sql = engine
            .render(&CustomerByName::key(), || query.statement(), &query.bindings(name))
            .unwrap();

        assert_eq!(
            sql.text,
            r#"SELECT "a"."Id" FROM "Customer" "a" WHERE "a"."Name" = $1"#
        );
        assert_eq!(sql.params, [Value::from(name)]);
    }

    assert_eq!(engine.cache().stats(), CacheStats { hits: 1, misses: 1 });
    assert_eq!(engine.cache().len(), 1);
}

#[test]
fn engines_share_an_injected_cache() {
    let cache = Arc::new(TemplateCache::new());

    let first = Engine::builder()
        .flavor(Flavor::Sqlite)
        .cache(cache.clone())
        .build()
        .unwrap();
    let second = Engine::builder()
        .flavor(Flavor::Sqlite)
        .options(Options::default().quote_identifiers(false))
        .cache(cache.clone())
        .build()
        .unwrap();

    let query = CustomerByName::new();
    first
        .prepare(&CustomerByName::key(), || query.statement())
        .unwrap();

    // The key identifies the template, whichever engine asks
    let template = second
        .prepare(&CustomerByName::key(), || unreachable!())
        .unwrap();
    let sql = template.bind(&query.bindings("Alex")).unwrap();
    assert_eq!(
        sql.text,
        r#"SELECT "a"."Id" FROM "Customer" "a" WHERE "a"."Name" = ?1"#
    );
    assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
}

#[test]
fn concurrent_first_use_compiles_once() {
    init_logging();

    let engine = Engine::builder().flavor(Flavor::Mysql).build().unwrap();
    let query = CustomerByName::new();
    let compilations = AtomicUsize::new(0);

    let rendered: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let engine = &engine;
                let query = &query;
                let compilations = &compilations;

                s.spawn(move || {
                    let name = format!("user{i}");
                    engine
                        .render(
                            &CustomerByName::key(),
                            || {
                                compilations.fetch_add(1, Ordering::SeqCst);
                                query.statement()
                            },
                            &query.bindings(&name),
                        )
                        .unwrap()
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(compilations.load(Ordering::SeqCst), 1);
    assert_eq!(engine.cache().stats(), CacheStats { hits: 7, misses: 1 });

    for (i, sql) in rendered.iter().enumerate() {
        assert_eq!(
            sql.text,
            "SELECT `a`.`Id` FROM `Customer` `a` WHERE `a`.`Name` = ?"
        );
        assert_eq!(sql.params, [Value::from(format!("user{i}"))]);
    }
}

#[test]
fn failed_compilation_is_retried() {
    let engine = Engine::builder().flavor(Flavor::Mysql).build().unwrap();
    let key = Fingerprint(42);

    let customer = Table::new("Customer");
    let c = TableRef::new(&customer);

    let err = engine
        .prepare(&key, || Select::new(&c).into())
        .unwrap_err();
    assert!(err.is_invalid_statement());
    assert!(engine.cache().is_empty());

    engine
        .prepare(&key, || Select::new(&c).column(c.col("Id")).into())
        .unwrap();
    assert_eq!(engine.cache().len(), 1);
    assert_eq!(engine.cache().stats().misses, 2);
}

#[test]
fn collections_bind_per_execution() {
    let engine = Engine::builder()
        .flavor(Flavor::Sqlite)
        .options(Options::default().quote_identifiers(false))
        .build()
        .unwrap();

    let build = || -> Statement {
        let customer = Table::new("Customer");
        let c = TableRef::new(&customer);
        Select::new(&c)
            .column(c.col("Id"))
            .filter(Expr::in_collection(c.col("Id"), "ids"))
            .into()
    };

    let key = Fingerprint::of("customers_by_id");

    let mut bindings = Bindings::new();
    bindings.cycle_values("ids", [[Value::from(1)], [Value::from(2)]]);

    let sql = engine.render(&key, build, &bindings).unwrap();
    assert_eq!(sql.text, "SELECT a.Id FROM Customer a WHERE a.Id IN (?1, ?2)");

    let sql = engine.render(&key, build, &Bindings::new()).unwrap();
    assert_eq!(
        sql.text,
        "SELECT a.Id FROM Customer a WHERE a.Id IN (SELECT NULL WHERE 1 = 0)"
    );
}
