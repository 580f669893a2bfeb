use by_address::ByAddress;
use std::sync::Arc;

/// A logical database (catalog). The physical name is resolved at bind time.
#[derive(Debug)]
pub struct Catalog {
    pub name: String,
}

/// A logical schema, optionally qualified by a catalog. The physical name is
/// resolved at bind time.
#[derive(Debug)]
pub struct Schema {
    pub name: String,
    pub catalog: Option<CatalogRef>,
}

/// Identity handle to a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogRef(ByAddress<Arc<Catalog>>);

/// Identity handle to a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaRef(ByAddress<Arc<Schema>>);

impl Catalog {
    pub fn new(name: impl Into<String>) -> CatalogRef {
        CatalogRef(ByAddress(Arc::new(Catalog { name: name.into() })))
    }
}

impl Schema {
    pub fn new(name: impl Into<String>) -> SchemaRef {
        SchemaRef(ByAddress(Arc::new(Schema {
            name: name.into(),
            catalog: None,
        })))
    }

    pub fn in_catalog(name: impl Into<String>, catalog: &CatalogRef) -> SchemaRef {
        SchemaRef(ByAddress(Arc::new(Schema {
            name: name.into(),
            catalog: Some(catalog.clone()),
        })))
    }
}

impl core::ops::Deref for CatalogRef {
    type Target = Catalog;

    fn deref(&self) -> &Catalog {
        &self.0
    }
}

impl core::ops::Deref for SchemaRef {
    type Target = Schema;

    fn deref(&self) -> &Schema {
        &self.0
    }
}
