use stencil_core::stmt::{Key, ParamRef, TypeRef, Value};

use std::collections::{HashMap, HashSet};

/// Everything a template needs to render for one execution.
#[derive(Debug, Default, Clone)]
pub struct Bindings {
    params: HashMap<ParamRef, Value>,
    values: HashMap<Key, String>,
    alternatives: HashSet<Key>,
    cycles: HashMap<Key, Vec<Vec<CycleItem>>>,
    type_ids: TypeIdRegistry,
    names: NameMapping,
}

/// One value of a cycle row.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleItem {
    /// SQL text substituted verbatim
    Inline(String),

    /// A value bound as a parameter
    Param(Value),
}

/// Numeric ids of persistent types for the current execution.
#[derive(Debug, Default, Clone)]
pub struct TypeIdRegistry {
    ids: HashMap<TypeRef, i64>,
}

/// Maps logical schema and catalog names to physical ones.
///
/// Unmapped names pass through. Mapping a name to the empty string drops
/// that qualification from the rendered SQL.
#[derive(Debug, Default, Clone)]
pub struct NameMapping {
    schemas: HashMap<String, String>,
    catalogs: HashMap<String, String>,
}

impl Bindings {
    pub fn new() -> Bindings {
        Bindings::default()
    }

    pub fn param(&mut self, param: &ParamRef, value: impl Into<Value>) -> &mut Self {
        self.params.insert(param.clone(), value.into());
        self
    }

    /// Text substituted for the inline placeholder `key`.
    pub fn value(&mut self, key: impl Into<Key>, text: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), text.into());
        self
    }

    /// Selects the alternative branch of every variant keyed by `key`.
    pub fn alternative(&mut self, key: impl Into<Key>) -> &mut Self {
        self.alternatives.insert(key.into());
        self
    }

    /// Rows for the cycle keyed by `key`.
    pub fn cycle<R, I>(&mut self, key: impl Into<Key>, rows: R) -> &mut Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = CycleItem>,
    {
        let rows = rows.into_iter().map(|row| row.into_iter().collect()).collect();
        self.cycles.insert(key.into(), rows);
        self
    }

    /// Rows for the cycle keyed by `key`, every value bound as a parameter.
    pub fn cycle_values<R, I>(&mut self, key: impl Into<Key>, rows: R) -> &mut Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = Value>,
    {
        self.cycle(
            key,
            rows.into_iter()
                .map(|row| row.into_iter().map(CycleItem::Param)),
        )
    }

    pub fn type_ids(&mut self, registry: TypeIdRegistry) -> &mut Self {
        self.type_ids = registry;
        self
    }

    pub fn names(&mut self, names: NameMapping) -> &mut Self {
        self.names = names;
        self
    }

    pub(crate) fn get_param(&self, param: &ParamRef) -> Option<&Value> {
        self.params.get(param)
    }

    pub(crate) fn get_value(&self, key: &Key) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub(crate) fn is_alternative(&self, key: &Key) -> bool {
        self.alternatives.contains(key)
    }

    pub(crate) fn get_cycle(&self, key: &Key) -> &[Vec<CycleItem>] {
        self.cycles.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn type_id_registry(&self) -> &TypeIdRegistry {
        &self.type_ids
    }

    pub(crate) fn name_mapping(&self) -> &NameMapping {
        &self.names
    }
}

impl CycleItem {
    pub fn inline(text: impl Into<String>) -> CycleItem {
        CycleItem::Inline(text.into())
    }

    pub fn param(value: impl Into<Value>) -> CycleItem {
        CycleItem::Param(value.into())
    }
}

impl From<Value> for CycleItem {
    fn from(value: Value) -> Self {
        CycleItem::Param(value)
    }
}

impl TypeIdRegistry {
    pub fn new() -> TypeIdRegistry {
        TypeIdRegistry::default()
    }

    pub fn register(&mut self, ty: &TypeRef, id: i64) -> &mut Self {
        self.ids.insert(ty.clone(), id);
        self
    }

    pub fn get(&self, ty: &TypeRef) -> Option<i64> {
        self.ids.get(ty).copied()
    }
}

impl NameMapping {
    pub fn new() -> NameMapping {
        NameMapping::default()
    }

    pub fn map_schema(&mut self, logical: impl Into<String>, physical: impl Into<String>) -> &mut Self {
        self.schemas.insert(logical.into(), physical.into());
        self
    }

    pub fn map_catalog(
        &mut self,
        logical: impl Into<String>,
        physical: impl Into<String>,
    ) -> &mut Self {
        self.catalogs.insert(logical.into(), physical.into());
        self
    }

    pub fn schema<'a>(&'a self, logical: &'a str) -> &'a str {
        self.schemas.get(logical).map_or(logical, String::as_str)
    }

    pub fn catalog<'a>(&'a self, logical: &'a str) -> &'a str {
        self.catalogs.get(logical).map_or(logical, String::as_str)
    }
}
