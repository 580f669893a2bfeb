mod builder;
pub use builder::Builder;

use crate::{Fingerprint, TemplateCache};

use stencil_core::{stmt::Statement, Result};
use stencil_sql::{Bindings, Compiler, Flavor, Params, Sql, Template};

use std::{fmt, hash::Hash, sync::Arc};

/// Prepares and binds statements for one SQL dialect.
///
/// Cloning an engine is cheap; clones share the template cache.
#[derive(Debug, Clone)]
pub struct Engine<K = Fingerprint> {
    compiler: Compiler,
    cache: Arc<TemplateCache<K>>,
}

impl Engine {
    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl<K> Engine<K>
where
    K: Hash + Eq + Clone + fmt::Debug,
{
    pub fn new(compiler: Compiler, cache: Arc<TemplateCache<K>>) -> Engine<K> {
        Engine { compiler, cache }
    }

    pub fn flavor(&self) -> Flavor {
        self.compiler.flavor()
    }

    pub fn compiler(&self) -> &Compiler {
        &self.compiler
    }

    pub fn cache(&self) -> &Arc<TemplateCache<K>> {
        &self.cache
    }

    /// Returns the compressed template for `key`.
    ///
    /// `build` is only called when the template is not cached yet, so callers
    /// can skip constructing the statement on the hot path.
    pub fn prepare<F>(&self, key: &K, build: F) -> Result<Arc<Template>>
    where
        F: FnOnce() -> Statement,
    {
        self.cache.get_or_try_insert(key, || {
            let stmt = build();
            log::debug!("preparing {} statement; key={key:?}", stmt.name());
            self.compiler.prepare(&stmt)
        })
    }

    /// Prepares the statement for `key` and binds it.
    pub fn render<F>(&self, key: &K, build: F, bindings: &Bindings) -> Result<Sql>
    where
        F: FnOnce() -> Statement,
    {
        self.prepare(key, build)?.bind(bindings)
    }

    /// Like [`Engine::render`], collecting parameter values into `params`.
    pub fn render_into<F>(
        &self,
        key: &K,
        build: F,
        bindings: &Bindings,
        params: &mut impl Params,
    ) -> Result<String>
    where
        F: FnOnce() -> Statement,
    {
        let template = self.prepare(key, build)?;
        stencil_sql::PostCompiler::new(&template, bindings).render_into(params)
    }
}
