use super::Engine;
use crate::{Fingerprint, TemplateCache};

use stencil_core::{err, Result};
use stencil_sql::{Compiler, Flavor, Options};

use std::{fmt, hash::Hash, sync::Arc};

#[derive(Debug)]
pub struct Builder<K = Fingerprint> {
    /// Target dialect. Required.
    flavor: Option<Flavor>,

    options: Options,

    /// Shared with other engines when set, otherwise each build gets its own
    cache: Option<Arc<TemplateCache<K>>>,
}

impl<K> Builder<K>
where
    K: Hash + Eq + Clone + fmt::Debug,
{
    pub fn new() -> Builder<K> {
        Builder {
            flavor: None,
            options: Options::default(),
            cache: None,
        }
    }

    pub fn flavor(&mut self, flavor: Flavor) -> &mut Self {
        self.flavor = Some(flavor);
        self
    }

    pub fn options(&mut self, options: Options) -> &mut Self {
        self.options = options;
        self
    }

    /// Use `cache` instead of a private one.
    pub fn cache(&mut self, cache: Arc<TemplateCache<K>>) -> &mut Self {
        self.cache = Some(cache);
        self
    }

    pub fn build(&self) -> Result<Engine<K>> {
        let Some(flavor) = self.flavor else {
            return Err(err!("no SQL flavor configured"));
        };

        let compiler = Compiler::new(flavor).with_options(self.options.clone());
        let cache = self.cache.clone().unwrap_or_default();

        log::debug!("building engine; flavor={}", flavor.name());

        Ok(Engine::new(compiler, cache))
    }
}

impl<K> Default for Builder<K>
where
    K: Hash + Eq + Clone + fmt::Debug,
{
    fn default() -> Self {
        Builder::new()
    }
}
