//! Renders a template for one execution.

mod bindings;
pub use bindings::{Bindings, CycleItem, NameMapping, TypeIdRegistry};

mod params;
pub use params::{Ordinal, Params};

use crate::{
    layout::Spacer,
    node::{Node, PlaceholderId},
    Format, Template,
};

use stencil_core::{
    stmt::{Key, ParamRef, Value},
    BindingTarget, Error, ParamStyle, Result,
};

use std::{collections::HashMap, fmt::Write};

/// Rendered SQL and the values to bind to its parameter markers.
#[derive(Debug, Clone, PartialEq)]
pub struct Sql {
    pub text: String,
    pub params: Vec<Value>,
}

/// Binds one template to one [`Bindings`]. Consumed by rendering.
#[derive(Debug)]
pub struct PostCompiler<'a> {
    template: &'a Template,
    bindings: &'a Bindings,
}

/// The current row while a cycle body is rendered
#[derive(Clone, Copy)]
struct CycleRow<'a> {
    cycle: &'a Key,
    index: usize,
    items: &'a [CycleItem],
}

/// What a deduplicated parameter marker stands for
#[derive(Debug, PartialEq, Eq, Hash)]
enum Slot {
    Param(ParamRef),
    CycleItem {
        cycle: Key,
        row: usize,
        index: usize,
    },
}

struct Renderer<'a, P> {
    format: Format,
    bindings: &'a Bindings,
    params: &'a mut P,

    /// Ordinals already assigned, for styles that reuse them
    ordinals: HashMap<Slot, usize>,

    dst: String,
}

impl<'a> PostCompiler<'a> {
    pub fn new(template: &'a Template, bindings: &'a Bindings) -> PostCompiler<'a> {
        PostCompiler { template, bindings }
    }

    /// Renders the SQL text, pushing bound values into `params`.
    pub fn render_into(self, params: &mut impl Params) -> Result<String> {
        let format = self.template.format();
        let mut renderer = Renderer {
            format,
            bindings: self.bindings,
            params,
            ordinals: HashMap::new(),
            dst: String::with_capacity(self.template.size_hint()),
        };

        let mut spacer = Spacer::new(format.pretty);
        renderer.render(self.template.nodes(), &mut spacer, None)?;

        log::trace!("bound template; len={}", renderer.dst.len());
        Ok(renderer.dst)
    }

    pub fn finish(self) -> Result<Sql> {
        let mut params = vec![];
        let text = self.render_into(&mut params)?;
        Ok(Sql { text, params })
    }
}

impl<P: Params> Renderer<'_, P> {
    fn render(
        &mut self,
        nodes: &[Node],
        spacer: &mut Spacer,
        row: Option<CycleRow<'_>>,
    ) -> Result<()> {
        let bindings = self.bindings;

        for node in nodes {
            match node {
                Node::Text(node) => spacer.text(&mut self.dst, &node.text),
                Node::Delimiter(node) => spacer.delimiter(&mut self.dst, &node.text, node.kind),
                Node::Container(node) => {
                    spacer.enter(&mut self.dst, node.requires_indent);
                    self.render(&node.children, spacer, row)?;
                    spacer.exit(&mut self.dst, node.requires_indent);
                }
                Node::Placeholder(node) => {
                    spacer.before_opaque(&mut self.dst);
                    self.placeholder(&node.id)?;
                    spacer.after_opaque(node.id.is_prefix());
                }
                Node::Variant(node) => {
                    let branch = if bindings.is_alternative(&node.id) {
                        &node.alternative
                    } else {
                        &node.main
                    };

                    self.render(branch, &mut spacer.clone(), row)?;
                    spacer.after_opaque(false);
                }
                Node::Cycle(node) => {
                    spacer.before_opaque(&mut self.dst);

                    let rows = bindings.get_cycle(&node.id);
                    if rows.is_empty() {
                        self.render(&node.empty, &mut spacer.fresh(), row)?;
                    }

                    for (index, items) in rows.iter().enumerate() {
                        if index > 0 {
                            self.dst.push_str(&node.delimiter);
                        }

                        let current = CycleRow {
                            cycle: &node.id,
                            index,
                            items,
                        };
                        self.render(&node.body, &mut spacer.fresh(), Some(current))?;
                    }

                    spacer.after_opaque(false);
                }
                Node::CycleItem(node) => {
                    spacer.before_opaque(&mut self.dst);
                    self.cycle_item(node.index, row)?;
                    spacer.after_opaque(false);
                }
            }
        }

        Ok(())
    }

    fn placeholder(&mut self, id: &PlaceholderId) -> Result<()> {
        let bindings = self.bindings;

        match id {
            PlaceholderId::Param { param, name } => {
                let Some(value) = bindings.get_param(param) else {
                    return Err(Error::binding(BindingTarget::Param(name.to_string())));
                };

                self.marker(Slot::Param(param.clone()), name, value)?;
            }
            PlaceholderId::Value(key) => {
                let Some(text) = bindings.get_value(key) else {
                    return Err(Error::binding(BindingTarget::Value(key.to_string())));
                };

                self.dst.push_str(text);
            }
            PlaceholderId::Schema(schema) => {
                let name = bindings.name_mapping().schema(&schema.name);
                self.qualifier(name);
            }
            PlaceholderId::Catalog(catalog) => {
                let name = bindings.name_mapping().catalog(&catalog.name);
                self.qualifier(name);
            }
            PlaceholderId::TypeId(ty) => match bindings.type_id_registry().get(ty) {
                Some(id) => write!(self.dst, "{id}")?,
                // Interfaces without a concrete type match no rows
                None if ty.interface => self.dst.push('0'),
                None => return Err(Error::binding(BindingTarget::Type(ty.name.clone()))),
            },
        }

        Ok(())
    }

    fn cycle_item(&mut self, index: usize, row: Option<CycleRow<'_>>) -> Result<()> {
        let Some(row) = row else {
            return Err(Error::binding(BindingTarget::CycleItem {
                cycle: String::new(),
                index,
                width: 0,
            }));
        };

        let Some(item) = row.items.get(index) else {
            return Err(Error::binding(BindingTarget::CycleItem {
                cycle: row.cycle.to_string(),
                index,
                width: row.items.len(),
            }));
        };

        match item {
            CycleItem::Inline(text) => self.dst.push_str(text),
            CycleItem::Param(value) => {
                let name = cycle_param_name(row.cycle, row.index, index);
                let slot = Slot::CycleItem {
                    cycle: row.cycle.clone(),
                    row: row.index,
                    index,
                };
                self.marker(slot, &name, value)?;
            }
        }

        Ok(())
    }

    /// Writes `name.`, or nothing when the name is empty.
    fn qualifier(&mut self, name: &str) {
        if !name.is_empty() {
            self.format.quote.push(&mut self.dst, name);
            self.dst.push('.');
        }
    }

    fn marker(&mut self, slot: Slot, name: &str, value: &Value) -> Result<()> {
        match self.format.param_style {
            ParamStyle::Positional => {
                self.params.push(value);
                self.dst.push('?');
            }
            ParamStyle::Dollar => {
                let ordinal = self.ordinal(slot, value);
                write!(self.dst, "${ordinal}")?;
            }
            ParamStyle::QuestionNumbered => {
                let ordinal = self.ordinal(slot, value);
                write!(self.dst, "?{ordinal}")?;
            }
            ParamStyle::Named => {
                self.ordinal(slot, value);
                write!(self.dst, ":{name}")?;
            }
        }

        Ok(())
    }

    /// Pushes `value` the first time `slot` is seen and returns its ordinal.
    fn ordinal(&mut self, slot: Slot, value: &Value) -> usize {
        if let Some(ordinal) = self.ordinals.get(&slot) {
            return *ordinal;
        }

        let ordinal = self.params.push(value).0;
        self.ordinals.insert(slot, ordinal);
        ordinal
    }
}

/// `{cycle}_{row}_{column}`, with characters that cannot appear in a named
/// marker replaced by `_`.
fn cycle_param_name(cycle: &Key, row: usize, column: usize) -> String {
    let cycle: String = cycle
        .as_str()
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect();

    format!("{cycle}_{row}_{column}")
}
