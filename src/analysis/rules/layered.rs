use super::RuleContext;
use crate::graph::UnitId;
use crate::model::{Layer, Violation};

/// Every direct edge must respect the layer access table.
///
/// Edges within one layer are allowed, except between the non-public parts of
/// two different modules.
pub fn check_layered_access(ctx: &RuleContext<'_>, source: UnitId) -> Vec<Violation> {
    let from = ctx.table.get(source);

    ctx.graph
        .dependencies(source)
        .filter_map(|target| {
            let to = ctx.table.get(target);

            let allowed = if from.layer == to.layer {
                to.layer != Layer::NonPublicModule || from.module() == to.module()
            } else {
                to.layer.may_be_accessed_by(from.layer)
            };

            (!allowed).then(|| {
                Violation::layered_access(ctx.name(source), from.layer, ctx.name(target), to.layer)
            })
        })
        .collect()
}
