use super::RuleContext;
use crate::graph::UnitId;
use crate::model::{Layer, Violation};

/// A module's public surface may reach its own internals, never another module's.
pub fn check_cross_module_internals(ctx: &RuleContext<'_>, source: UnitId) -> Vec<Violation> {
    let from = ctx.table.get(source);
    let (Layer::PublicModule, Some(source_module)) = (from.layer, from.module()) else {
        return Vec::new();
    };

    ctx.graph
        .dependencies(source)
        .filter_map(|target| {
            let to = ctx.table.get(target);
            match (to.layer, to.module()) {
                (Layer::NonPublicModule, Some(target_module)) if target_module != source_module => {
                    Some(Violation::cross_module_internals(
                        ctx.name(source),
                        source_module,
                        ctx.name(target),
                        target_module,
                    ))
                }
                _ => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::{Rule, RuleContext, fixtures};

    #[test]
    fn test_own_internals_are_allowed() {
        let (graph, table) = fixtures::build(&[
            ("app.modules.a.api.Foo", &["app.modules.a.internal.Bar"]),
            ("app.modules.a.configuration.Wiring", &["app.modules.A.internal.Bar"]),
            ("app.modules.A.internal.Bar", &[]),
            ("app.modules.a.internal.Bar", &[]),
        ]);
        assert!(Rule::CrossModuleInternals.check(&RuleContext::new(&graph, &table)).is_empty());
    }

    #[test]
    fn test_other_module_internals_fire_once() {
        let (graph, table) = fixtures::build(&[
            ("app.modules.a.api.Foo", &["app.modules.b.internal.Baz", "app.modules.b.api.Port"]),
            ("app.modules.b.internal.Baz", &[]),
            ("app.modules.b.api.Port", &[]),
        ]);
        let violations = Rule::CrossModuleInternals.check(&RuleContext::new(&graph, &table));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].target, "app.modules.b.internal.Baz");
        assert!(violations[0].message.contains("module 'a'"));
        assert!(violations[0].message.contains("module 'b'"));
    }

    #[test]
    fn test_only_public_sources_are_checked() {
        let (graph, table) = fixtures::build(&[
            ("app.Main", &["app.modules.b.internal.Baz"]),
            ("app.modules.b.internal.Baz", &[]),
        ]);
        assert!(Rule::CrossModuleInternals.check(&RuleContext::new(&graph, &table)).is_empty());
    }
}
