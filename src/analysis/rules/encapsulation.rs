use super::RuleContext;
use crate::graph::UnitId;
use crate::model::{SliceIdentifier, Violation};

/// Non-public parts of different modules must not reference each other.
pub fn check_slice_encapsulation(ctx: &RuleContext<'_>, source: UnitId) -> Vec<Violation> {
    let SliceIdentifier::Named(source_module) = &ctx.table.get(source).slice else {
        return Vec::new();
    };

    ctx.graph
        .dependencies(source)
        .filter_map(|target| match &ctx.table.get(target).slice {
            SliceIdentifier::Named(target_module) if target_module != source_module => {
                Some(Violation::slice_encapsulation(
                    ctx.name(source),
                    source_module,
                    ctx.name(target),
                    target_module,
                ))
            }
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::{Rule, RuleContext, fixtures};
    use crate::model::RuleKind;

    #[test]
    fn test_same_slice_is_allowed() {
        let (graph, table) = fixtures::build(&[
            ("app.modules.a.domain.Order", &["app.modules.A.persistence.OrderRepo"]),
            ("app.modules.A.persistence.OrderRepo", &[]),
        ]);
        let ctx = RuleContext::new(&graph, &table);
        assert!(Rule::SliceEncapsulation.check(&ctx).is_empty());
    }

    #[test]
    fn test_cross_slice_edge_fires_once() {
        let (graph, table) = fixtures::build(&[
            ("app.modules.a.internal.Bar", &["app.modules.b.internal.Baz"]),
            ("app.modules.b.internal.Baz", &[]),
        ]);
        let ctx = RuleContext::new(&graph, &table);
        let violations = Rule::SliceEncapsulation.check(&ctx);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, RuleKind::SliceEncapsulation);
        assert_eq!(violations[0].source, "app.modules.a.internal.Bar");
        assert_eq!(violations[0].target, "app.modules.b.internal.Baz");
    }

    #[test]
    fn test_ignored_endpoints_are_exempt() {
        let (graph, table) = fixtures::build(&[
            ("app.modules.a.api.Foo", &["app.modules.b.internal.Baz"]),
            ("app.modules.a.internal.Bar", &["app.modules.b.api.Port", "app.Main"]),
            ("app.modules.b.internal.Baz", &[]),
            ("app.modules.b.api.Port", &[]),
            ("app.Main", &["app.modules.b.internal.Baz"]),
        ]);
        let ctx = RuleContext::new(&graph, &table);
        assert!(Rule::SliceEncapsulation.check(&ctx).is_empty());
    }
}
