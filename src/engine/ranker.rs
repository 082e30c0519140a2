use crate::model::strategy_path::StrategyPath;

/// Sort by utility minus risk, highest first. Stable, so ties keep input order.
pub fn rank_paths<'a>(paths: &[StrategyPath<'a>]) -> Vec<StrategyPath<'a>> {
    let mut ranked = paths.to_vec();
    ranked.sort_by(|a, b| b.net_value().total_cmp(&a.net_value()));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::path_generator::generate_paths;
    use crate::engine::scoring::RandomScoring;
    use crate::model::element::{ElementCategory, StrategicElement};
    use crate::model::strategy_path::Scores;
    use serde_json::Map;

    fn el(name: &str, category: ElementCategory) -> StrategicElement {
        StrategicElement::new(name, category, Map::new())
    }

    fn path<'a>(
        end: &'a StrategicElement,
        means: &'a StrategicElement,
        risk: f64,
        utility: f64,
    ) -> StrategyPath<'a> {
        let way = format!("{} via {}", end.name(), means.name());
        StrategyPath::new(end, means, way, Scores::new(risk, utility))
    }

    fn means_names<'a>(paths: &[StrategyPath<'a>]) -> Vec<&'a str> {
        paths.iter().map(|p| p.means.name()).collect()
    }

    fn numbered(prefix: &str, count: usize, category: ElementCategory) -> Vec<StrategicElement> {
        (0..count)
            .map(|i| el(&format!("{prefix}{i}"), category))
            .collect()
    }

    fn is_descending(paths: &[StrategyPath<'_>]) -> bool {
        paths.windows(2).all(|w| w[0].net_value() >= w[1].net_value())
    }

    #[test]
    fn test_orders_by_net_value_descending() {
        let end = el("E", ElementCategory::End);
        let (m1, m2, m3) = (
            el("M1", ElementCategory::Means),
            el("M2", ElementCategory::Means),
            el("M3", ElementCategory::Means),
        );
        let paths = vec![
            path(&end, &m1, 0.5, 0.6),
            path(&end, &m2, 0.1, 0.95),
            path(&end, &m3, 0.3, 0.8),
        ];

        let ranked = rank_paths(&paths);
        assert_eq!(means_names(&ranked), vec!["M2", "M3", "M1"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let end = el("E", ElementCategory::End);
        let (a, b, c) = (
            el("A", ElementCategory::Means),
            el("B", ElementCategory::Means),
            el("C", ElementCategory::Means),
        );
        // A and C tie exactly; B is lower.
        let paths = vec![
            path(&end, &a, 0.2, 0.8),
            path(&end, &b, 0.4, 0.7),
            path(&end, &c, 0.2, 0.8),
        ];

        let ranked = rank_paths(&paths);
        assert_eq!(means_names(&ranked), vec!["A", "C", "B"]);

        let reversed: Vec<_> = paths.iter().rev().cloned().collect();
        let ranked = rank_paths(&reversed);
        assert_eq!(means_names(&ranked), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_input_untouched_and_idempotent() {
        let ends = numbered("E", 4, ElementCategory::End);
        let means = numbered("M", 5, ElementCategory::Means);
        let end_refs: Vec<_> = ends.iter().collect();
        let means_refs: Vec<_> = means.iter().collect();

        for seed in 0..25 {
            let mut scoring = RandomScoring::seeded(seed);
            let paths = generate_paths(&end_refs, &means_refs, &mut scoring);
            let before = paths.clone();

            let once = rank_paths(&paths);
            let twice = rank_paths(&once);

            assert_eq!(paths, before);
            assert_eq!(once.len(), paths.len());
            assert!(is_descending(&once));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_paths(&[]).is_empty());
    }
}
