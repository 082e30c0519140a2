use crate::engine::scoring::ScoringPolicy;
use crate::model::element::StrategicElement;
use crate::model::strategy_path::StrategyPath;

pub fn way_description(end: &StrategicElement, means: &StrategicElement) -> String {
    format!("Apply '{}' to achieve '{}'", means.name(), end.name())
}

/// One path per (end, means) pair, ends outer and means inner.
///
/// Returns an empty vec when either side is empty; the policy is not consulted.
pub fn generate_paths<'a>(
    ends: &[&'a StrategicElement],
    means_list: &[&'a StrategicElement],
    scoring: &mut dyn ScoringPolicy,
) -> Vec<StrategyPath<'a>> {
    let mut paths = Vec::with_capacity(ends.len() * means_list.len());

    for &end in ends {
        for &means in means_list {
            let scores = scoring.score(end, means);
            let way = way_description(end, means);
            paths.push(StrategyPath::new(end, means, way, scores));
        }
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scoring::{FixedScoring, RandomScoring, RISK_RANGE, UTILITY_RANGE};
    use crate::model::element::ElementCategory;
    use crate::model::strategy_path::Scores;
    use serde_json::Map;

    fn el(name: &str, category: ElementCategory) -> StrategicElement {
        StrategicElement::new(name, category, Map::new())
    }

    fn numbered(prefix: &str, count: usize, category: ElementCategory) -> Vec<StrategicElement> {
        (0..count)
            .map(|i| el(&format!("{prefix}{}", i + 1), category))
            .collect()
    }

    #[test]
    fn test_single_pair_way_text() {
        let end = el("Carbon Neutrality", ElementCategory::End);
        let means = el("Solar Subsidies", ElementCategory::Means);
        let mut scoring = FixedScoring(Scores::new(0.2, 0.8));

        let paths = generate_paths(&[&end], &[&means], &mut scoring);
        assert_eq!(paths.len(), 1);
        assert_eq!(
            paths[0].way,
            "Apply 'Solar Subsidies' to achieve 'Carbon Neutrality'"
        );
        assert_eq!(paths[0].risk_score, 0.2);
        assert_eq!(paths[0].utility_score, 0.8);
        assert!(std::ptr::eq(paths[0].end, &end));
        assert!(std::ptr::eq(paths[0].means, &means));
    }

    #[test]
    fn test_cartesian_product_order_and_size() {
        let ends = numbered("E", 3, ElementCategory::End);
        let means = numbered("M", 2, ElementCategory::Means);
        let end_refs: Vec<&StrategicElement> = ends.iter().collect();
        let means_refs: Vec<&StrategicElement> = means.iter().collect();

        let mut scoring = RandomScoring::seeded(1);
        let paths = generate_paths(&end_refs, &means_refs, &mut scoring);

        assert_eq!(paths.len(), 6);
        let pairs: Vec<(&str, &str)> = paths
            .iter()
            .map(|p| (p.end.name(), p.means.name()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("E1", "M1"),
                ("E1", "M2"),
                ("E2", "M1"),
                ("E2", "M2"),
                ("E3", "M1"),
                ("E3", "M2"),
            ]
        );
        for p in &paths {
            assert!(RISK_RANGE.contains(&p.risk_score));
            assert!(UTILITY_RANGE.contains(&p.utility_score));
        }
    }

    #[test]
    fn test_sizes_multiply_for_many_shapes() {
        let mut scoring = RandomScoring::seeded(99);
        for m in 1..5 {
            for n in 1..5 {
                let ends = numbered("E", m, ElementCategory::End);
                let means = numbered("M", n, ElementCategory::Means);
                let end_refs: Vec<_> = ends.iter().collect();
                let means_refs: Vec<_> = means.iter().collect();
                let paths = generate_paths(&end_refs, &means_refs, &mut scoring);
                assert_eq!(paths.len(), m * n);
            }
        }
    }

    #[test]
    fn test_empty_side_yields_nothing_and_skips_scoring() {
        let end = el("Carbon Neutrality", ElementCategory::End);
        let mut calls = 0;
        let mut scoring = |_: &StrategicElement, _: &StrategicElement| {
            calls += 1;
            Scores::new(0.1, 0.9)
        };

        assert!(generate_paths(&[&end], &[], &mut scoring).is_empty());
        assert!(generate_paths(&[], &[&end], &mut scoring).is_empty());
        assert_eq!(calls, 0);
    }
}
