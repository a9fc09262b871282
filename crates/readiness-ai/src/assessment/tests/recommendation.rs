use crate::assessment::domain::ServiceArea;
use crate::assessment::recommendation::{
    recommendations_for_scores, recommended_actions, Priority, ReadinessTier,
};
use crate::assessment::scoring::ServiceAreaScores;

#[test]
fn every_score_maps_to_exactly_one_tier() {
    for score in 0..=100u8 {
        let tier = ReadinessTier::for_score(score);
        let expected = match score {
            0..=25 => ReadinessTier::Basic,
            26..=50 => ReadinessTier::Developing,
            51..=75 => ReadinessTier::Advanced,
            _ => ReadinessTier::Expert,
        };
        assert_eq!(tier, expected, "score {score}");
    }
}

#[test]
fn range_boundaries_belong_to_the_lower_range() {
    assert_eq!(ReadinessTier::for_score(25), ReadinessTier::Basic);
    assert_eq!(ReadinessTier::for_score(26), ReadinessTier::Developing);
    assert_eq!(ReadinessTier::for_score(50), ReadinessTier::Developing);
    assert_eq!(ReadinessTier::for_score(51), ReadinessTier::Advanced);
    assert_eq!(ReadinessTier::for_score(75), ReadinessTier::Advanced);
    assert_eq!(ReadinessTier::for_score(76), ReadinessTier::Expert);
}

#[test]
fn tiers_map_deterministically_to_priorities() {
    assert_eq!(ReadinessTier::Basic.priority(), Priority::Low);
    assert_eq!(ReadinessTier::Developing.priority(), Priority::Medium);
    assert_eq!(ReadinessTier::Advanced.priority(), Priority::High);
    assert_eq!(ReadinessTier::Expert.priority(), Priority::VeryHigh);
}

#[test]
fn every_area_and_tier_carries_four_actions() {
    for area in ServiceArea::ordered() {
        for tier in [
            ReadinessTier::Basic,
            ReadinessTier::Developing,
            ReadinessTier::Advanced,
            ReadinessTier::Expert,
        ] {
            let actions = recommended_actions(area, tier);
            assert_eq!(actions.len(), 4);
            assert!(actions.iter().all(|action| !action.is_empty()));
        }
    }
}

#[test]
fn recommendations_carry_scores_and_labels() {
    let scores = ServiceAreaScores {
        marketing_sales: 10,
        customer_service: 30,
        business_process: 60,
        data_analytics: 90,
    };

    let recommendations = recommendations_for_scores(&scores);
    assert_eq!(recommendations.len(), 4);

    let marketing = &recommendations[&ServiceArea::MarketingSales];
    assert_eq!(marketing.score, 10);
    assert_eq!(marketing.level, ReadinessTier::Basic);
    assert_eq!(marketing.priority, Priority::Low);
    assert_eq!(marketing.area_name, "Marketing & Sales AI Solutions");
    assert_eq!(
        marketing.recommendations[0],
        "Start with basic email marketing automation"
    );

    let analytics = &recommendations[&ServiceArea::DataAnalytics];
    assert_eq!(analytics.level, ReadinessTier::Expert);
    assert_eq!(analytics.priority, Priority::VeryHigh);
}

#[test]
fn priority_serializes_with_spaced_label() {
    let json = serde_json::to_string(&Priority::VeryHigh).expect("serialize priority");
    assert_eq!(json, "\"Very High\"");
    let json = serde_json::to_string(&ReadinessTier::Developing).expect("serialize tier");
    assert_eq!(json, "\"Developing\"");
}
