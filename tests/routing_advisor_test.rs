use docroute::application::services::RoutingAdvisor;
use docroute::domain::ConfidenceLevel;

#[test]
fn given_confidence_values_when_labelling_then_uses_threshold_bands() {
    let advisor = RoutingAdvisor::default();

    assert_eq!(advisor.confidence_level(1.0), ConfidenceLevel::High);
    assert_eq!(advisor.confidence_level(0.8), ConfidenceLevel::High);
    assert_eq!(advisor.confidence_level(0.79), ConfidenceLevel::Medium);
    assert_eq!(advisor.confidence_level(0.6), ConfidenceLevel::Medium);
    assert_eq!(advisor.confidence_level(0.59), ConfidenceLevel::Low);
    assert_eq!(advisor.confidence_level(0.0), ConfidenceLevel::Low);
}

#[test]
fn given_high_routing_confidence_when_recommending_then_automatic_routing() {
    let advisor = RoutingAdvisor::default();

    assert_eq!(
        advisor.routing_recommendation("finance", 0.9),
        "Recommended for automatic routing to Finance Department"
    );
}

#[test]
fn given_medium_routing_confidence_when_recommending_then_suggests_manual_review() {
    let advisor = RoutingAdvisor::default();

    assert_eq!(
        advisor.routing_recommendation("legal", 0.7),
        "Suggested routing to Legal Department (manual review recommended)"
    );
}

#[test]
fn given_low_routing_confidence_when_recommending_then_requires_manual_review() {
    let advisor = RoutingAdvisor::default();

    assert_eq!(
        advisor.routing_recommendation("operations", 0.2),
        "Manual review required - suggested department: Operations Department"
    );
}

#[test]
fn given_unknown_department_when_recommending_then_uses_general_administration() {
    let advisor = RoutingAdvisor::default();

    assert_eq!(
        advisor.routing_recommendation("marketing", 0.95),
        "Recommended for automatic routing to General Administration"
    );
}

#[test]
fn given_same_inputs_when_recommending_twice_then_output_is_identical() {
    let advisor = RoutingAdvisor::default();

    for department in ["finance", "procurement", "legal", "operations", "general", "x"] {
        for confidence in [0.1, 0.6, 0.85] {
            assert_eq!(
                advisor.routing_recommendation(department, confidence),
                advisor.routing_recommendation(department, confidence)
            );
        }
    }
}

#[test]
fn given_custom_thresholds_when_labelling_then_bands_follow_configuration() {
    let advisor = RoutingAdvisor::new(0.9, 0.5);

    assert_eq!(advisor.confidence_level(0.85), ConfidenceLevel::Medium);
    assert_eq!(advisor.confidence_level(0.5), ConfidenceLevel::Medium);
    assert_eq!(advisor.confidence_level(0.45), ConfidenceLevel::Low);
    assert!(
        advisor
            .routing_recommendation("procurement", 0.85)
            .starts_with("Suggested routing to Procurement Department")
    );
}
