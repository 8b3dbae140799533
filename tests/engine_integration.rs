use hesopt::config::engine_config::{EngineSettings, PriorityWeights, SizingParameters};
use hesopt::config::system_type::SystemType;
use hesopt::core::battery_sizer::BatterySizer;
use hesopt::core::orchestrator::MultiSystemOrchestrator;
use hesopt::data::battery_catalog::BatteryCatalog;
use hesopt::data::diesel_catalog::DieselCatalog;
use hesopt::models::load_profile::LoadProfile;
use hesopt::models::system::{AnalysisRequest, ScenarioKind};

fn reference_request() -> AnalysisRequest {
    AnalysisRequest {
        load_profile: LoadProfile::flat(5.0, 20.0, 10.0, 8.0),
        solar_template: None,
        allowed_types: None,
        weights: None,
        economics: None,
    }
}

#[test]
fn full_pipeline_produces_consistent_result() {
    let batteries = BatteryCatalog::standard();
    let diesels = DieselCatalog::standard();
    let orchestrator = MultiSystemOrchestrator::new(&batteries, &diesels, EngineSettings::default());

    let result = orchestrator.analyze(&reference_request()).unwrap();

    // The recommendation is drawn from the generated candidate set and
    // dominates every alternative on the weighted score.
    assert!(result.recommended.configuration.shape_matches_type());
    for alternative in &result.alternatives {
        assert!(alternative.configuration.shape_matches_type());
        assert!(result.recommended.score >= alternative.score);
    }

    // All seven system types contribute candidates for a sane profile.
    let mut seen: Vec<SystemType> = result
        .alternatives
        .iter()
        .map(|e| e.configuration.system_type)
        .collect();
    seen.push(result.recommended.configuration.system_type);
    for ty in SystemType::all() {
        assert!(seen.contains(&ty), "no candidate for {}", ty);
    }

    // Four fixed scenarios, one per kind.
    assert_eq!(result.scenarios.len(), 4);
    for kind in ScenarioKind::all() {
        assert!(result.scenarios.iter().any(|s| s.kind == kind));
    }
}

#[test]
fn identical_requests_yield_identical_results() {
    let batteries = BatteryCatalog::standard();
    let diesels = DieselCatalog::standard();
    let orchestrator = MultiSystemOrchestrator::new(&batteries, &diesels, EngineSettings::default());

    let first = orchestrator.analyze(&reference_request()).unwrap();
    let second = orchestrator.analyze(&reference_request()).unwrap();

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn storage_sizing_covers_requested_backup() {
    // Scenario: 10 kW essential load, 8 h autonomy, 90% DOD, 95% efficiency,
    // 1.1 redundancy. Required capacity works out to 103 kWh and every
    // feasible bank must carry at least the requested backup time.
    let catalog = BatteryCatalog::standard();
    let sizer = BatterySizer::new(&catalog);
    let profile = LoadProfile::flat(5.0, 20.0, 10.0, 8.0);
    let params = SizingParameters {
        autonomy_hours: 8.0,
        depth_of_discharge_pct: 90.0,
        system_efficiency_pct: 95.0,
        redundancy_factor: 1.1,
        peak_power_factor: 1.2,
        future_expansion_pct: 0.0,
    };

    let requirements = BatterySizer::calc_requirements(&profile, &params);
    assert_eq!(requirements.required_capacity_kwh, 103.0);

    let sized = sizer.size(&profile, &params).unwrap();
    assert!(sized.recommended.backup_time_hours >= profile.backup_duration_hours);
}

#[test]
fn restricting_types_restricts_candidates() {
    let batteries = BatteryCatalog::standard();
    let diesels = DieselCatalog::standard();
    let orchestrator = MultiSystemOrchestrator::new(&batteries, &diesels, EngineSettings::default());

    let mut request = reference_request();
    request.allowed_types = Some(vec![SystemType::SolarBattery, SystemType::Solar]);
    let result = orchestrator.analyze(&request).unwrap();

    let allowed = [SystemType::SolarBattery, SystemType::Solar];
    assert!(allowed.contains(&result.recommended.configuration.system_type));
    for alternative in &result.alternatives {
        assert!(allowed.contains(&alternative.configuration.system_type));
    }
}

#[test]
fn cost_weighting_never_recommends_the_most_expensive_candidate() {
    let batteries = BatteryCatalog::standard();
    let diesels = DieselCatalog::standard();
    let orchestrator = MultiSystemOrchestrator::new(&batteries, &diesels, EngineSettings::default());

    let mut request = reference_request();
    request.weights = Some(PriorityWeights {
        cost: 0.85,
        reliability: 0.05,
        environment: 0.05,
        maintenance: 0.05,
    });
    let result = orchestrator.analyze(&request).unwrap();

    let max_cost = result
        .alternatives
        .iter()
        .map(|e| e.configuration.total_cost)
        .fold(f64::MIN, f64::max);
    assert!(result.recommended.configuration.total_cost < max_cost);
}

#[test]
fn request_roundtrips_through_json() {
    let request = reference_request();
    let json = serde_json::to_string(&request).unwrap();
    let parsed: AnalysisRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(
        parsed.load_profile.daily_consumption,
        request.load_profile.daily_consumption
    );
    assert_eq!(parsed.load_profile.hourly_consumption, request.load_profile.hourly_consumption);
}

#[test]
fn malformed_profile_fails_before_any_work() {
    let batteries = BatteryCatalog::standard();
    let diesels = DieselCatalog::standard();
    let orchestrator = MultiSystemOrchestrator::new(&batteries, &diesels, EngineSettings::default());

    let mut request = reference_request();
    request.load_profile.hourly_consumption[12] = -3.0;
    let error = orchestrator.analyze(&request).unwrap_err();
    assert!(error.to_string().contains("invalid request"));
}
