//! Scoring scenarios and properties for the health impact engine
//!
//! Runs whole products through `compute_health_impact` and checks the
//! reference outcomes, boundaries and invariants.

use safeshelf::models::{Grade, Nutrient, Nutriments, Product, RiskLevel};
use safeshelf::{analyze_heart, compute_health_impact, parse_products};

fn with_nutrient(nutrient: Nutrient, value: f64) -> Product {
    Product {
        nutriments: Nutriments::default().with(nutrient, value),
        ..Default::default()
    }
}

fn all_zero() -> Product {
    let mut nutriments = Nutriments::default();
    for nutrient in [
        Nutrient::Sugars,
        Nutrient::SaturatedFat,
        Nutrient::Carbohydrates,
    ] {
        nutriments.set(nutrient, 0.0);
    }
    Product {
        nutriments,
        ..Default::default()
    }
}

#[test]
fn test_clean_product_scores_100() {
    let report = compute_health_impact(&all_zero());
    assert_eq!(report.score, 100);
    assert_eq!(report.grade, Grade::A);
    assert!(report.analysis.toxicity.is_empty());
    assert!(report.citations.is_empty());
    assert_eq!(report.analysis.heart.status, RiskLevel::Low);
    assert_eq!(report.analysis.metabolic.status, RiskLevel::Low);
}

#[test]
fn test_saturated_fat_boundary_is_still_a() {
    let report = compute_health_impact(&with_nutrient(Nutrient::SaturatedFat, 6.0));
    assert_eq!(report.score, 80);
    assert_eq!(report.grade, Grade::A);
    assert_eq!(report.analysis.heart.status, RiskLevel::Risk);
}

#[test]
fn test_extreme_sugar_is_grade_b() {
    let report = compute_health_impact(&with_nutrient(Nutrient::Sugars, 25.0));
    assert_eq!(report.analysis.metabolic.status, RiskLevel::Critical);
    assert_eq!(report.score, 60);
    assert_eq!(report.grade, Grade::B);
}

#[test]
fn test_hydrogenated_palm_oil_tag_binds_to_hydrogenated() {
    let product = Product {
        ingredients_tags: vec!["en:hydrogenated-palm-oil".into()],
        ..Default::default()
    };
    let report = compute_health_impact(&product);
    assert_eq!(report.analysis.toxicity.len(), 1);
    assert_eq!(report.analysis.toxicity[0].name, "HYDROGENATED");
    assert_eq!(report.score, 60);
    assert_eq!(report.analysis.heart.status, RiskLevel::Low);
}

#[test]
fn test_hydrogenated_tag_and_text_hit_both_domains() {
    let product = Product {
        ingredients_text: "Hydrogenated palm oil, sugar".into(),
        ingredients_tags: vec!["en:hydrogenated-palm-oil".into()],
        ..Default::default()
    };
    let report = compute_health_impact(&product);
    assert_eq!(report.analysis.heart.status, RiskLevel::Critical);
    assert_eq!(report.score, 20);
    assert_eq!(report.grade, Grade::D);
}

#[test]
fn test_ultra_processed_boundary_is_still_a() {
    let product = Product {
        nova_group: Some(4),
        ..Default::default()
    };
    let report = compute_health_impact(&product);
    assert_eq!(report.score, 80);
    assert_eq!(report.grade, Grade::A);
}

#[test]
fn test_salt_fallback_equivalence() {
    let derived = with_nutrient(Nutrient::Sodium, 1.0);
    let declared = with_nutrient(Nutrient::Salt, 2.5);
    assert_eq!(
        analyze_heart(&derived.nutriments, ""),
        analyze_heart(&declared.nutriments, "")
    );
    assert_eq!(compute_health_impact(&derived), compute_health_impact(&declared));
}

/// A spread of products covering every rule, alone and combined
fn corpus() -> Vec<Product> {
    let texts = ["", "maida, sugar", "whole wheat, maida", "vanaspati", "white flour, shortening"];
    let tag_sets: [&[&str]; 4] = [
        &[],
        &["en:palm-oil"],
        &["en:potassium-bromate", "en:e211-sodium-benzoate"],
        &["en:hydrogenated-oil", "en:bha", "en:titanium-dioxide", "en:sodium-nitrite"],
    ];
    let mut products = Vec::new();
    for sugar in [0.0, 11.0, 30.0] {
        for sat_fat in [0.0, 7.0] {
            for salt in [None, Some(2.0)] {
                for fiber in [None, Some(1.0), Some(10.0)] {
                    for text in texts {
                        for tags in tag_sets {
                            for nova in [None, Some(4)] {
                                let mut n = Nutriments::default()
                                    .with(Nutrient::Sugars, sugar)
                                    .with(Nutrient::SaturatedFat, sat_fat)
                                    .with(Nutrient::Carbohydrates, 50.0);
                                if let Some(s) = salt {
                                    n.set(Nutrient::Salt, s);
                                }
                                if let Some(f) = fiber {
                                    n.set(Nutrient::Fiber, f);
                                }
                                products.push(Product {
                                    nutriments: n,
                                    ingredients_text: text.to_string(),
                                    ingredients_tags: tags.iter().map(|t| t.to_string()).collect(),
                                    nova_group: nova,
                                    ..Default::default()
                                });
                            }
                        }
                    }
                }
            }
        }
    }
    products
}

#[test]
fn test_score_bounds_and_grade_consistency() {
    for product in corpus() {
        let report = compute_health_impact(&product);
        assert!(report.score <= 100);
        let expected = match report.score {
            s if s < 40 => Grade::D,
            s if s < 60 => Grade::C,
            s if s < 80 => Grade::B,
            _ => Grade::A,
        };
        assert_eq!(report.grade, expected, "{product:?}");
    }
}

#[test]
fn test_adding_a_risk_never_raises_score() {
    let risks: Vec<Box<dyn Fn(&mut Product)>> = vec![
        Box::new(|p: &mut Product| p.nutriments.set(Nutrient::Sugars, 40.0)),
        Box::new(|p: &mut Product| p.nutriments.set(Nutrient::SaturatedFat, 20.0)),
        Box::new(|p: &mut Product| p.nutriments.set(Nutrient::TransFat, 1.0)),
        Box::new(|p: &mut Product| p.nutriments.set(Nutrient::Salt, 5.0)),
        Box::new(|p: &mut Product| p.ingredients_text.push_str(", partially hydrogenated oil")),
        Box::new(|p: &mut Product| p.ingredients_tags.push("en:aspartame".into())),
        Box::new(|p: &mut Product| p.nova_group = Some(4)),
    ];
    for product in corpus().into_iter().step_by(7) {
        let before = compute_health_impact(&product).score;
        for add_risk in &risks {
            let mut riskier = product.clone();
            add_risk(&mut riskier);
            let after = compute_health_impact(&riskier).score;
            assert!(after <= before, "{before} -> {after} for {riskier:?}");
        }
    }
}

#[test]
fn test_citations_never_duplicate() {
    for product in corpus() {
        let report = compute_health_impact(&product);
        let json = serde_json::to_value(&report).unwrap();
        let cites: Vec<&str> = json["citations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c.as_str().unwrap())
            .collect();
        let mut deduped = cites.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(cites.len(), deduped.len());
    }
}

#[test]
fn test_reports_are_deterministic_across_threads() {
    let products = corpus();
    let expected: Vec<_> = products.iter().map(compute_health_impact).collect();
    let shared = &products;
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(move || shared.iter().map(compute_health_impact).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_lookup_service_envelope_end_to_end() {
    let json = r#"{
        "code": "3017620422003",
        "status": 1,
        "product": {
            "product_name": "Nutella",
            "ingredients_text": "Sugar, palm oil, hazelnuts 13%, skimmed milk powder 8.7%, fat-reduced cocoa 7.4%, emulsifier: lecithins (soya), vanillin",
            "ingredients_tags": ["en:sugar", "en:palm-oil", "en:hazelnut", "en:skimmed-milk-powder"],
            "nutriments": {
                "sugars_100g": 56.3,
                "salt_100g": 0.107,
                "saturated-fat_100g": 10.6,
                "carbohydrates_100g": 57.5
            },
            "nova_group": 4
        }
    }"#;
    let products = parse_products(json).unwrap();
    let report = compute_health_impact(&products[0]);
    // 100 - 20 heart - 40 metabolic - 20 palm - 20 nova
    assert_eq!(report.score, 0);
    assert_eq!(report.grade, Grade::D);
    assert_eq!(report.analysis.toxicity[0].name, "PALM");
    assert_eq!(report.citations.len(), 3);
}
