// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use rental_insights_domain::Rental;

use crate::{TreeEnsemble, import_rentals_csv};

/// Four rentals on two cars. Rental 2 follows rental 1 and checks in 15
/// minutes late; rental 4 follows rental 3 with no recorded delay.
pub const TEST_RENTALS_CSV: &str = "\
rental_id,car_id,checkin_type,state,delay_at_checkout_in_minutes,previous_ended_rental_id,time_delta_with_previous_rental_in_minutes
1,10,mobile,ended,45.0,,
2,10,mobile,canceled,,1,30.0
3,11,connect,ended,,,
4,11,connect,ended,-5,3,120
";

/// Two stumps: engine power below 100 adds 1.0 (else 2.0), petrol adds
/// 4.0 (else 0.25).
pub const TEST_MODEL_JSON: &str = r#"{
    "base_score": 10.0,
    "trees": [
        { "nodes": [
            { "feature": "engine_power", "threshold": 100.0, "yes": 1, "no": 2 },
            { "leaf": 1.0 },
            { "leaf": 2.0 }
        ] },
        { "nodes": [
            { "feature": "fuel=petrol", "threshold": 0.5, "yes": 1, "no": 2 },
            { "leaf": 0.25 },
            { "leaf": 4.0 }
        ] }
    ]
}"#;

pub fn create_test_model() -> TreeEnsemble {
    TreeEnsemble::from_json(TEST_MODEL_JSON).unwrap()
}

pub fn create_test_rentals() -> Vec<Rental> {
    import_rentals_csv(TEST_RENTALS_CSV).unwrap()
}

/// Builds a model from a single tree given as a JSON node list.
pub fn create_single_tree_model(nodes: &str) -> Result<TreeEnsemble, crate::ModelError> {
    TreeEnsemble::from_json(&format!(
        r#"{{ "base_score": 0.0, "trees": [ {{ "nodes": {nodes} }} ] }}"#
    ))
}
