//! Exercise runner showing value objects rejecting bad input.
//!
//! Each exercise feeds valid and invalid raw input to the entity builders and
//! records what happened. Cases are isolated: a rejected case is logged and
//! the run moves on to the next one. Nothing in the validation core depends
//! on this module.

use crate::entity::{Order, User, UserInput, create_order, create_user};
use crate::error::ValidationResult;
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::{Value, json};

/// Exercise number of the quantity exercise
pub const QUANTITY_EXERCISE: u8 = 2;

/// Exercise number of the user registration exercise
pub const REGISTRATION_EXERCISE: u8 = 3;

/// Whether a case produced an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Accepted,
    Rejected,
}

/// Result of running one case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub exercise: u8,
    pub case: String,
    pub verdict: Verdict,
    /// Entity JSON when accepted, `{attribute, issue}` when rejected
    pub details: Value,
}

impl Outcome {
    fn record<T: Serialize>(exercise: u8, case: &str, result: ValidationResult<T>) -> Self {
        match result {
            Ok(entity) => {
                let details = serde_json::to_value(&entity).unwrap_or_else(|e| {
                    warn!(
                        "Exercise {}: could not serialize '{}': {}",
                        exercise, case, e
                    );
                    Value::Null
                });
                info!("Exercise {}: {} accepted", exercise, case);
                Self {
                    exercise,
                    case: case.to_string(),
                    verdict: Verdict::Accepted,
                    details,
                }
            }
            Err(error) => {
                warn!(
                    "Exercise {}: {} correctly rejected: {}",
                    exercise, case, error
                );
                Self {
                    exercise,
                    case: case.to_string(),
                    verdict: Verdict::Rejected,
                    details: json!({
                        "attribute": error.attribute(),
                        "issue": error.to_string(),
                    }),
                }
            }
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.verdict == Verdict::Accepted
    }
}

/// All outcomes of a run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    outcomes: Vec<Outcome>,
}

impl Report {
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn accepted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_accepted()).count()
    }

    pub fn rejected(&self) -> usize {
        self.outcomes.len() - self.accepted()
    }

    /// Render the report as indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PricedOrder {
    order: Order,
    calculated_total: f64,
}

impl From<Order> for PricedOrder {
    fn from(order: Order) -> Self {
        Self {
            calculated_total: order.total(),
            order,
        }
    }
}

/// Orders with broken and sensible quantities.
pub fn quantity_exercise() -> Vec<Outcome> {
    debug!("Running exercise {}: quantity", QUANTITY_EXERCISE);

    let cases: [(&str, ValidationResult<Order>); 4] = [
        ("Negative quantity", create_order("Pizza", -3, 15.0)),
        ("Absurd quantity", create_order("Coffee", 50_000, 3.0)),
        (
            "Fractional quantity",
            Order::from_json(&json!({
                "itemName": "Pizza",
                "quantity": 2.5,
                "pricePerUnit": 15
            })),
        ),
        ("Reasonable order", create_order("Pizza", 3, 15.0)),
    ];

    cases
        .into_iter()
        .map(|(case, result)| {
            Outcome::record(QUANTITY_EXERCISE, case, result.map(PricedOrder::from))
        })
        .collect()
}

fn registration_form(name: &str, email: &str, phone: &str, password: &str) -> UserInput {
    UserInput {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        password: password.to_string(),
    }
}

/// Registration forms with one broken field each, plus a valid one.
pub fn registration_exercise() -> Vec<Outcome> {
    debug!(
        "Running exercise {}: user registration",
        REGISTRATION_EXERCISE
    );

    let forms = [
        (
            "Valid registration",
            registration_form(
                "Alice Dupont",
                "Alice@Example.com",
                "0612345678",
                "secret123",
            ),
        ),
        (
            "Single-letter name",
            registration_form("B", "bob@example.com", "0612345678", "secret123"),
        ),
        (
            "Email without @",
            registration_form("Alice Dupont", "not-an-email", "0612345678", "secret123"),
        ),
        (
            "Phone too short",
            registration_form("Alice Dupont", "alice@example.com", "123", "secret123"),
        ),
        (
            "Landline prefix",
            registration_form(
                "Alice Dupont",
                "alice@example.com",
                "0512345678",
                "secret123",
            ),
        ),
        (
            "Weak password",
            registration_form("Alice Dupont", "alice@example.com", "0612345678", "123"),
        ),
    ];

    let mut outcomes: Vec<Outcome> = forms
        .into_iter()
        .map(|(case, form)| Outcome::record(REGISTRATION_EXERCISE, case, create_user(form)))
        .collect();

    // Arguments shuffled and mis-typed, as a positional API would allow
    let scrambled = json!({
        "name": true,
        "email": "alice@example.com",
        "phone": "secret123",
        "password": "123-456-7890"
    });
    outcomes.push(Outcome::record(
        REGISTRATION_EXERCISE,
        "Scrambled record",
        User::from_json(&scrambled),
    ));

    outcomes
}

/// Run every exercise and collect the outcomes.
pub fn run_all() -> Report {
    let mut outcomes = quantity_exercise();
    outcomes.extend(registration_exercise());

    let report = Report { outcomes };
    info!(
        "Ran {} cases: {} accepted, {} rejected",
        report.outcomes.len(),
        report.accepted(),
        report.rejected()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdicts(outcomes: &[Outcome]) -> Vec<(&str, Verdict)> {
        outcomes
            .iter()
            .map(|o| (o.case.as_str(), o.verdict))
            .collect()
    }

    #[test]
    fn test_quantity_exercise() {
        let outcomes = quantity_exercise();
        assert_eq!(
            verdicts(&outcomes),
            vec![
                ("Negative quantity", Verdict::Rejected),
                ("Absurd quantity", Verdict::Rejected),
                ("Fractional quantity", Verdict::Rejected),
                ("Reasonable order", Verdict::Accepted),
            ]
        );
        assert_eq!(outcomes[3].details["calculatedTotal"], json!(45.0));
        assert_eq!(outcomes[0].details["attribute"], json!("quantity"));
    }

    #[test]
    fn test_registration_exercise_reports_failing_field() {
        let outcomes = registration_exercise();
        let attributes: Vec<&Value> = outcomes.iter().map(|o| &o.details["attribute"]).collect();

        assert!(outcomes[0].is_accepted());
        assert_eq!(outcomes[0].details["email"], json!("alice@example.com"));
        assert_eq!(
            attributes[1..],
            [
                &json!("name"),
                &json!("email"),
                &json!("phone"),
                &json!("phone"),
                &json!("password"),
                &json!("name"),
            ]
        );
    }

    #[test]
    fn test_rejections_do_not_stop_the_run() {
        let report = run_all();
        assert_eq!(report.outcomes().len(), 11);
        assert_eq!(report.accepted(), 2);
        assert_eq!(report.rejected(), 9);
    }

    #[test]
    fn test_report_renders_as_json() {
        let rendered = run_all().to_json_pretty().unwrap();
        assert!(rendered.contains("\"verdict\": \"rejected\""));
        assert!(!rendered.contains("secret123"));
    }
}
