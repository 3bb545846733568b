use serde::{Deserialize, Serialize};

/// A billing tier offered on the plan-selection screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Monthly price in dollars.
    #[serde(default)]
    pub price: f64,
    /// Invoices per month; `None` means unlimited.
    #[serde(default)]
    pub invoice_limit: Option<u32>,
}

impl Plan {
    pub fn price_label(&self) -> String {
        if self.price <= 0.0 {
            "Free".to_string()
        } else {
            format!("${:.2} / month", self.price)
        }
    }

    pub fn limit_label(&self) -> String {
        match self.invoice_limit {
            Some(1) => "1 invoice per month".to_string(),
            Some(n) => format!("{n} invoices per month"),
            None => "Unlimited invoices".to_string(),
        }
    }
}

/// Payload for `POST /users/me/plan`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignPlanRequest {
    pub plan_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(price: f64, invoice_limit: Option<u32>) -> Plan {
        Plan {
            id: "basic".to_string(),
            name: "Basic".to_string(),
            description: None,
            price,
            invoice_limit,
        }
    }

    #[test]
    fn test_price_label() {
        assert_eq!(plan(0.0, None).price_label(), "Free");
        assert_eq!(plan(12.5, None).price_label(), "$12.50 / month");
    }

    #[test]
    fn test_limit_label() {
        assert_eq!(plan(0.0, Some(1)).limit_label(), "1 invoice per month");
        assert_eq!(plan(0.0, Some(50)).limit_label(), "50 invoices per month");
        assert_eq!(plan(0.0, None).limit_label(), "Unlimited invoices");
    }

    #[test]
    fn test_parse_plan_list() {
        let plans: Vec<Plan> = serde_json::from_str(
            r#"[{"id":"p1","name":"Starter","price":9.99,"invoiceLimit":100},
                {"id":"p2","name":"Pro"}]"#,
        )
        .unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].invoice_limit, Some(100));
        assert_eq!(plans[1].price, 0.0);
        assert!(plans[1].description.is_none());
    }

    #[test]
    fn test_assign_request_wire_format() {
        let body = serde_json::to_string(&AssignPlanRequest {
            plan_id: "p1".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"planId":"p1"}"#);
    }
}
