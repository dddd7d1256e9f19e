use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Pricing inputs snapshot, embedded verbatim in the persisted Quotation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuotationInputs {
    #[validate(range(min = 0.0))]
    pub area: f64,
    #[validate(range(min = 0.0))]
    pub rate_per_sqft: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub material_cost: f64,
    #[serde(default = "default_gst_percent")]
    #[validate(range(min = 0.0))]
    pub gst_percent: f64,
    #[serde(default = "default_markup_percent")]
    #[validate(range(min = 0.0))]
    pub markup_percent: f64,
}

pub fn default_gst_percent() -> f64 {
    18.0
}

pub fn default_markup_percent() -> f64 {
    10.0
}

/// Stage-wise price breakdown returned by the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub subtotal: f64,
    pub gst: f64,
    pub markup: f64,
    pub total: f64,
}

impl QuotationInputs {
    /// Compute the price breakdown.
    ///
    /// Pure; every monetary value is rounded to 2 decimal places before it
    /// is returned. Callable on its own (the preview endpoint) and from
    /// quotation creation, which persists `total` as `generated_price`.
    pub fn compute(&self) -> QuoteBreakdown {
        let subtotal = self.area * self.rate_per_sqft + self.material_cost;
        let gst = subtotal * (self.gst_percent / 100.0);
        let total_with_gst = subtotal + gst;
        let markup = total_with_gst * (self.markup_percent / 100.0);
        let grand_total = total_with_gst + markup;
        QuoteBreakdown {
            subtotal: round2(subtotal),
            gst: round2(gst),
            markup: round2(markup),
            total: round2(grand_total),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A computed price estimate tied to a Lead and optional project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quotation {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    /// Owning lead id, stored as its hex string form
    pub lead_id: String,
    /// Community or tower id
    pub project_id: Option<String>,
    pub pricing_inputs: QuotationInputs,
    pub generated_price: f64,
    pub pdf_url: Option<String>,
    /// Agent or manager id
    pub created_by: Option<String>,

    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(area: f64, rate: f64, material: f64, gst: f64, markup: f64) -> QuotationInputs {
        QuotationInputs {
            area,
            rate_per_sqft: rate,
            material_cost: material,
            gst_percent: gst,
            markup_percent: markup,
        }
    }

    #[test]
    fn test_reference_breakdown() {
        let breakdown = inputs(1000.0, 1500.0, 50000.0, 18.0, 10.0).compute();
        assert_eq!(breakdown.subtotal, 1_550_000.00);
        assert_eq!(breakdown.gst, 279_000.00);
        assert_eq!(breakdown.markup, 182_900.00);
        assert_eq!(breakdown.total, 2_011_900.00);
    }

    #[test]
    fn test_zero_inputs_give_zero_total() {
        let breakdown = inputs(0.0, 0.0, 0.0, 18.0, 10.0).compute();
        assert_eq!(breakdown.subtotal, 0.0);
        assert_eq!(breakdown.gst, 0.0);
        assert_eq!(breakdown.markup, 0.0);
        assert_eq!(breakdown.total, 0.0);
    }

    #[test]
    fn test_values_rounded_to_two_decimals() {
        // 10.5 * 3.33 = 34.965 -> subtotal rounds to 34.97
        let breakdown = inputs(10.5, 3.33, 0.0, 18.0, 10.0).compute();
        assert_eq!(breakdown.subtotal, 34.97);
        // gst on the unrounded subtotal: 34.965 * 0.18 = 6.2937 -> 6.29
        assert_eq!(breakdown.gst, 6.29);
    }

    #[test]
    fn test_total_matches_closed_form() {
        let breakdown = inputs(820.0, 1275.5, 12500.0, 18.0, 10.0).compute();
        let expected = (820.0 * 1275.5 + 12500.0) * 1.18 * 1.10;
        assert!((breakdown.total - expected).abs() < 0.01);
    }

    #[test]
    fn test_input_defaults_from_json() {
        let inputs: QuotationInputs =
            serde_json::from_str(r#"{"area": 100.0, "rate_per_sqft": 50.0}"#).unwrap();
        assert_eq!(inputs.material_cost, 0.0);
        assert_eq!(inputs.gst_percent, 18.0);
        assert_eq!(inputs.markup_percent, 10.0);
    }
}
