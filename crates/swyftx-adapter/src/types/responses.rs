/*
[INPUT]:  Untyped JSON bodies returned by the API
[OUTPUT]: Extracted fields and numeric coercions
[POS]:    Data layer - response shape checks
[UPDATE]: When an endpoint's transform or response shape changes
*/

use serde_json::Value;
use std::collections::HashMap;

use crate::http::{Result, SwyftxError};

/// Asset code to withdrawal limit
pub type WithdrawalLimits = HashMap<String, f64>;

/// Remove `field` from a JSON object
pub(crate) fn take_field(mut body: Value, field: &'static str) -> Result<Value> {
    body.as_object_mut()
        .and_then(|object| object.remove(field))
        .ok_or(SwyftxError::MissingField { field })
}

/// Amounts arrive as decimal strings or bare numbers
pub(crate) fn coerce_f64(value: &Value, field: &str) -> Result<f64> {
    let number = match value {
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|err| SwyftxError::invalid_field(field, format!("{text:?}: {err}")))?,
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| SwyftxError::invalid_field(field, number.to_string()))?,
        other => return Err(SwyftxError::invalid_field(field, format!("not numeric: {other}"))),
    };
    if !number.is_finite() {
        return Err(SwyftxError::invalid_field(field, format!("not finite: {number}")));
    }
    Ok(number)
}

pub(crate) fn parse_withdrawal_limits(body: Value) -> Result<WithdrawalLimits> {
    match take_field(body, "limits")? {
        Value::Object(limits) => limits
            .iter()
            .map(|(asset, amount)| -> Result<(String, f64)> {
                Ok((asset.clone(), coerce_f64(amount, asset)?))
            })
            .collect(),
        other => Err(SwyftxError::invalid_field("limits", format!("expected object, got {other}"))),
    }
}

pub(crate) fn parse_orders(body: Value) -> Result<Vec<Value>> {
    match take_field(body, "orders")? {
        Value::Array(orders) => Ok(orders),
        other => Err(SwyftxError::invalid_field("orders", format!("expected array, got {other}"))),
    }
}

pub(crate) fn parse_price(body: Value) -> Result<f64> {
    coerce_f64(&take_field(body, "price")?, "price")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_limits_coerced_to_floats() {
        let limits =
            parse_withdrawal_limits(json!({"limits": {"AUD": "100.50", "BTC": "0.002", "USD": 25}}))
                .unwrap();
        assert_eq!(limits.len(), 3);
        assert_eq!(limits["AUD"], 100.5);
        assert_eq!(limits["BTC"], 0.002);
        assert_eq!(limits["USD"], 25.0);
    }

    #[test]
    fn test_limits_missing_key() {
        let err = parse_withdrawal_limits(json!({"other": {}})).unwrap_err();
        assert!(matches!(err, SwyftxError::MissingField { field: "limits" }));
    }

    #[test]
    fn test_limits_non_numeric_value() {
        let err = parse_withdrawal_limits(json!({"limits": {"AUD": "lots"}})).unwrap_err();
        assert!(matches!(err, SwyftxError::InvalidField { ref field, .. } if field == "AUD"));
    }

    #[test]
    fn test_orders_keep_order() {
        let orders = parse_orders(json!({"orders": [{"id": 2}, {"id": 1}], "count": 2})).unwrap();
        assert_eq!(orders, vec![json!({"id": 2}), json!({"id": 1})]);
    }

    #[test]
    fn test_orders_wrong_type() {
        let err = parse_orders(json!({"orders": "none"})).unwrap_err();
        assert!(matches!(err, SwyftxError::InvalidField { .. }));
    }

    #[test]
    fn test_price_from_string_or_number() {
        assert_eq!(parse_price(json!({"price": "0.25"})).unwrap(), 0.25);
        assert_eq!(parse_price(json!({"price": 4})).unwrap(), 4.0);
        assert!(matches!(
            parse_price(json!([])).unwrap_err(),
            SwyftxError::MissingField { field: "price" }
        ));
        assert!(parse_price(json!({"price": "NaN"})).is_err());
        assert!(parse_price(json!({"price": null})).is_err());
    }
}
