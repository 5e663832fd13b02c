// src/application/dto/parser.rs
// Parsers turning raw request payloads into validated domain values

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use super::{OrderQuery, PlaceOrderRequest, UpdateOrderRequest};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    LineItem, OrderDraft, OrderFilter, OrderPatch, OrderStatus, PaymentStatus,
};

impl PlaceOrderRequest {
    /// Validate every field and build the draft to persist.
    ///
    /// Top-level fields are checked first, then each line item in list order.
    /// No database access happens here.
    pub fn validate(&self) -> DomainResult<OrderDraft> {
        let user_id = parse_positive_integer(self.user_id.as_ref(), "userId")?;
        let total_amount = parse_amount(self.total_amount.as_ref(), "totalAmount")?;
        let shipping_address = parse_text(self.shipping_address.as_ref(), "shippingAddress")?;
        let payment_method = parse_text(self.payment_method.as_ref(), "paymentMethod")?;
        let status = parse_optional::<OrderStatus>(self.status.as_ref(), "status")?.unwrap_or_default();
        let payment_status =
            parse_optional::<PaymentStatus>(self.payment_status.as_ref(), "paymentStatus")?
                .unwrap_or_default();

        let raw_items = match required(self.order_items.as_ref(), "orderItems")? {
            Value::Array(items) if !items.is_empty() => items,
            _ => {
                return Err(DomainError::validation(
                    "orderItems must be a non-empty list",
                ))
            }
        };

        let items = raw_items
            .iter()
            .enumerate()
            .map(|(index, raw)| parse_line_item(index, raw))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(OrderDraft {
            user_id,
            total_amount,
            shipping_address,
            payment_method,
            status,
            payment_status,
            items,
        })
    }
}

impl UpdateOrderRequest {
    pub fn validate(&self) -> DomainResult<OrderPatch> {
        let patch = OrderPatch {
            status: parse_optional::<OrderStatus>(self.status.as_ref(), "status")?,
            payment_status: parse_optional::<PaymentStatus>(
                self.payment_status.as_ref(),
                "paymentStatus",
            )?,
            shipping_address: parse_optional_text(
                self.shipping_address.as_ref(),
                "shippingAddress",
            )?,
            payment_method: parse_optional_text(self.payment_method.as_ref(), "paymentMethod")?,
        };

        if patch.is_empty() {
            return Err(DomainError::validation(
                "at least one of status, paymentStatus, shippingAddress, paymentMethod must be supplied",
            ));
        }

        Ok(patch)
    }
}

impl OrderQuery {
    pub fn to_filter(&self) -> DomainResult<OrderFilter> {
        let user_id = match &self.user_id {
            Some(raw) => Some(
                raw.trim()
                    .parse::<i64>()
                    .ok()
                    .filter(|id| *id > 0)
                    .ok_or_else(|| DomainError::validation("userId must be a positive integer"))?,
            ),
            None => None,
        };

        let status = match &self.status {
            Some(raw) => Some(raw.trim().parse::<OrderStatus>()?),
            None => None,
        };

        Ok(OrderFilter { user_id, status })
    }
}

fn parse_line_item(index: usize, raw: &Value) -> DomainResult<LineItem> {
    let field = |name: &str| format!("orderItems[{}].{}", index, name);

    let object = raw
        .as_object()
        .ok_or_else(|| DomainError::validation(format!("orderItems[{}] must be an object", index)))?;

    Ok(LineItem {
        product_id: parse_positive_integer(object.get("productId"), &field("productId"))?,
        quantity: parse_positive_integer(object.get("quantity"), &field("quantity"))?,
        price: parse_amount(object.get("price"), &field("price"))?,
    })
}

fn required<'a>(value: Option<&'a Value>, field: &str) -> DomainResult<&'a Value> {
    value
        .filter(|v| !v.is_null())
        .ok_or_else(|| DomainError::validation(format!("{} is required", field)))
}

/// Positive integer sent either as a JSON integer or as a numeric string
pub fn parse_positive_integer(value: Option<&Value>, field: &str) -> DomainResult<i64> {
    let value = required(value, field)?;

    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed
        .filter(|n| *n > 0)
        .ok_or_else(|| DomainError::validation(format!("{} must be a positive integer", field)))
}

/// Non-negative decimal sent either as a JSON number or as a numeric string
pub fn parse_amount(value: Option<&Value>, field: &str) -> DomainResult<Decimal> {
    let value = required(value, field)?;

    let parsed = match value {
        Value::Number(n) => parse_decimal_text(&n.to_string()),
        Value::String(s) => parse_decimal_text(s.trim()),
        _ => None,
    };

    let amount =
        parsed.ok_or_else(|| DomainError::validation(format!("{} must be a number", field)))?;

    if amount < Decimal::ZERO {
        return Err(DomainError::validation(format!("{} must not be negative", field)));
    }

    Ok(amount)
}

fn parse_decimal_text(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Non-empty string, trimmed
pub fn parse_text(value: Option<&Value>, field: &str) -> DomainResult<String> {
    match required(value, field)? {
        Value::String(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Value::String(_) => Err(DomainError::validation(format!("{} must not be empty", field))),
        _ => Err(DomainError::validation(format!("{} must be a string", field))),
    }
}

fn parse_optional_text(value: Option<&Value>, field: &str) -> DomainResult<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(_) => parse_text(value, field).map(Some),
    }
}

fn parse_optional<T>(value: Option<&Value>, field: &str) -> DomainResult<Option<T>>
where
    T: FromStr<Err = DomainError>,
{
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => s.trim().parse::<T>().map(Some),
        Some(_) => Err(DomainError::validation(format!("{} must be a string", field))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn request(body: Value) -> PlaceOrderRequest {
        serde_json::from_value(body).unwrap()
    }

    fn valid_body() -> Value {
        json!({
            "userId": 1,
            "totalAmount": 59.97,
            "shippingAddress": "12 Harbour Road",
            "paymentMethod": "card",
            "orderItems": [
                { "productId": 3, "quantity": 2, "price": "19.99" },
                { "productId": 4, "quantity": 1, "price": 19.99 }
            ]
        })
    }

    fn validation_message(result: DomainResult<OrderDraft>) -> String {
        match result {
            Err(DomainError::Validation(message)) => message,
            other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn valid_request_builds_draft_with_defaults() {
        let draft = request(valid_body()).validate().unwrap();

        assert_eq!(draft.user_id, 1);
        assert_eq!(draft.total_amount, dec!(59.97));
        assert_eq!(draft.shipping_address, "12 Harbour Road");
        assert_eq!(draft.status, OrderStatus::Pending);
        assert_eq!(draft.payment_status, PaymentStatus::Pending);
        assert_eq!(draft.items.len(), 2);
        assert_eq!(
            draft.items[0],
            LineItem { product_id: 3, quantity: 2, price: dec!(19.99) }
        );
        assert_eq!(draft.items[1].price, dec!(19.99));
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let mut body = valid_body();
        body["userId"] = json!("7");
        body["totalAmount"] = json!(" 10.50 ");
        body["orderItems"][0]["quantity"] = json!("3");

        let draft = request(body).validate().unwrap();
        assert_eq!(draft.user_id, 7);
        assert_eq!(draft.total_amount, dec!(10.5));
        assert_eq!(draft.items[0].quantity, 3);
    }

    #[test]
    fn supplied_statuses_are_kept() {
        let mut body = valid_body();
        body["status"] = json!("processing");
        body["paymentStatus"] = json!("paid");

        let draft = request(body).validate().unwrap();
        assert_eq!(draft.status, OrderStatus::Processing);
        assert_eq!(draft.payment_status, PaymentStatus::Paid);
    }

    #[test]
    fn non_numeric_total_is_rejected() {
        let mut body = valid_body();
        body["totalAmount"] = json!("a lot");

        assert_eq!(
            validation_message(request(body).validate()),
            "totalAmount must be a number"
        );
    }

    #[test]
    fn missing_fields_are_named() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("userId");
        assert_eq!(validation_message(request(body).validate()), "userId is required");

        let mut body = valid_body();
        body["shippingAddress"] = Value::Null;
        assert_eq!(
            validation_message(request(body).validate()),
            "shippingAddress is required"
        );

        let mut body = valid_body();
        body["paymentMethod"] = json!("   ");
        assert_eq!(
            validation_message(request(body).validate()),
            "paymentMethod must not be empty"
        );
    }

    #[test]
    fn empty_item_list_is_rejected() {
        let mut body = valid_body();
        body["orderItems"] = json!([]);
        assert_eq!(
            validation_message(request(body).validate()),
            "orderItems must be a non-empty list"
        );

        let mut body = valid_body();
        body["orderItems"] = json!({ "productId": 1 });
        assert_eq!(
            validation_message(request(body).validate()),
            "orderItems must be a non-empty list"
        );
    }

    #[test]
    fn bad_line_items_name_their_position() {
        let mut body = valid_body();
        body["orderItems"][1]["quantity"] = json!(0);
        assert_eq!(
            validation_message(request(body).validate()),
            "orderItems[1].quantity must be a positive integer"
        );

        let mut body = valid_body();
        body["orderItems"][0]["quantity"] = json!(1.5);
        assert_eq!(
            validation_message(request(body).validate()),
            "orderItems[0].quantity must be a positive integer"
        );

        let mut body = valid_body();
        body["orderItems"][0]["price"] = json!(-1);
        assert_eq!(
            validation_message(request(body).validate()),
            "orderItems[0].price must not be negative"
        );

        let mut body = valid_body();
        body["orderItems"][1] = json!("p-4");
        assert_eq!(
            validation_message(request(body).validate()),
            "orderItems[1] must be an object"
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        let mut body = valid_body();
        body["status"] = json!("lost");
        assert!(validation_message(request(body).validate()).starts_with("status must be one of"));
    }

    #[test]
    fn update_requires_at_least_one_field() {
        let err = UpdateOrderRequest::default().validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let update: UpdateOrderRequest =
            serde_json::from_value(json!({ "status": "shipped", "paymentStatus": "paid" })).unwrap();
        let patch = update.validate().unwrap();
        assert_eq!(patch.status, Some(OrderStatus::Shipped));
        assert_eq!(patch.payment_status, Some(PaymentStatus::Paid));
        assert_eq!(patch.shipping_address, None);
    }

    #[test]
    fn query_parses_filters() {
        let query = OrderQuery {
            user_id: Some("4".into()),
            status: Some("delivered".into()),
        };
        let filter = query.to_filter().unwrap();
        assert_eq!(filter.user_id, Some(4));
        assert_eq!(filter.status, Some(OrderStatus::Delivered));

        let query = OrderQuery {
            user_id: Some("four".into()),
            status: None,
        };
        assert!(matches!(query.to_filter(), Err(DomainError::Validation(_))));
    }
}
