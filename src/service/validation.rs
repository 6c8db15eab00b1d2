//! Presence and type checks for form-encoded request bodies.

use crate::error::AppError;
use crate::model::{BakeryNameUpdate, NewBakedGood};
use serde::Deserialize;

pub const INCOMPLETE_DATA: &str = "Incomplete data provided";
pub const NAME_NOT_PROVIDED: &str = "New name not provided";
pub const INVALID_PRICE: &str = "Invalid price";
pub const INVALID_BAKERY_ID: &str = "Invalid bakery_id";

/// Raw `POST /baked_goods` form. Every field is optional until validated.
#[derive(Debug, Default, Deserialize)]
pub struct BakedGoodForm {
    pub name: Option<String>,
    pub price: Option<String>,
    pub bakery_id: Option<String>,
}

/// Raw `PATCH /bakeries/:id` form.
#[derive(Debug, Default, Deserialize)]
pub struct BakeryForm {
    pub name: Option<String>,
}

pub struct RequestValidator;

impl RequestValidator {
    /// All three fields must be present and non-blank before any type check runs.
    pub fn new_baked_good(form: BakedGoodForm) -> Result<NewBakedGood, AppError> {
        let (name, price, bakery_id) = match (present(form.name), present(form.price), present(form.bakery_id)) {
            (Some(n), Some(p), Some(b)) => (n, p, b),
            _ => return Err(AppError::BadRequest(INCOMPLETE_DATA.into())),
        };
        let price: f64 = price
            .trim()
            .parse()
            .ok()
            .filter(|p: &f64| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| AppError::BadRequest(INVALID_PRICE.into()))?;
        let bakery_id: i64 = bakery_id
            .trim()
            .parse()
            .map_err(|_| AppError::BadRequest(INVALID_BAKERY_ID.into()))?;
        Ok(NewBakedGood { name, price, bakery_id })
    }

    pub fn bakery_name(form: BakeryForm) -> Result<BakeryNameUpdate, AppError> {
        present(form.name)
            .map(|name| BakeryNameUpdate { name })
            .ok_or_else(|| AppError::BadRequest(NAME_NOT_PROVIDED.into()))
    }
}

/// The value as sent, or `None` when absent or blank.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: Option<&str>, price: Option<&str>, bakery_id: Option<&str>) -> BakedGoodForm {
        BakedGoodForm {
            name: name.map(String::from),
            price: price.map(String::from),
            bakery_id: bakery_id.map(String::from),
        }
    }

    fn bad_request_message(err: AppError) -> String {
        match err {
            AppError::BadRequest(msg) => msg,
            other => panic!("expected bad request, got {other:?}"),
        }
    }

    #[test]
    fn complete_form_is_accepted() {
        let good = RequestValidator::new_baked_good(form(Some("Croissant"), Some("3.5"), Some("1"))).unwrap();
        assert_eq!(
            good,
            NewBakedGood {
                name: "Croissant".into(),
                price: 3.5,
                bakery_id: 1
            }
        );
    }

    #[test]
    fn missing_or_blank_field_is_incomplete() {
        for f in [
            form(None, Some("3.5"), Some("1")),
            form(Some("Croissant"), None, Some("1")),
            form(Some("Croissant"), Some("3.5"), None),
            form(Some("  "), Some("3.5"), Some("1")),
            form(Some("Croissant"), Some(""), Some("1")),
        ] {
            let msg = bad_request_message(RequestValidator::new_baked_good(f).unwrap_err());
            assert_eq!(msg, INCOMPLETE_DATA);
        }
    }

    #[test]
    fn price_must_be_a_non_negative_number() {
        for price in ["cheap", "-1", "NaN", "inf"] {
            let err = RequestValidator::new_baked_good(form(Some("Bun"), Some(price), Some("1"))).unwrap_err();
            assert_eq!(bad_request_message(err), INVALID_PRICE, "price {price}");
        }
    }

    #[test]
    fn bakery_id_must_be_an_integer() {
        let err = RequestValidator::new_baked_good(form(Some("Bun"), Some("2"), Some("one"))).unwrap_err();
        assert_eq!(bad_request_message(err), INVALID_BAKERY_ID);
    }

    #[test]
    fn accepted_names_are_kept_verbatim() {
        let good = RequestValidator::new_baked_good(form(Some("  Rye  "), Some(" 4 "), Some("2"))).unwrap();
        assert_eq!(good.name, "  Rye  ");
        assert_eq!(good.price, 4.0);

        let update = RequestValidator::bakery_name(BakeryForm { name: Some(" Padded ".into()) }).unwrap();
        assert_eq!(update.name, " Padded ");
    }

    #[test]
    fn bakery_name_requires_a_value() {
        let ok = RequestValidator::bakery_name(BakeryForm { name: Some("New Name".into()) }).unwrap();
        assert_eq!(ok.name, "New Name");

        for name in [None, Some(String::new()), Some("   ".to_string())] {
            let err = RequestValidator::bakery_name(BakeryForm { name }).unwrap_err();
            assert_eq!(bad_request_message(err), NAME_NOT_PROVIDED);
        }
    }
}
