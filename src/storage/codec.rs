//! Ledger persistence codec
//!
//! Encodes the whole `LedgerData` aggregate as pretty-printed JSON. Encoding
//! is deterministic, so saving an unchanged ledger twice produces identical
//! bytes.

use crate::error::{StoryCashError, StoryCashResult};
use crate::models::LedgerData;

/// Serialize the ledger to bytes
pub fn encode(data: &LedgerData) -> StoryCashResult<Vec<u8>> {
    serde_json::to_vec_pretty(data)
        .map_err(|e| StoryCashError::Json(format!("Failed to encode ledger: {}", e)))
}

/// Deserialize a ledger; empty, truncated and mismatched payloads are errors
pub fn decode(bytes: &[u8]) -> StoryCashResult<LedgerData> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(StoryCashError::Decode("Ledger payload is empty".into()));
    }

    serde_json::from_slice(bytes)
        .map_err(|e| StoryCashError::Decode(format!("Failed to decode ledger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, Transaction, TransactionType};
    use crate::storage::init::default_categories;
    use chrono::{TimeZone, Utc};

    fn sample() -> LedgerData {
        let mut data = LedgerData::with_categories(default_categories());
        let food = data.categories[0].clone();
        let salary = data
            .categories
            .iter()
            .find(|c| c.transaction_type == TransactionType::Income)
            .cloned()
            .unwrap();

        // Sub-second precision and an awkward float must both survive
        let date = Utc.with_ymd_and_hms(2025, 1, 10, 8, 30, 15).unwrap()
            + chrono::Duration::nanoseconds(123_456_789);
        data.transactions
            .push(Transaction::new(Money::new(0.1 + 0.2), date, food));
        data.transactions.push(Transaction::new(
            Money::new(2500.0),
            Utc.with_ymd_and_hms(2025, 1, 31, 0, 0, 0).unwrap(),
            salary,
        ));
        data
    }

    #[test]
    fn test_round_trip() {
        let data = sample();
        let bytes = encode(&data).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded, data);
        assert_eq!(decoded.transactions[0].value.value(), 0.1 + 0.2);
    }

    #[test]
    fn test_round_trip_keeps_every_float_bit() {
        let mut data = LedgerData::with_categories(default_categories());
        let food = data.categories[0].clone();
        let date = Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap();

        // xorshift64 keeps the sample reproducible without an RNG crate
        let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
        let mut values = vec![2000648.6789875214, 1036765.9000514107, 1954362.2133090042];
        while values.len() < 5_000 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
            values.push(unit * 5_000_000.0);
        }
        for value in &values {
            data.transactions
                .push(Transaction::new(Money::new(*value), date, food.clone()));
        }

        let decoded = decode(&encode(&data).unwrap()).unwrap();

        for (original, back) in data.transactions.iter().zip(&decoded.transactions) {
            assert_eq!(
                original.value.value().to_bits(),
                back.value.value().to_bits(),
                "value {} changed on round trip",
                original.value.value()
            );
        }
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let data = sample();
        assert_eq!(encode(&data).unwrap(), encode(&data).unwrap());
    }

    #[test]
    fn test_wire_shape() {
        let bytes = encode(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        let txn = &value["transactions"][0];
        for key in ["id", "value", "date", "type", "category"] {
            assert!(txn.get(key).is_some(), "missing transaction field {}", key);
        }
        for key in ["id", "image", "title", "color", "type"] {
            assert!(txn["category"].get(key).is_some(), "missing category field {}", key);
        }
        assert_eq!(value["categories"].as_array().unwrap().len(), 18);
    }

    #[test]
    fn test_empty_payload_fails() {
        assert!(matches!(decode(b""), Err(StoryCashError::Decode(_))));
        assert!(matches!(decode(b"  \n"), Err(StoryCashError::Decode(_))));
    }

    #[test]
    fn test_truncated_payload_fails() {
        let bytes = encode(&sample()).unwrap();
        let truncated = &bytes[..bytes.len() / 2];
        assert!(matches!(decode(truncated), Err(StoryCashError::Decode(_))));
    }

    #[test]
    fn test_schema_mismatch_fails() {
        assert!(decode(br#"{"transactions": []}"#).is_err());
        assert!(decode(br#"[1, 2, 3]"#).is_err());

        let bad_type = r##"{"transactions": [], "categories": [
            {"id": "550e8400-e29b-41d4-a716-446655440000", "image": "x",
             "title": "X", "color": "#000000", "type": "transfer"}]}"##;
        assert!(decode(bad_type.as_bytes()).is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let cat = Category::new("cart", "Groceries", "#34C759", TransactionType::Expense);
        let mut value = serde_json::json!({
            "transactions": [],
            "categories": [cat],
            "future_field": true,
        });
        value["categories"][0]["sort_order"] = serde_json::json!(3);

        let decoded = decode(&serde_json::to_vec(&value).unwrap()).unwrap();
        assert_eq!(decoded.categories, vec![cat]);
    }
}
