//! Flat-record text format: one flower per line,
//! `name cost freshness_level stem_length` separated by single spaces.
//!
//! Only the four persisted fields are written. Names that are empty or
//! contain whitespace cannot be read back: they shift the token groups, so
//! decoding stops there and every later record is lost as well. Check
//! [`is_persistable_name`] before encoding untrusted names.

use crate::domain::model::FlowerRecord;

/// 名稱非空且不含空白才能安全寫入平面格式
pub fn is_persistable_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(char::is_whitespace)
}

pub fn encode(flowers: &[FlowerRecord]) -> String {
    flowers
        .iter()
        .map(|f| {
            format!(
                "{} {} {} {}\n",
                f.name, f.cost, f.freshness_level, f.stem_length
            )
        })
        .collect()
}

/// Reads whitespace-separated tokens four at a time. Parsing stops at the
/// first incomplete or unparsable group; everything after it is dropped.
pub fn decode(text: &str) -> Vec<FlowerRecord> {
    let mut tokens = text.split_whitespace();
    let mut flowers = Vec::new();

    loop {
        let Some(name) = tokens.next() else {
            break;
        };

        match parse_fields(&mut tokens) {
            Some((cost, freshness_level, stem_length)) => {
                flowers.push(FlowerRecord::new(name, cost, freshness_level, stem_length));
            }
            None => {
                tracing::warn!(
                    "⚠️ Discarding trailing data starting at '{}' after {} records",
                    name,
                    flowers.len()
                );
                break;
            }
        }
    }

    tracing::debug!("Decoded {} flower records", flowers.len());
    flowers
}

fn parse_fields<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Option<(f64, i32, i32)> {
    // inf / NaN 會污染總價，視同無法解析
    let cost = tokens
        .next()?
        .parse::<f64>()
        .ok()
        .filter(|cost| cost.is_finite())?;
    let freshness_level = tokens.next()?.parse().ok()?;
    let stem_length = tokens.next()?.parse().ok()?;
    Some((cost, freshness_level, stem_length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let flowers = vec![
            FlowerRecord::new("Daisy", 2.0, 5, 25),
            FlowerRecord::rose(5.5, 7, 40),
        ];
        assert_eq!(encode(&flowers), "Daisy 2 5 25\nRose 5.5 7 40\n");
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_transient_field_not_serialized() {
        let mut daisy = FlowerRecord::new("Daisy", 2.0, 5, 25);
        daisy.session_tag = 123;

        let decoded = decode(&encode(std::slice::from_ref(&daisy)));
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0], daisy);
        assert_eq!(decoded[0].session_tag, 0);
    }

    #[test]
    fn test_round_trip_keeps_order_and_precision() {
        let flowers = vec![
            FlowerRecord::rose(5.0, 7, 40),
            FlowerRecord::tulip(0.1, -2, 0),
            FlowerRecord::lily(1234.5678, 8, 35),
            FlowerRecord::new("Orchid", 1e-3, 10, 60),
        ];
        assert_eq!(decode(&encode(&flowers)), flowers);
    }

    #[test]
    fn test_decode_accepts_any_whitespace() {
        let decoded = decode("  Rose\t5 7\n40   Tulip 3 5 30");
        assert_eq!(
            decoded,
            vec![FlowerRecord::rose(5.0, 7, 40), FlowerRecord::tulip(3.0, 5, 30)]
        );
    }

    #[test]
    fn test_decode_drops_incomplete_tail() {
        let decoded = decode("Rose 5 7 40\nTulip 3 5\n");
        assert_eq!(decoded, vec![FlowerRecord::rose(5.0, 7, 40)]);
    }

    #[test]
    fn test_decode_stops_at_unparsable_group() {
        let decoded = decode("Rose 5 7 40\nTulip cheap 5 30\nLily 4 8 35\n");
        assert_eq!(decoded, vec![FlowerRecord::rose(5.0, 7, 40)]);
    }

    #[test]
    fn test_decode_rejects_non_finite_cost() {
        let decoded = decode("Rose 5 7 40\nTulip NaN 5 30\nLily 4 8 35\n");
        assert_eq!(decoded, vec![FlowerRecord::rose(5.0, 7, 40)]);
        assert!(decode("Rose inf 7 40\n").is_empty());
        assert!(decode("Rose -inf 7 40\n").is_empty());
    }

    #[test]
    fn test_empty_name_drops_following_records() {
        let flowers = vec![
            FlowerRecord::new("", 2.0, 5, 25),
            FlowerRecord::rose(5.0, 7, 40),
        ];
        let encoded = encode(&flowers);
        assert_eq!(encoded, " 2 5 25\nRose 5 7 40\n");
        assert!(decode(&encoded).is_empty());
    }

    #[test]
    fn test_is_persistable_name() {
        assert!(is_persistable_name("Daisy"));
        assert!(!is_persistable_name(""));
        assert!(!is_persistable_name("Baby Breath"));
        assert!(!is_persistable_name("Tab\tName"));
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode("").is_empty());
        assert!(decode(" \n\t").is_empty());
    }

    #[test]
    fn test_names_with_spaces_do_not_round_trip() {
        let flowers = vec![FlowerRecord::new("Baby Breath", 1.0, 2, 3)];
        assert_ne!(decode(&encode(&flowers)), flowers);
    }
}
