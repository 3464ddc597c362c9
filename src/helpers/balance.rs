use serde::{Deserialize, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

/// Helper for (de)serializing a yoctoNEAR amount from its decimal string representation into a `u128`.
///
/// The node sends balances as strings because they overflow JSON-safe integers.
pub struct YoctoNear;

impl<'de> DeserializeAs<'de, u128> for YoctoNear {
    fn deserialize_as<D>(deserializer: D) -> Result<u128, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(|_| {
            serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(&text),
                &"a decimal yoctoNEAR amount",
            )
        })
    }
}

impl SerializeAs<u128> for YoctoNear {
    fn serialize_as<S>(amount: &u128, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;
    use serde_with::serde_as;

    #[serde_as]
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Account {
        #[serde_as(as = "YoctoNear")]
        amount: u128,
    }

    #[test]
    fn test_amount_above_u64() {
        let json = json!({ "amount": "1000000000000000000000000" });
        let account: Account = serde_json::from_value(json.clone()).unwrap();

        assert_eq!(account.amount, 10_u128.pow(24));
        assert_eq!(serde_json::to_value(&account).unwrap(), json);
    }

    #[test]
    fn test_rejects_numbers_and_garbage() {
        assert!(serde_json::from_value::<Account>(json!({ "amount": 5 })).is_err());

        let err = serde_json::from_value::<Account>(json!({ "amount": "5 NEAR" })).unwrap_err();
        assert!(err.to_string().contains("yoctoNEAR"));
    }
}
