//! Models shared by the policies and recoveries APIs

use serde::{Deserialize, Serialize};

/// Oracle cloud tiering settings
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct OracleTiers {
    pub tiers: Vec<OracleTier>,
}

/// A single Oracle storage tier and when data moves into it
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct OracleTier {
    pub move_after_unit: Option<String>,
    pub move_after: Option<i64>,
    pub tier_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_tiers_deserialization() {
        let json = r#"{
            "tiers": [
                {"moveAfterUnit": "Days", "moveAfter": 30, "tierType": "kOracleTierStandard"},
                {"tierType": "kOracleTierArchive"}
            ]
        }"#;

        let tiers: OracleTiers = serde_json::from_str(json).unwrap();
        assert_eq!(tiers.tiers.len(), 2);
        assert_eq!(tiers.tiers[0].move_after, Some(30));
        assert_eq!(tiers.tiers[1].tier_type, "kOracleTierArchive");
        assert!(tiers.tiers[1].move_after_unit.is_none());
    }

    #[test]
    fn test_oracle_tier_requires_type() {
        let result = serde_json::from_str::<OracleTier>(r#"{"moveAfter": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_snake_case() {
        let tier = OracleTier {
            move_after_unit: Some("Weeks".to_string()),
            move_after: Some(2),
            tier_type: "kOracleTierInfrequent".to_string(),
        };
        let value = serde_json::to_value(&tier).unwrap();
        assert_eq!(value["move_after_unit"], "Weeks");
        assert_eq!(value["tier_type"], "kOracleTierInfrequent");
    }
}
