//! Azure resource group data model.

use serde::{Deserialize, Serialize};

/// Represents an Azure resource group.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroup {
    /// Fully qualified resource ID, e.g. `/subscriptions/<id>/resourceGroups/<name>`.
    pub id: String,
    /// Display name of the resource group.
    pub name: String,
}

/// Response envelope of the resource group list call.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ResourceGroupList {
    /// Resource groups in the order the server returned them.
    pub value: Vec<ResourceGroup>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_fields_ignored() {
        let json = r#"{"value":[{"id":"/subscriptions/x/resourceGroups/rg1","name":"rg1","location":"westeurope","properties":{"provisioningState":"Succeeded"}}]}"#;
        let list: ResourceGroupList = serde_json::from_str(json).expect("valid envelope");
        assert_eq!(
            list.value,
            vec![ResourceGroup {
                id: "/subscriptions/x/resourceGroups/rg1".to_string(),
                name: "rg1".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_value_rejected() {
        assert!(serde_json::from_str::<ResourceGroupList>(r#"{"nextLink":null}"#).is_err());
    }
}
