//! AI agent catalog records.
//!
//! Presentation-only: these describe agents the site sells, nothing here
//! executes them.

use super::{Collection, ContentRecord};
use serde::{Deserialize, Serialize};

/// Pricing tier for a catalog agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentTier {
    /// Free to use.
    Free,
    /// Paid tier with a price string attached.
    #[default]
    Premium,
}

/// An AI agent offering shown on the solutions page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Stable numeric id, unique within the collection.
    #[serde(default)]
    pub id: i64,
    /// Agent name.
    #[serde(default)]
    pub title: String,
    /// Short description shown on cards.
    #[serde(rename = "desc", default)]
    pub summary: String,
    /// Icon identifier resolved by the UI (e.g. "Fingerprint").
    #[serde(default)]
    pub icon: String,
    /// Pricing tier.
    #[serde(rename = "type", default)]
    pub tier: AgentTier,
    /// Monthly price as a display string ("0" for free agents).
    #[serde(default)]
    pub price: String,
    /// Cover image URL.
    #[serde(rename = "img", default)]
    pub image_url: String,
    /// Capability tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Long-form description for the detail view.
    #[serde(rename = "longDesc", default)]
    pub long_desc: String,
    /// Explanation of the agent's internal workflow.
    #[serde(rename = "howItWorks", default)]
    pub how_it_works: String,
    /// Benefit bullet points.
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Ordered workflow-step labels rendered as a node diagram.
    #[serde(rename = "workflowNodes", default)]
    pub workflow_nodes: Vec<String>,
    /// Serialized JSON workflow payload shown in the "export" panel.
    #[serde(rename = "mockJson", default)]
    pub mock_json: String,
}

impl ContentRecord for Agent {
    const COLLECTION: Collection = Collection::Agents;

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tier_wire_format() {
        assert_eq!(serde_json::to_value(AgentTier::Free).unwrap(), json!("free"));
        assert_eq!(
            serde_json::to_value(AgentTier::Premium).unwrap(),
            json!("premium")
        );
    }

    #[test]
    fn test_agent_wire_names() {
        let agent = Agent {
            id: 2,
            title: "Support Intelligence Swarms".to_string(),
            tier: AgentTier::Free,
            price: "0".to_string(),
            long_desc: "long".to_string(),
            how_it_works: "how".to_string(),
            workflow_nodes: vec!["Webhook: Intercom".to_string()],
            mock_json: "{}".to_string(),
            ..Agent::default()
        };
        let value = serde_json::to_value(&agent).unwrap();
        assert_eq!(value["type"], json!("free"));
        assert_eq!(value["longDesc"], json!("long"));
        assert_eq!(value["howItWorks"], json!("how"));
        assert_eq!(value["workflowNodes"], json!(["Webhook: Intercom"]));
        assert_eq!(value["mockJson"], json!("{}"));
    }

    #[test]
    fn test_agent_round_trip() {
        let agent = Agent {
            id: 5,
            title: "Sentiment".to_string(),
            benefits: vec!["Proactive".to_string()],
            ..Agent::default()
        };
        let value = serde_json::to_value(&agent).unwrap();
        let back: Agent = serde_json::from_value(value).unwrap();
        assert_eq!(back, agent);
    }
}
