//! Bundled default content.
//!
//! Written into each remote collection the first time it is found empty, and
//! served from memory when a live subscription cannot be established. Keep
//! the shapes aligned with what the site UI expects.

use crate::models::{Agent, AgentTier, Article, Project, Review, Seo};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Default blog articles.
#[must_use]
pub fn articles() -> Vec<Article> {
    vec![Article {
        id: 1,
        title: "The Rise of Agentic AI in 2026".to_string(),
        summary: "Why traditional websites are dying and how autonomous agents are taking over \
                  the digital landscape."
            .to_string(),
        body: "The digital world is shifting from **static interfaces** to **autonomous \
               experiences**. In 2026, we are seeing a massive transition. *Agentic AI* isn't \
               just a chatbot; it is a system that can execute tasks without constant human \
               input.\n\n### Key Takeaways:\n1. Efficiency is king.\n2. User experience is \
               becoming predictive.\n3. Automation is no longer optional."
            .to_string(),
        category: "AI Innovation".to_string(),
        image_url:
            "https://images.unsplash.com/photo-1677442136019-21780ecad995?auto=format&fit=crop&w=1200&q=80"
                .to_string(),
        published: "Oct 12, 2025".to_string(),
        tags: strings(&["AI", "Future", "Tech"]),
        seo: Seo {
            title: "Agentic AI Trends 2026".to_string(),
            description: "Explore AI agents.".to_string(),
            focus_keyword: "AI Agents".to_string(),
            score: 95,
            ..Seo::default()
        },
    }]
}

/// Default portfolio projects.
#[must_use]
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Avanti Wines".to_string(),
            subtitle: "High-end UK wine importer e-commerce built on a custom WooCommerce \
                       architecture."
                .to_string(),
            category: "WordPress & E-Commerce".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1510812431401-41d2bd2722f3?auto=format&fit=crop&w=800&q=80"
                    .to_string(),
            tech: strings(&["WordPress", "WooCommerce", "Stripe"]),
            link: "https://avanti-wines.co.uk/".to_string(),
            seo: Some(Seo {
                title: "Avanti Wines | Premium Wine E-commerce".to_string(),
                description: "Buy fine wines online.".to_string(),
                focus_keyword: "Wine Shop".to_string(),
                score: 85,
                ..Seo::default()
            }),
        },
        Project {
            id: 2,
            title: "Roberta Flat".to_string(),
            subtitle: "Professional London cleaning service with automated booking and payment \
                       flows."
                .to_string(),
            category: "WordPress & E-Commerce".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1581578731548-c64695cc6954?auto=format&fit=crop&w=800&q=80"
                    .to_string(),
            tech: strings(&["WordPress", "Booking Engine", "Paypal"]),
            link: "https://robertaflat.com/".to_string(),
            seo: Some(Seo {
                title: "Roberta Flat Cleaning London".to_string(),
                description: "Book professional cleaners.".to_string(),
                focus_keyword: "Cleaning London".to_string(),
                score: 92,
                ..Seo::default()
            }),
        },
    ]
}

/// Default client reviews.
#[must_use]
pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            id: 1,
            name: "Muhammad Furqan".to_string(),
            role: "CEO at Novik Edge".to_string(),
            text: "Iqra is a talented web developer with a sharp eye for detail. Her work in \
                   WordPress is top-tier."
                .to_string(),
            avatar: "MF".to_string(),
            rating: 5,
        },
        Review {
            id: 2,
            name: "Fatima Khan".to_string(),
            role: "Fashion Blogger".to_string(),
            text: "She nailed the vibe perfectly for my fashion blog. The e-commerce integration \
                   is seamless!"
                .to_string(),
            avatar: "FK".to_string(),
            rating: 5,
        },
    ]
}

/// Default agent catalog entries.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn agents() -> Vec<Agent> {
    vec![
        Agent {
            id: 1,
            title: "Autonomous Sales Agents".to_string(),
            summary: "AI that identifies leads, handles initial outreach, and schedules meetings \
                      autonomously while maintaining your brand voice."
                .to_string(),
            icon: "Fingerprint".to_string(),
            tier: AgentTier::Premium,
            price: "149".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1552664730-d307ca884978?auto=format&fit=crop&w=800&q=80"
                    .to_string(),
            tags: strings(&["GPT-4o", "Multi-Agent System", "Lead Gen"]),
            long_desc: "A complete sales-engine replacement. This agent monitors platforms like \
                        LinkedIn or your CRM to identify high-potential leads, researches their \
                        background, and crafts hyper-personalized cold emails that feel human."
                .to_string(),
            how_it_works: "Using a chain of thought process: First, the 'Researcher Agent' \
                           gathers data. Second, the 'Copywriter Agent' drafts the message. \
                           Third, the 'Scheduler Agent' checks your calendar availability via \
                           API to propose meeting times."
                .to_string(),
            benefits: strings(&[
                "90% reduction in manual prospecting time",
                "3x higher conversion rate via deep personalization",
                "Consistent follow-up without human intervention",
                "Seamless integration with HubSpot/Salesforce",
            ]),
            workflow_nodes: strings(&[
                "Trigger: New Lead",
                "Enrichment: Apollo.io",
                "Analysis: LLM Personality",
                "Action: Send Gmail",
                "Wait: 3 Days",
                "Check: Reply Status",
            ]),
            mock_json: r#"{
  "name": "sales_outreach_v1",
  "type": "n8n_workflow",
  "nodes": [
    "Trigger",
    "HTTP Request",
    "OpenAI",
    "Gmail Send"
  ],
  "connections": {}
}"#
            .to_string(),
        },
        Agent {
            id: 2,
            title: "Support Intelligence Swarms".to_string(),
            summary: "Beyond simple chatbots. These agents access your entire documentation to \
                      solve complex customer queries and execute account actions."
                .to_string(),
            icon: "Workflow".to_string(),
            tier: AgentTier::Free,
            price: "0".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1531482615713-2afd69097998?auto=format&fit=crop&w=800&q=80"
                    .to_string(),
            tags: strings(&["RAG Architecture", "Vector DB", "24/7 Support"]),
            long_desc: "Imagine a support agent that has read every line of your technical \
                        documentation and knows every past customer ticket. It doesn't just \
                        talk; it acts—resetting passwords or upgrading tiers via API."
                .to_string(),
            how_it_works: "Leveraging Retrieval-Augmented Generation (RAG). When a user asks a \
                           question, the agent searches a Pinecone Vector Database for context, \
                           synthesizes an answer using GPT-4, and provides verifiable citations."
                .to_string(),
            benefits: strings(&[
                "Instant resolution for 80% of common tickets",
                "Zero hallucination via grounded vector search",
                "Automated ticket escalation to Slack",
                "Multi-lingual support across 50+ languages",
            ]),
            workflow_nodes: strings(&[
                "Webhook: Intercom",
                "Search: Pinecone DB",
                "Prompt: Contextual Answer",
                "Condition: Can Resolve?",
                "True: Send Reply",
                "False: Create Jira Ticket",
            ]),
            mock_json: r#"{
  "name": "support_rag_swarm",
  "type": "n8n_workflow",
  "nodes": [
    "Intercom Hook",
    "Vector Search",
    "LLM Chain",
    "Conditional Router"
  ],
  "connections": {}
}"#
            .to_string(),
        },
        Agent {
            id: 3,
            title: "Workflow Automation Agents".to_string(),
            summary: "Connecting your business tools (Slack, CRM, Gmail) with intelligent logic \
                      to automate repetitive manual tasks."
                .to_string(),
            icon: "BrainCircuit".to_string(),
            tier: AgentTier::Premium,
            price: "299".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1518770660439-4636190af475?auto=format&fit=crop&w=800&q=80"
                    .to_string(),
            tags: strings(&["Python", "CrewAI", "LangChain"]),
            long_desc: "The ultimate glue for your digital infrastructure. This agent acts as a \
                        manager that oversees multiple tools, ensuring that data flows exactly \
                        where it needs to go based on complex business logic."
                .to_string(),
            how_it_works: "The agent uses 'Function Calling' to interact with your specific \
                           software APIs. It interprets unstructured data (like an email or a \
                           Slack message) and converts it into structured tasks in Jira or \
                           Trello."
                .to_string(),
            benefits: strings(&[
                "Elimination of human error in data entry",
                "Real-time sync between marketing and sales ops",
                "Custom logic that standard automation tools can't handle",
                "Scalable execution of complex SOPs",
            ]),
            workflow_nodes: strings(&[
                "Schedule: Hourly",
                "Sync: CRM Data",
                "Process: Deduplication",
                "AI: Summarization",
                "Notify: Slack Channel",
                "Update: Airtable",
            ]),
            mock_json: r#"{
  "name": "ops_orchestrator",
  "type": "n8n_workflow",
  "nodes": [
    "Cron",
    "CRM API",
    "Custom Python",
    "Slack Hook"
  ],
  "connections": {}
}"#
            .to_string(),
        },
        Agent {
            id: 4,
            title: "Content Creation Agents".to_string(),
            summary: "Hyper-personalized multi-channel content engines that write, design, and \
                      schedule posts based on trending topics in your niche."
                .to_string(),
            icon: "Bot".to_string(),
            tier: AgentTier::Premium,
            price: "199".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1493612276216-ee3925520721?auto=format&fit=crop&w=800&q=80"
                    .to_string(),
            tags: strings(&["SEO", "Automated Design", "Content Strategy"]),
            long_desc: "A powerhouse for digital marketing teams. This agent monitors real-time \
                        trends on platforms like X, LinkedIn, and Google Trends, then \
                        synthesizes that data into unique, high-quality blog posts and social \
                        media threads that match your exact brand personality."
                .to_string(),
            how_it_works: "The system triggers on a trend alert. The 'Trend Analyst Agent' \
                           selects a topic. The 'Copywriter Agent' generates the draft. The \
                           'Designer Agent' creates a visual via DALL-E or Canva API. Finally, \
                           the 'Publisher Agent' schedules it for peak engagement."
                .to_string(),
            benefits: strings(&[
                "Consistent daily social presence without human effort",
                "Real-time trend exploitation for viral growth",
                "Brand-voice consistency across all platforms",
                "70% reduction in content production costs",
            ]),
            workflow_nodes: strings(&[
                "Trigger: Trend Detected",
                "Analysis: Market Fit",
                "Creation: Multi-Format Drafts",
                "Review: Brand Compliance",
                "Publish: Social/Blog",
                "Metrics: Engagement Track",
            ]),
            mock_json: r#"{
  "name": "content_forge_v2",
  "type": "n8n_workflow",
  "nodes": [
    "Trend Hook",
    "OpenAI Vision",
    "WordPress API",
    "Buffer Hook"
  ],
  "connections": {}
}"#
            .to_string(),
        },
        Agent {
            id: 5,
            title: "Customer Sentiment Analysis Agents".to_string(),
            summary: "Intelligent listeners that monitor every review, social mention, and \
                      support ticket to provide real-time emotional intelligence for your brand."
                .to_string(),
            icon: "BrainCircuit".to_string(),
            tier: AgentTier::Premium,
            price: "249".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1551288049-bbdac8a28a1e?auto=format&fit=crop&w=800&q=80"
                    .to_string(),
            tags: strings(&["NLP", "Brand Health", "Data Analytics"]),
            long_desc: "Understand the 'Why' behind your customer feedback. These agents don't \
                        just count mentions; they analyze the emotional tone, identifying \
                        potential PR crises before they happen and highlighting what your \
                        customers love most about your products."
                .to_string(),
            how_it_works: "It connects to your feedback streams (Trustpilot, Twitter, Intercom). \
                           It uses Natural Language Processing (NLP) to score sentiment on a \
                           scale of -1 to 1. If a negative sentiment cluster is detected, it \
                           automatically alerts your team and generates a drafted response."
                .to_string(),
            benefits: strings(&[
                "Proactive PR crisis management",
                "Deeper product development insights",
                "Increased customer retention via fast response",
                "Automated reporting for stakeholders",
            ]),
            workflow_nodes: strings(&[
                "Ingest: Social Streams",
                "NLP: Sentiment Scoring",
                "Cluster: Theme Detection",
                "Alert: High Urgency",
                "Respond: Draft Generation",
                "Report: Dashboard Sync",
            ]),
            mock_json: r#"{
  "name": "sentiment_engine",
  "type": "n8n_workflow",
  "nodes": [
    "Webhose.io",
    "Python Sentiment",
    "Slack Alert",
    "Airtable"
  ],
  "connections": {}
}"#
            .to_string(),
        },
        Agent {
            id: 6,
            title: "Market Trend Prediction Agents".to_string(),
            summary: "Strategic forecasters that analyze global market data, competitor moves, \
                      and economic indicators to predict your next big business opportunity."
                .to_string(),
            icon: "Workflow".to_string(),
            tier: AgentTier::Premium,
            price: "499".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=800&q=80"
                    .to_string(),
            tags: strings(&["Forecasting", "Big Data", "Strategic Growth"]),
            long_desc: "Stop reacting and start predicting. This agent acts as a virtual Chief \
                        Strategy Officer, scanning thousands of data points daily to suggest \
                        product pivots, price adjustments, or expansion opportunities based on \
                        emerging market patterns."
                .to_string(),
            how_it_works: "The agent utilizes time-series forecasting and regression models. It \
                           pulls data from competitor pricing APIs, news outlets, and financial \
                           reports. It then runs simulations to find the 'Path of Least \
                           Resistance' for your business growth."
                .to_string(),
            benefits: strings(&[
                "Identify market gaps before competitors",
                "Optimized pricing for maximum margin",
                "Data-backed strategic decision making",
                "Early warning system for industry shifts",
            ]),
            workflow_nodes: strings(&[
                "Extract: Competitor Data",
                "Aggregate: Macro Trends",
                "Predict: Demand Shift",
                "Optimize: Strategy Draft",
                "Notify: Executive Team",
                "Execute: Dynamic Pricing",
            ]),
            mock_json: r#"{
  "name": "prediction_oracle",
  "type": "n8n_workflow",
  "nodes": [
    "Finance API",
    "Trend Analysis",
    "Strategy Generator",
    "Email Report"
  ],
  "connections": {}
}"#
            .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentRecord;
    use std::collections::HashSet;

    #[test]
    fn test_default_counts() {
        assert_eq!(articles().len(), 1);
        assert_eq!(projects().len(), 2);
        assert_eq!(reviews().len(), 2);
        assert_eq!(agents().len(), 6);
    }

    #[test]
    fn test_default_ids_are_unique() {
        let ids: HashSet<i64> = agents().iter().map(ContentRecord::id).collect();
        assert_eq!(ids.len(), agents().len());
    }

    #[test]
    fn test_default_article_seo() {
        let articles = articles();
        assert_eq!(articles[0].title, "The Rise of Agentic AI in 2026");
        assert_eq!(articles[0].seo.score, 95);
    }

    #[test]
    fn test_agent_mock_json_is_valid() {
        for agent in agents() {
            let parsed: serde_json::Value = serde_json::from_str(&agent.mock_json)
                .unwrap_or_else(|e| panic!("agent {} mock_json invalid: {e}", agent.id));
            assert!(parsed.get("nodes").is_some());
        }
    }

    #[test]
    fn test_free_tier_agent() {
        let free: Vec<_> = agents()
            .into_iter()
            .filter(|a| a.tier == AgentTier::Free)
            .collect();
        assert_eq!(free.len(), 1);
        assert_eq!(free[0].price, "0");
    }
}
