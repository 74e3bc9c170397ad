use crate::error::FlowError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of blocks that can be dropped onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Start,
    Facebook,
    Twitter,
    Instagram,
    LandingPage,
    Email,
    Decision,
    Catalogue,
    AiPersonalization,
    MultiPath,
    End,
}

impl NodeKind {
    /// Every kind, in toolbox order.
    pub const ALL: [NodeKind; 11] = [
        NodeKind::Start,
        NodeKind::Facebook,
        NodeKind::Twitter,
        NodeKind::Instagram,
        NodeKind::LandingPage,
        NodeKind::Email,
        NodeKind::Decision,
        NodeKind::Catalogue,
        NodeKind::AiPersonalization,
        NodeKind::MultiPath,
        NodeKind::End,
    ];

    /// The identifier carried by the drag payload and written to exported documents.
    pub fn id(self) -> &'static str {
        match self {
            NodeKind::Start => "start",
            NodeKind::Facebook => "facebook",
            NodeKind::Twitter => "twitter",
            NodeKind::Instagram => "instagram",
            NodeKind::LandingPage => "landing-page",
            NodeKind::Email => "email",
            NodeKind::Decision => "decision",
            NodeKind::Catalogue => "catalogue",
            NodeKind::AiPersonalization => "ai-personalization",
            NodeKind::MultiPath => "multi-path",
            NodeKind::End => "end",
        }
    }

    /// Display label, also the default name of a freshly dropped node.
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Start => "Start",
            NodeKind::Facebook => "Facebook",
            NodeKind::Twitter => "Twitter",
            NodeKind::Instagram => "Instagram",
            NodeKind::LandingPage => "Landing Page",
            NodeKind::Email => "Email",
            NodeKind::Decision => "Decision",
            NodeKind::Catalogue => "Catalogue",
            NodeKind::AiPersonalization => "AI Personalization",
            NodeKind::MultiPath => "Multi-Path",
            NodeKind::End => "End",
        }
    }

    /// Icon class reference. Presentation only.
    pub fn icon(self) -> &'static str {
        match self {
            NodeKind::Start => "fas fa-play",
            NodeKind::Facebook => "fab fa-facebook",
            NodeKind::Twitter => "fab fa-twitter",
            NodeKind::Instagram => "fab fa-instagram",
            NodeKind::LandingPage => "fas fa-file",
            NodeKind::Email => "fas fa-envelope",
            NodeKind::Decision => "fas fa-question",
            NodeKind::Catalogue => "fas fa-book",
            NodeKind::AiPersonalization => "fas fa-robot",
            NodeKind::MultiPath => "fas fa-random",
            NodeKind::End => "fas fa-stop",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for NodeKind {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| FlowError::UnknownNodeKind(s.to_string()))
    }
}
